use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api,
    components::{
        forms::{status_banner, SubmitStatus},
        icons::{Icon, IconName},
    },
};
use tk_expedited_shared::ContactMessage;

/// Contact form section at the bottom of the home page.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactMessage::default);
    let status = use_state(|| SubmitStatus::Idle);
    let active_field = use_state(String::new);

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }
            let payload = (*form).clone();
            let form = form.clone();
            let status = status.clone();
            status.set(SubmitStatus::Submitting);
            spawn_local(async move {
                match api::submit_contact_message(&payload).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Success(
                            "Thank you for your message. We'll get back to you soon!".to_string(),
                        ));
                        form.set(ContactMessage::default());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Contact form submit failed: {err}").into(),
                        );
                        status.set(SubmitStatus::Failed(
                            "There was an error submitting the form. Please try again."
                                .to_string(),
                        ));
                    },
                }
            });
        })
    };

    let focus_handlers = |name: &'static str| {
        let active_field = active_field.clone();
        let onfocus = {
            let active_field = active_field.clone();
            Callback::from(move |_: FocusEvent| active_field.set(name.to_string()))
        };
        let onblur = Callback::from(move |_: FocusEvent| active_field.set(String::new()));
        (onfocus, onblur)
    };

    let field_wrapper_classes = |name: &str| {
        if *active_field == name {
            classes!(
                "relative",
                "transition-all",
                "duration-300",
                "transform",
                "-translate-y-1"
            )
        } else {
            classes!("relative", "transition-all", "duration-300")
        }
    };

    let input_classes = classes!(
        "w-full",
        "bg-transparent",
        "border-b-2",
        "border-red-500/30",
        "px-4",
        "py-2",
        "text-red-100",
        "placeholder-red-500/30",
        "focus:border-red-500",
        "focus:outline-none",
        "transition-colors"
    );
    let label_classes = classes!("absolute", "-top-6", "left-0", "text-base", "text-red-400");

    let text_field = |name: &'static str,
                      label: &'static str,
                      placeholder: &'static str,
                      input_type: &'static str,
                      value: String,
                      apply: fn(&mut ContactMessage, String)| {
        let form = form.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        });
        let (onfocus, onblur) = focus_handlers(name);
        html! {
            <div class={field_wrapper_classes(name)}>
                <input
                    type={input_type}
                    name={name}
                    {value}
                    {oninput}
                    {onfocus}
                    {onblur}
                    placeholder={placeholder}
                    required={true}
                    class={input_classes.clone()}
                />
                <label class={label_classes.clone()}>{ label }</label>
            </div>
        }
    };

    let message_field = {
        let message_value = form.message.clone();
        let form = form.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        });
        let (onfocus, onblur) = focus_handlers("message");
        html! {
            <div class={field_wrapper_classes("message")}>
                <textarea
                    name="message"
                    value={message_value}
                    {oninput}
                    {onfocus}
                    {onblur}
                    placeholder="Tell us about your shipping needs..."
                    rows="4"
                    class={classes!(input_classes.clone(), "resize-none")}
                />
                <label class={label_classes.clone()}>{ "Message" }</label>
            </div>
        }
    };

    html! {
        <div class={classes!("relative", "min-h-screen", "bg-[#2A0001]", "overflow-hidden")}>
            <div class={classes!("relative", "z-10")}>
                // Floating contact info
                <div class={classes!("absolute", "top-20", "right-8", "space-y-4", "hidden", "lg:block")}>
                    <div class={classes!(
                        "flex", "items-center", "gap-3", "text-red-300/80",
                        "hover:text-red-200", "transition-colors"
                    )}>
                        <Icon name={IconName::Phone} size={20} />
                        <span>{ "(513) 895-9653" }</span>
                    </div>
                    <div class={classes!(
                        "flex", "items-center", "gap-3", "text-red-300/80",
                        "hover:text-red-200", "transition-colors"
                    )}>
                        <Icon name={IconName::Mail} size={20} />
                        <span>{ "TK EXPEDITED LLC" }</span>
                    </div>
                    <div class={classes!(
                        "flex", "items-center", "gap-3", "text-red-300/80",
                        "hover:text-red-200", "transition-colors"
                    )}>
                        <Icon name={IconName::MapPin} size={20} />
                        <span>{ "LIBERTY TWP, OH" }</span>
                    </div>
                </div>

                <div class={classes!("container", "mx-auto", "px-4", "py-20")}>
                    <div class={classes!("max-w-4xl", "mx-auto")}>
                        <div class={classes!("relative", "mb-16")}>
                            <div class={classes!(
                                "absolute", "-left-4", "top-0", "h-full", "w-1",
                                "bg-gradient-to-b", "from-red-500", "to-transparent"
                            )} />
                            <h2 class={classes!("text-5xl", "font-bold", "text-white", "leading-tight")}>
                                { "Let's Start" }<br />
                                <span class={classes!("text-red-500")}>{ "Something Great" }</span>
                            </h2>
                        </div>

                        <form onsubmit={on_submit} class={classes!("space-y-8")}>
                            <div class={classes!("grid", "grid-cols-2", "gap-x-8", "gap-y-6")}>
                                { text_field("firstName", "First Name", "John", "text",
                                    form.first_name.clone(), |f, v| f.first_name = v) }
                                { text_field("lastName", "Last Name", "Doe", "text",
                                    form.last_name.clone(), |f, v| f.last_name = v) }
                            </div>

                            <div class={classes!(
                                "grid", "grid-cols-1", "lg:grid-cols-2", "gap-x-8", "gap-y-6"
                            )}>
                                { text_field("email", "Email Address", "your@email.com", "email",
                                    form.email.clone(), |f, v| f.email = v) }
                                { message_field }
                            </div>

                            <div class={classes!("flex", "justify-center")}>
                                <button
                                    type="submit"
                                    disabled={status.is_submitting()}
                                    class={classes!(
                                        "w-full", "lg:w-64", "bg-gradient-to-r", "from-red-600",
                                        "to-red-500", "text-white", "py-4", "rounded-lg",
                                        "font-medium", "transition-all", "duration-200",
                                        "hover:from-red-500", "hover:to-red-600",
                                        "disabled:opacity-50"
                                    )}
                                >
                                    { if status.is_submitting() { "Sending..." } else { "Send Message" } }
                                </button>
                            </div>
                        </form>

                        { status_banner(&status) }
                    </div>
                </div>
            </div>
        </div>
    }
}
