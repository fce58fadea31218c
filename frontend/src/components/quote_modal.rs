use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api,
    components::{
        forms::{status_banner, LabeledInput, SubmitStatus},
        icons::{Icon, IconName},
    },
    utils,
};
use tk_expedited_shared::QuoteRequest;

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub is_open: bool,
    pub title: String,
    pub on_close: Callback<()>,
}

/// Quote request dialog opened from the hero, fleet, and coverage CTAs.
///
/// Body scrolling is locked while the dialog is open and restored on close
/// or unmount.
#[function_component(QuoteModal)]
pub fn quote_modal(props: &QuoteModalProps) -> Html {
    let form = use_state(QuoteRequest::default);
    let status = use_state(|| SubmitStatus::Idle);

    use_effect_with(props.is_open, move |is_open| {
        utils::set_body_scroll_locked(*is_open);
        || utils::set_body_scroll_locked(false)
    });

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
                match api::submit_quote_request(&payload).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Success(
                            "Quote request submitted successfully! We'll contact you shortly."
                                .to_string(),
                        ));
                        form.set(QuoteRequest::default());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Quote request failed: {err}").into(),
                        );
                        status.set(SubmitStatus::Failed(
                            "There was an error submitting your request. Please try again."
                                .to_string(),
                        ));
                    },
                }
            });
        })
    };

    let field = |label: &str,
                 name: &str,
                 input_type: &str,
                 placeholder: &str,
                 value: String,
                 apply: fn(&mut QuoteRequest, String)| {
        let form = form.clone();
        let on_change = Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        });
        html! {
            <LabeledInput
                label={label.to_string()}
                name={name.to_string()}
                input_type={input_type.to_string()}
                placeholder={placeholder.to_string()}
                {value}
                {on_change}
                required={true}
            />
        }
    };

    if !props.is_open {
        return Html::default();
    }

    let backdrop_onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let close_onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("fixed", "inset-0", "z-50", "overflow-y-auto")}>
            <div
                class={classes!("fixed", "inset-0", "bg-black/70", "backdrop-blur-sm", "transition-opacity")}
                onclick={backdrop_onclick}
            />

            <div class={classes!("relative", "min-h-screen", "flex", "items-center", "justify-center", "p-4")}>
                <div class={classes!(
                    "relative", "bg-gradient-to-br", "from-[#2A0001]", "to-[#1A0000]",
                    "rounded-xl", "max-w-lg", "w-full", "p-8", "shadow-2xl",
                    "shadow-red-900/20", "border", "border-red-500/10"
                )}>
                    <button
                        type="button"
                        class={classes!(
                            "absolute", "top-4", "right-4", "text-red-200/80",
                            "hover:text-white", "transition-colors", "duration-200"
                        )}
                        aria-label="Close quote dialog"
                        onclick={close_onclick}
                    >
                        <Icon name={IconName::X} size={24} />
                    </button>

                    <div class={classes!("text-center", "mb-8")}>
                        <h2 class={classes!("text-2xl", "font-bold", "text-white", "mb-2")}>
                            { props.title.clone() }
                        </h2>
                        <p class={classes!("text-red-200/80", "text-base")}>
                            { "Fill out the form below and we'll provide you with a competitive quote." }
                        </p>
                    </div>

                    <form onsubmit={on_submit} class={classes!("space-y-6")}>
                        <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6")}>
                            { field("Name", "name", "text", "Enter your name",
                                form.name.clone(), |f, v| f.name = v) }
                            { field("Phone", "phone", "tel", "Enter your phone",
                                form.phone.clone(), |f, v| f.phone = v) }
                        </div>
                        { field("Email", "email", "email", "Enter your email",
                            form.email.clone(), |f, v| f.email = v) }
                        { field("Pickup Location", "pickupLocation", "text", "Enter pickup location",
                            form.pickup_location.clone(), |f, v| f.pickup_location = v) }
                        { field("Delivery Location", "deliveryLocation", "text", "Enter delivery location",
                            form.delivery_location.clone(), |f, v| f.delivery_location = v) }

                        <button
                            type="submit"
                            disabled={status.is_submitting()}
                            class={classes!(
                                "w-full", "bg-gradient-to-r", "from-red-600", "to-red-700",
                                "text-white", "py-4", "rounded-lg", "font-medium",
                                "transition-all", "duration-300", "hover:from-red-700",
                                "hover:to-red-800", "disabled:opacity-50",
                                "disabled:cursor-not-allowed"
                            )}
                        >
                            { if status.is_submitting() { "Submitting..." } else { "Request Quote" } }
                        </button>
                    </form>

                    { status_banner(&status) }
                </div>
            </div>
        </div>
    }
}
