use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        forms::SubmitStatus,
        icons::{Icon, IconName},
        notification::{Notification, NotificationKind},
    },
    router::Route,
    utils,
};
use tk_expedited_shared::NewsletterSignup;

const SECTION_LINKS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Services", "services"),
    ("Fleet", "fleet"),
    ("Coverage", "coverage"),
    ("Contact", "contact"),
];

/// Site footer: newsletter signup, section navigation, and contact details.
#[function_component(Footer)]
pub fn footer() -> Html {
    let form = use_state(NewsletterSignup::default);
    let status = use_state(|| SubmitStatus::Idle);
    let current_year = js_sys::Date::new_0().get_full_year();

    let on_input = |apply: fn(&mut NewsletterSignup, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

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
                match api::subscribe_newsletter(&payload).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Success(
                            "Thank you for subscribing!".to_string(),
                        ));
                        form.set(NewsletterSignup::default());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Newsletter signup failed: {err}").into(),
                        );
                        status.set(SubmitStatus::Failed(
                            "An error occurred. Please try again.".to_string(),
                        ));
                    },
                }
            });
        })
    };

    let clear_status = {
        let status = status.clone();
        Callback::from(move |_| status.set(SubmitStatus::Idle))
    };

    let newsletter_input_classes = classes!(
        "flex-1",
        "bg-red-900/20",
        "border",
        "border-red-500/20",
        "rounded-lg",
        "px-4",
        "py-2",
        "text-red-100",
        "placeholder-red-300/50",
        "focus:border-red-500/40",
        "focus:ring-0"
    );

    let toast = match &*status {
        SubmitStatus::Success(message) => html! {
            <Notification
                message={message.clone()}
                kind={NotificationKind::Success}
                on_close={Some(clear_status.clone())}
            />
        },
        SubmitStatus::Failed(message) => html! {
            <Notification
                message={message.clone()}
                kind={NotificationKind::Error}
                on_close={Some(clear_status.clone())}
            />
        },
        _ => Html::default(),
    };

    html! {
        <footer class={classes!("relative", "bg-[#2A0001]", "overflow-hidden")}>
            <div class={classes!("absolute", "inset-0")}>
                <div class={classes!(
                    "absolute", "inset-0",
                    "bg-[radial-gradient(ellipse_at_center,#4B000030,transparent)]"
                )} />
            </div>

            <div class={classes!("relative")}>
                <div class={classes!("max-w-7xl", "mx-auto", "px-4", "pt-16", "pb-12")}>
                    <div class={classes!("grid", "grid-cols-1", "lg:grid-cols-6", "gap-12")}>
                        // Newsletter
                        <div class={classes!("lg:col-span-2", "space-y-8")}>
                            <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-3")}>
                                <Icon name={IconName::Truck} size={32} class={classes!("text-red-500")} />
                                <span class={classes!("text-white", "font-bold", "text-lg")}>
                                    { "TK EXPEDITED LLC" }
                                </span>
                            </Link<Route>>

                            <div>
                                <h3 class={classes!("text-lg", "font-medium", "text-white", "mb-4")}>
                                    { "Stay Updated" }
                                </h3>
                                <form onsubmit={on_submit} class={classes!("space-y-3")}>
                                    <div class={classes!("flex", "gap-3")}>
                                        <input
                                            type="text"
                                            name="name"
                                            value={form.name.clone()}
                                            oninput={on_input(|f, v| f.name = v)}
                                            placeholder="Your name"
                                            class={newsletter_input_classes.clone()}
                                        />
                                        <input
                                            type="tel"
                                            name="phone"
                                            value={form.phone.clone()}
                                            oninput={on_input(|f, v| f.phone = v)}
                                            placeholder="Phone"
                                            class={newsletter_input_classes.clone()}
                                        />
                                    </div>
                                    <div class={classes!("flex", "gap-3")}>
                                        <input
                                            type="email"
                                            name="email"
                                            value={form.email.clone()}
                                            oninput={on_input(|f, v| f.email = v)}
                                            placeholder="Your email"
                                            required={true}
                                            class={newsletter_input_classes.clone()}
                                        />
                                        <button
                                            type="submit"
                                            disabled={status.is_submitting()}
                                            class={classes!(
                                                "px-6", "bg-gradient-to-r", "from-red-600", "to-red-700",
                                                "text-white", "rounded-lg", "font-medium",
                                                "transition-all", "duration-300",
                                                "hover:from-red-700", "hover:to-red-800",
                                                "disabled:opacity-50"
                                            )}
                                        >
                                            { if status.is_submitting() { "..." } else { "Join" } }
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>

                        // Section navigation
                        <div class={classes!("lg:col-span-2", "grid", "grid-cols-2", "gap-8")}>
                            <div>
                                <h3 class={classes!("text-lg", "font-medium", "text-white", "mb-4")}>
                                    { "Company" }
                                </h3>
                                <ul class={classes!("space-y-2")}>
                                    { for SECTION_LINKS[..3].iter().map(|(label, id)| section_button(label, id)) }
                                </ul>
                            </div>
                            <div>
                                <h3 class={classes!("text-lg", "font-medium", "text-white", "mb-4")}>
                                    { "Services" }
                                </h3>
                                <ul class={classes!("space-y-2")}>
                                    { for SECTION_LINKS[3..].iter().map(|(label, id)| section_button(label, id)) }
                                </ul>
                            </div>
                        </div>

                        // Contact details
                        <div class={classes!("lg:col-span-2")}>
                            <h3 class={classes!("text-lg", "font-medium", "text-white", "mb-4")}>
                                { "Get in Touch" }
                            </h3>
                            <div class={classes!("space-y-4")}>
                                <a
                                    href="tel:(513) 895-9653"
                                    class={classes!(
                                        "flex", "items-center", "gap-3", "text-red-200/80",
                                        "hover:text-white", "transition-colors", "duration-200"
                                    )}
                                >
                                    <Icon name={IconName::Phone} size={20} />
                                    <span>{ "(513) 895-9653" }</span>
                                </a>
                                <a
                                    href="mailto:info@tkexpedited.com"
                                    class={classes!(
                                        "flex", "items-center", "gap-3", "text-red-200/80",
                                        "hover:text-white", "transition-colors", "duration-200"
                                    )}
                                >
                                    <Icon name={IconName::Mail} size={20} />
                                    <span>{ "info@tkexpedited.com" }</span>
                                </a>
                                <div class={classes!("flex", "items-start", "gap-3", "text-red-200/80")}>
                                    <Icon name={IconName::MapPin} size={20} class={classes!("mt-1")} />
                                    <div>
                                        { "4584 SNOWBIRD DR" }<br />
                                        { "LIBERTY TWP, OH 45011" }
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                // Bottom bar
                <div class={classes!("relative", "border-t", "border-red-500/10")}>
                    <div class={classes!("max-w-7xl", "mx-auto", "px-4", "py-6")}>
                        <div class={classes!(
                            "flex", "flex-col", "md:flex-row", "justify-between",
                            "items-center", "gap-4"
                        )}>
                            <p class={classes!("text-red-200/60", "text-base")}>
                                { format!("© {current_year} TK Expedited LLC. All rights reserved.") }
                            </p>
                            <div class={classes!("flex", "items-center", "gap-6")}>
                                <Link<Route>
                                    to={Route::Privacy}
                                    classes={classes!(
                                        "text-red-200/60", "hover:text-white", "text-base",
                                        "transition-colors", "duration-200"
                                    )}
                                >
                                    { "Privacy Policy" }
                                </Link<Route>>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            { toast }
        </footer>
    }
}

fn section_button(label: &'static str, id: &'static str) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| utils::scroll_to_section(id));
    html! {
        <li>
            <button
                type="button"
                {onclick}
                class={classes!(
                    "text-red-200/80", "hover:text-white",
                    "transition-colors", "duration-200"
                )}
            >
                { label }
            </button>
        </li>
    }
}
