use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

use crate::components::icons::{Icon, IconName};

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    #[prop_or(NotificationKind::Success)]
    pub kind: NotificationKind,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Bottom-right toast for submit results. Auto-dismisses after 5 s unless
/// told otherwise; re-opens whenever the message changes.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 5000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    let mut wrapper_classes = classes!(
        "fixed",
        "bottom-4",
        "right-4",
        "z-[9999]",
        "flex",
        "items-start",
        "gap-3",
        "rounded-xl",
        "px-5",
        "py-4",
        "text-sm",
        "text-white",
        "shadow-xl",
        "border",
        "backdrop-blur-sm",
        "transition-all",
        "duration-500",
        "ease-out"
    );

    match props.kind {
        NotificationKind::Success => {
            wrapper_classes.push("bg-gradient-to-r");
            wrapper_classes.push("from-[#1B3160]");
            wrapper_classes.push("to-[#0F1E3C]");
            wrapper_classes.push("border-white/10");
        },
        NotificationKind::Error => {
            wrapper_classes.push("bg-gradient-to-r");
            wrapper_classes.push("from-[#4B0000]");
            wrapper_classes.push("to-[#2A0001]");
            wrapper_classes.push("border-red-500/20");
        },
    }

    if *is_open {
        wrapper_classes.push("translate-x-0");
        wrapper_classes.push("opacity-100");
    } else {
        wrapper_classes.push("translate-x-full");
        wrapper_classes.push("opacity-0");
        wrapper_classes.push("pointer-events-none");
    }

    let icon = match props.kind {
        NotificationKind::Success => {
            html! { <Icon name={IconName::Check} size={20} class={classes!("text-green-400")} /> }
        },
        NotificationKind::Error => {
            html! { <Icon name={IconName::X} size={20} class={classes!("text-red-400")} /> }
        },
    };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div class={wrapper_classes} role="alert" aria-live="assertive">
            { icon }
            <p class="font-medium">{ props.message.clone() }</p>
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-6",
                    "w-6",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "text-white/60",
                    "transition-colors",
                    "hover:text-white"
                )}
                aria-label="Dismiss notification"
                onclick={close_button}
            >
                <Icon name={IconName::X} size={14} />
            </button>
        </div>
    }
}
