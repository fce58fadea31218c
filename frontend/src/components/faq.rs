use yew::prelude::*;

use crate::components::{
    animated_section::AnimatedSection,
    icons::{Icon, IconName},
};

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "What types of vehicles does TK Expedited LLC work with?",
        "We specialize in dispatching for sprinter vans, large straight trucks, small straight \
         trucks, and box trucks.",
    ),
    (
        "How much do TK Expedited LLC's dispatch services cost?",
        "Our fee is typically 3% of your gross revenue. For example, on a load worth $1000, our \
         fee would be $30.",
    ),
    (
        "Why choose TK Expedited LLC as my dispatch service?",
        "We offer superior service at competitive rates. Our extensive network of partners \
         across the USA allows us to provide loads that often don't appear on public load boards.",
    ),
    (
        "What's the process of signing up for your dispatch service?",
        "After you apply, our team will promptly review your application. If approved, you'll be \
         assigned a dedicated dispatcher who will begin working with you immediately.",
    ),
    (
        "Are there any hidden fees or commitments?",
        "No, our only fee is the dispatch fee based on your load prices. There are no hidden \
         charges or long-term commitments.",
    ),
];

/// FAQ accordion; one panel open at a time, clicking the open panel closes it.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <div class={classes!("bg-gray-100", "py-16")}>
            <div class={classes!("container", "mx-auto", "px-4")}>
                <AnimatedSection>
                    <h2 class={classes!("text-3xl", "font-bold", "text-center", "mb-12", "text-gray-900")}>
                        { "Frequently Asked Questions" }
                    </h2>
                </AnimatedSection>

                <div class={classes!("max-w-3xl", "mx-auto")}>
                    { for FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                        let is_open = *open_index == Some(index);
                        let onclick = {
                            let open_index = open_index.clone();
                            Callback::from(move |_| {
                                open_index.set(if is_open { None } else { Some(index) });
                            })
                        };

                        let chevron_classes = if is_open {
                            classes!("text-red-600", "transition-transform", "duration-300", "rotate-180")
                        } else {
                            classes!("text-red-600", "transition-transform", "duration-300")
                        };

                        html! {
                            <AnimatedSection>
                                <div class={classes!("border-b", "border-gray-200", "py-4")}>
                                    <button
                                        type="button"
                                        class={classes!(
                                            "flex", "justify-between", "items-center",
                                            "w-full", "text-left"
                                        )}
                                        aria-expanded={is_open.to_string()}
                                        {onclick}
                                    >
                                        <span class={classes!("text-lg", "font-medium", "text-gray-900")}>
                                            { *question }
                                        </span>
                                        <Icon
                                            name={IconName::ChevronDown}
                                            size={20}
                                            class={chevron_classes}
                                        />
                                    </button>
                                    if is_open {
                                        <div class={classes!("mt-2", "text-gray-600")}>
                                            { *answer }
                                        </div>
                                    }
                                </div>
                            </AnimatedSection>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
