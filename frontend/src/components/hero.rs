use yew::prelude::*;

use crate::{components::animated_section::AnimatedSection, utils};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Opens the quote modal with the given dialog title.
    pub on_quote: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let open_quote = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_| on_quote.emit("Get Instant Quote".to_string()))
    };
    let view_services = Callback::from(|_| utils::scroll_to_section("services"));

    html! {
        <div class={classes!(
            "relative", "min-h-[70vh]", "md:min-h-screen", "overflow-hidden", "bg-[#2A0001]"
        )}>
            // Layered radial background
            <div class={classes!("absolute", "inset-0")}>
                <div class={classes!(
                    "absolute", "inset-0",
                    "bg-[radial-gradient(circle_500px_at_50%_200px,#4B000090,transparent)]"
                )} />
                <div class={classes!(
                    "absolute", "bottom-0", "right-0", "w-1/2", "h-1/2",
                    "bg-[radial-gradient(circle_400px_at_80%_80%,#4B000060,transparent)]"
                )} />
            </div>

            // Authority line
            <div class={classes!("relative", "w-full", "max-w-6xl", "mx-auto", "px-4")}>
                <div class={classes!("flex", "justify-between", "items-center", "p-2", "sm:p-4")}>
                    <div class={classes!("text-red-500", "font-mono", "text-xs", "tracking-wider")}>
                        { "MC-1594232" }
                    </div>
                    <div class={classes!("text-red-500/50", "font-mono", "text-xs", "tracking-wider")}>
                        { "LIBERTY TWP, OH" }
                    </div>
                </div>
            </div>

            <div class={classes!("relative", "mx-auto", "px-4", "py-20", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!(
                        "grid", "grid-cols-1", "lg:grid-cols-5", "gap-8", "items-center"
                    )}>
                        // Company intro
                        <div class={classes!("lg:col-span-3", "space-y-6")}>
                            <div>
                                <div class={classes!("text-lg", "text-red-400", "font-light", "mb-2")}>
                                    { "TK EXPEDITED LLC" }
                                </div>
                                <h1 class={classes!("text-5xl", "lg:text-6xl", "font-bold")}>
                                    <span class={classes!("block", "text-white/90")}>{ "Strategic" }</span>
                                    <span class={classes!(
                                        "block", "mt-1", "bg-gradient-to-r", "from-red-500",
                                        "to-orange-400", "bg-clip-text", "text-transparent"
                                    )}>
                                        { "Logistics" }
                                    </span>
                                </h1>
                            </div>

                            <p class={classes!("text-base", "text-red-100/80", "leading-relaxed", "max-w-xl")}>
                                { "Transforming the landscape of expedited shipping with innovative \
                                   solutions and unwavering commitment to excellence." }
                            </p>

                            <div class={classes!("grid", "grid-cols-2", "gap-3")}>
                                { highlight("24/7 Support") }
                                { highlight("Live Tracking") }
                            </div>
                        </div>

                        // Call to action card
                        <div class={classes!("lg:col-span-2")}>
                            <div class={classes!(
                                "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-6",
                                "rounded-xl", "border", "border-red-500/10", "backdrop-blur-sm"
                            )}>
                                <h2 class={classes!("text-xl", "font-semibold", "text-red-100", "mb-4")}>
                                    { "Ready to Ship?" }
                                </h2>

                                <div class={classes!("space-y-3")}>
                                    <button
                                        type="button"
                                        onclick={open_quote}
                                        class={classes!(
                                            "w-full", "py-3", "px-4", "bg-gradient-to-r",
                                            "from-red-600", "to-red-700", "rounded-lg", "text-white",
                                            "font-medium", "transition-transform", "hover:scale-105"
                                        )}
                                    >
                                        { "Get Instant Quote" }
                                    </button>

                                    <button
                                        type="button"
                                        onclick={view_services}
                                        class={classes!(
                                            "w-full", "py-3", "px-4", "bg-red-950/50", "rounded-lg",
                                            "text-red-200", "font-medium", "border",
                                            "border-red-500/20", "transition-colors",
                                            "hover:bg-red-950/70"
                                        )}
                                    >
                                        { "View Services" }
                                    </button>
                                </div>

                                <div class={classes!("mt-6", "pt-4", "border-t", "border-red-500/10")}>
                                    <p class={classes!("text-red-200/70", "text-xs")}>
                                        { "Contact our team" }
                                    </p>
                                    <a
                                        href="tel:(513) 895-9653"
                                        class={classes!(
                                            "text-base", "text-red-100", "font-medium",
                                            "hover:text-red-300", "transition-colors"
                                        )}
                                    >
                                        { "(513) 895-9653" }
                                    </a>
                                </div>
                            </div>
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </div>
    }
}

fn highlight(label: &'static str) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "gap-2")}>
            <div class={classes!(
                "w-8", "h-8", "rounded-lg", "bg-red-900/30", "flex",
                "items-center", "justify-center"
            )}>
                <div class={classes!("w-1.5", "h-1.5", "rounded-full", "bg-red-500", "animate-ping")} />
            </div>
            <div class={classes!("text-red-200", "text-base")}>{ label }</div>
        </div>
    }
}
