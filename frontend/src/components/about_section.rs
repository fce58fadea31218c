use yew::prelude::*;

use crate::components::{
    animated_section::AnimatedSection,
    icons::{Icon, IconName},
};

const PILLARS: &[(&str, &str, IconName)] = &[
    (
        "Professional Team",
        "Seasoned dispatchers and drivers who treat every load like it's the only one on the board.",
        IconName::Users,
    ),
    (
        "Custom Solutions",
        "Route planning, equipment selection, and scheduling shaped around each customer's freight.",
        IconName::ClipboardCheck,
    ),
    (
        "Reliability",
        "On-time performance backed by live tracking and proactive communication at every milestone.",
        IconName::Shield,
    ),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <div class={classes!("bg-gradient-to-b", "from-[#2A0001]", "to-[#1A0000]", "py-20")}>
            <div class={classes!("container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!("text-center", "mb-12")}>
                        <p class={classes!("text-red-400", "font-semibold", "text-lg", "mb-2")}>
                            { "About Us" }
                        </p>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                            { "Built Around Your Freight" }
                        </h2>
                        <p class={classes!("text-red-200/80", "max-w-2xl", "mx-auto")}>
                            { "TK Expedited LLC pairs a versatile fleet with a dispatch team that \
                               answers around the clock, moving time-critical freight across the \
                               country since day one." }
                        </p>
                    </div>
                </AnimatedSection>

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-8")}>
                    { for PILLARS.iter().map(|(title, description, icon)| html! {
                        <AnimatedSection>
                            <div class={classes!(
                                "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-6",
                                "rounded-xl", "border", "border-red-500/10", "backdrop-blur-sm",
                                "h-full"
                            )}>
                                <div class={classes!(
                                    "w-12", "h-12", "rounded-lg", "bg-red-900/30", "flex",
                                    "items-center", "justify-center", "mb-4", "text-red-400"
                                )}>
                                    <Icon name={*icon} size={24} />
                                </div>
                                <h3 class={classes!("text-xl", "font-semibold", "text-white", "mb-2")}>
                                    { *title }
                                </h3>
                                <p class={classes!("text-red-200/80")}>{ *description }</p>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </div>
        </div>
    }
}
