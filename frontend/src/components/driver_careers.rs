use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::animated_section::AnimatedSection, router::Route};

const BENEFITS: &[(&str, &str)] = &[
    (
        "Competitive Pay",
        "Earn top industry wages with our performance-based pay structure, regular bonuses, and \
         comprehensive benefits package.",
    ),
    (
        "Flexible Schedule",
        "Choose from various route options including local, regional, and OTR opportunities to \
         match your lifestyle preferences.",
    ),
    (
        "Modern Fleet",
        "Drive well-maintained, late-model trucks equipped with the latest safety features and \
         comfort amenities.",
    ),
    (
        "Safety First",
        "Join a company that prioritizes driver safety with advanced training programs and \
         top-tier equipment maintenance.",
    ),
];

#[function_component(DriverCareers)]
pub fn driver_careers() -> Html {
    html! {
        <div class={classes!("bg-gradient-to-b", "from-[#1B3160]", "to-[#0F1E3C]", "py-20")}>
            <div class={classes!("container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!("text-center", "mb-12")}>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                            { "Drive Your Career Forward" }
                        </h2>
                        <p class={classes!("text-gray-300", "max-w-2xl", "mx-auto")}>
                            { "Professional drivers are the backbone of our operation. Here's what \
                               you can expect behind the wheel with TK Expedited." }
                        </p>
                    </div>
                </AnimatedSection>

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-8", "mb-12")}>
                    { for BENEFITS.iter().map(|(title, description)| html! {
                        <AnimatedSection>
                            <div class={classes!(
                                "bg-white/5", "p-6", "rounded-xl", "border", "border-white/10",
                                "h-full"
                            )}>
                                <h3 class={classes!("text-xl", "font-semibold", "text-white", "mb-2")}>
                                    { *title }
                                </h3>
                                <p class={classes!("text-gray-300")}>{ *description }</p>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>

                <div class={classes!("text-center")}>
                    <Link<Route>
                        to={Route::DriverSetup}
                        classes={classes!(
                            "inline-block", "px-8", "py-4", "bg-white", "text-[#1B3160]",
                            "rounded-lg", "font-semibold", "hover:bg-gray-100",
                            "transition-colors", "duration-200"
                        )}
                    >
                        { "Start Your Application" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
