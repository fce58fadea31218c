use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::animated_section::AnimatedSection, router::Route};

const PERKS: &[(&str, &str)] = &[
    (
        "Fast Payments",
        "Get paid quickly and reliably with our efficient payment processing system, ensuring \
         your business maintains healthy cash flow.",
    ),
    (
        "Dedicated Support",
        "Access our professional support team 24/7, ready to assist you with any questions or \
         concerns throughout your journey.",
    ),
    (
        "Quality Loads",
        "Access premium, consistent freight opportunities from our vast network of trusted \
         shippers across the United States.",
    ),
    (
        "Simple Process",
        "Easy onboarding and straightforward documentation process to get you started quickly \
         and efficiently.",
    ),
];

#[function_component(BecomeCarrier)]
pub fn become_carrier() -> Html {
    html! {
        <div class={classes!("bg-gray-800", "py-20")}>
            <div class={classes!("container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!(
                        "grid", "grid-cols-1", "lg:grid-cols-2", "gap-12", "items-center"
                    )}>
                        <div>
                            <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                                { "Become a Partner Carrier" }
                            </h2>
                            <p class={classes!("text-gray-300", "mb-8")}>
                                { "Put your authority to work with steady freight, honest rates, \
                                   and a dispatch team that has your back on every load." }
                            </p>
                            <Link<Route>
                                to={Route::CarrierSetup}
                                classes={classes!(
                                    "inline-block", "px-8", "py-4", "bg-blue-600", "text-white",
                                    "rounded-lg", "font-semibold", "hover:bg-blue-700",
                                    "transition-colors", "duration-200"
                                )}
                            >
                                { "Start Carrier Setup" }
                            </Link<Route>>
                        </div>

                        <div class={classes!("grid", "grid-cols-1", "sm:grid-cols-2", "gap-6")}>
                            { for PERKS.iter().map(|(title, description)| html! {
                                <div class={classes!(
                                    "bg-gray-700/50", "p-5", "rounded-lg", "border",
                                    "border-white/5"
                                )}>
                                    <h3 class={classes!("text-lg", "font-semibold", "text-white", "mb-2")}>
                                        { *title }
                                    </h3>
                                    <p class={classes!("text-gray-300", "text-base")}>{ *description }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </div>
    }
}
