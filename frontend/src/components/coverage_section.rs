use yew::prelude::*;

use crate::{components::animated_section::AnimatedSection, utils};

struct RegionInfo {
    name: &'static str,
    states: &'static [&'static str],
    delivery_time: &'static str,
    service_types: &'static [&'static str],
}

const REGIONS: &[RegionInfo] = &[
    RegionInfo {
        name: "Northeast",
        states: &["NY", "NJ", "PA", "MA", "CT", "RI", "VT", "NH", "ME"],
        delivery_time: "1-2 Days",
        service_types: &["Same Day", "Next Day", "Express"],
    },
    RegionInfo {
        name: "Southeast",
        states: &["FL", "GA", "SC", "NC", "VA", "TN", "AL", "MS"],
        delivery_time: "1-3 Days",
        service_types: &["Express", "Standard", "Economy"],
    },
    RegionInfo {
        name: "Midwest",
        states: &["OH", "MI", "IN", "IL", "WI", "MN", "IA", "MO"],
        delivery_time: "1-2 Days",
        service_types: &["Rush", "Standard", "Specialized"],
    },
];

#[function_component(CoverageSection)]
pub fn coverage_section() -> Html {
    let contact_sales = Callback::from(|_| utils::scroll_to_section("contact"));

    html! {
        <div class={classes!("relative", "bg-[#2A0001]", "py-20", "overflow-hidden")}>
            <div class={classes!("relative", "z-10", "container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!("text-center", "mb-12")}>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                            { "Nationwide Coverage" }
                        </h2>
                        <p class={classes!("text-red-200/80", "max-w-2xl", "mx-auto")}>
                            { "With strategic locations across the country, we provide comprehensive \
                               coverage and reliable delivery times to meet your transportation needs." }
                        </p>
                    </div>
                </AnimatedSection>

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-8")}>
                    { for REGIONS.iter().map(|region| html! {
                        <AnimatedSection>
                            <div class={classes!(
                                "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-6",
                                "rounded-xl", "border", "border-red-500/10", "transition-all",
                                "duration-300", "hover:scale-105", "h-full"
                            )}>
                                <h3 class={classes!("text-xl", "font-semibold", "text-white", "mb-4")}>
                                    { region.name }
                                </h3>

                                <div class={classes!("flex", "flex-wrap", "gap-2", "mb-4")}>
                                    { for region.states.iter().map(|state| html! {
                                        <span class={classes!(
                                            "px-2", "py-1", "rounded", "bg-red-950/50",
                                            "text-red-200", "text-xs", "font-mono"
                                        )}>
                                            { *state }
                                        </span>
                                    }) }
                                </div>

                                <p class={classes!("text-red-400", "font-semibold", "mb-4")}>
                                    { format!("Delivery: {}", region.delivery_time) }
                                </p>

                                <ul class={classes!("space-y-1", "text-red-200/80", "text-base")}>
                                    { for region.service_types.iter().map(|service| html! {
                                        <li>{ format!("• {service}") }</li>
                                    }) }
                                </ul>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>

                <div class={classes!("mt-12", "text-center", "max-w-2xl", "mx-auto")}>
                    <p class={classes!("text-red-200/80", "mb-6")}>
                        { "We offer tailored solutions for specific routes and specialized shipping \
                           needs. Contact our team to discuss your requirements." }
                    </p>
                    <button
                        type="button"
                        onclick={contact_sales}
                        class={classes!(
                            "px-8", "py-4", "bg-gradient-to-r", "from-red-600", "to-red-700",
                            "text-white", "rounded-lg", "font-medium", "hover:from-red-700",
                            "hover:to-red-800", "transition-all", "duration-300"
                        )}
                    >
                        { "Contact Sales Team" }
                    </button>
                </div>
            </div>
        </div>
    }
}
