use yew::prelude::*;

use crate::components::{
    animated_section::AnimatedSection,
    icons::{Icon, IconName},
};

struct FleetItem {
    name: &'static str,
    description: &'static str,
    capacity: &'static str,
    features: [&'static str; 3],
}

const FLEET: &[FleetItem] = &[
    FleetItem {
        name: "Sprinter Vans",
        description: "Perfect for time-sensitive deliveries and smaller freight loads",
        capacity: "Up to 3,500 lbs",
        features: ["Quick delivery", "Urban-friendly", "Temperature controlled"],
    },
    FleetItem {
        name: "Box Trucks",
        description: "Ideal for medium-sized shipments and local deliveries",
        capacity: "Up to 26,000 lbs",
        features: ["Liftgate available", "Side door access", "Multi-stop capable"],
    },
    FleetItem {
        name: "Semi-Trucks",
        description: "For large shipments and long-haul transportation",
        capacity: "Up to 80,000 lbs",
        features: ["Coast-to-coast service", "Team drivers available", "Advanced tracking"],
    },
];

#[derive(Properties, PartialEq)]
pub struct FleetSectionProps {
    /// Opens the quote modal with the given dialog title.
    pub on_quote: Callback<String>,
}

#[function_component(FleetSection)]
pub fn fleet_section(props: &FleetSectionProps) -> Html {
    let request_quote = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_| on_quote.emit("Request a Quote".to_string()))
    };

    html! {
        <div class={classes!("relative", "bg-[#1A0000]", "py-20", "overflow-hidden")}>
            <div class={classes!("relative", "z-10", "container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!("text-center", "mb-12")}>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                            { "Our Modern Fleet" }
                        </h2>
                        <p class={classes!("text-red-200/80", "max-w-2xl", "mx-auto")}>
                            { "Equipped with cutting-edge technology and maintained to the highest \
                               standards, our diverse fleet ensures reliable and efficient \
                               transportation solutions." }
                        </p>
                    </div>
                </AnimatedSection>

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-8")}>
                    { for FLEET.iter().map(|item| html! {
                        <AnimatedSection>
                            <div class={classes!(
                                "group", "relative", "bg-gradient-to-br", "from-red-900/10",
                                "to-transparent", "p-6", "rounded-2xl", "border",
                                "border-red-500/10", "transition-all", "duration-300",
                                "group-hover:from-red-900/20", "h-full"
                            )}>
                                <div class={classes!(
                                    "w-12", "h-12", "rounded-lg", "bg-red-900/30", "flex",
                                    "items-center", "justify-center", "mb-4", "text-red-400"
                                )}>
                                    <Icon name={IconName::Truck} size={24} />
                                </div>
                                <h3 class={classes!("text-xl", "font-semibold", "text-white", "mb-2")}>
                                    { item.name }
                                </h3>
                                <p class={classes!("text-red-200/80", "mb-3")}>{ item.description }</p>
                                <p class={classes!("text-red-400", "font-semibold", "text-base", "mb-4")}>
                                    { item.capacity }
                                </p>
                                <ul class={classes!("space-y-2")}>
                                    { for item.features.iter().map(|feature| html! {
                                        <li class={classes!(
                                            "flex", "items-center", "gap-2", "text-red-100/90",
                                            "text-base"
                                        )}>
                                            <Icon
                                                name={IconName::Check}
                                                size={16}
                                                class={classes!("text-red-500")}
                                            />
                                            { *feature }
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>

                <div class={classes!("mt-12", "text-center")}>
                    <button
                        type="button"
                        onclick={request_quote}
                        class={classes!(
                            "px-8", "py-4", "bg-gradient-to-r", "from-red-600", "to-red-700",
                            "text-white", "rounded-lg", "font-medium", "hover:from-red-700",
                            "hover:to-red-800", "transition-all", "duration-300", "shadow-lg",
                            "shadow-red-900/30"
                        )}
                    >
                        { "Request a Quote" }
                    </button>
                </div>
            </div>
        </div>
    }
}
