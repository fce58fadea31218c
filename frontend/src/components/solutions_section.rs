use yew::prelude::*;

use crate::{components::animated_section::AnimatedSection, config};

const SOLUTIONS: &[(&str, &str)] = &[
    (
        "Full Truckload (FTL)",
        "Dedicated capacity for large shipments with direct routes and single-driver \
         accountability from dock to dock.",
    ),
    (
        "Less Than Truckload (LTL)",
        "Cost-effective solutions for smaller shipments, combining multiple loads to optimize \
         transportation costs while maintaining delivery efficiency and cargo safety.",
    ),
    (
        "Expedited Services",
        "Time-critical delivery solutions with dedicated vehicles and routes, ensuring your \
         urgent shipments reach their destination with speed and reliability.",
    ),
    (
        "Specialized Transport",
        "Custom transportation solutions using our versatile fleet of straight trucks and vans, \
         tailored to meet specific cargo requirements and delivery schedules.",
    ),
    (
        "Secure Cargo Handling",
        "Advanced cargo tracking and security measures throughout transit, providing real-time \
         updates and ensuring your shipments arrive safely and intact.",
    ),
    (
        "Dedicated Support",
        "A single point of contact for every shipment, from quote to proof of delivery.",
    ),
];

#[function_component(SolutionsSection)]
pub fn solutions_section() -> Html {
    let background = format!(
        "background-image: url('{}')",
        config::asset_path("assets/img/truck-on-highway.jpg")
    );

    html! {
        <div
            class={classes!("relative", "bg-[#1A0000]", "bg-fixed", "bg-cover", "bg-center", "py-20")}
            style={background}
        >
            <div class={classes!("absolute", "inset-0", "bg-black/60")} />
            <div class={classes!("relative", "z-10", "container", "mx-auto", "px-4", "max-w-6xl")}>
                <AnimatedSection>
                    <div class={classes!("text-center", "mb-12")}>
                        <p class={classes!("text-red-400", "font-semibold", "text-lg", "mb-2")}>
                            { "Transportation Solutions" }
                        </p>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white")}>
                            { "The Right Service for Every Shipment" }
                        </h2>
                    </div>
                </AnimatedSection>

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-8")}>
                    { for SOLUTIONS.iter().map(|(title, description)| html! {
                        <AnimatedSection>
                            <div class={classes!(
                                "bg-white", "bg-opacity-5", "p-6", "rounded-lg", "border",
                                "border-red-500/10", "hover:bg-opacity-10", "transition-all",
                                "duration-300", "h-full"
                            )}>
                                <h3 class={classes!("text-xl", "font-semibold", "text-white", "mb-3")}>
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
