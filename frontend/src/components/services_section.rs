use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::router::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ServiceTab {
    Clients,
    Drivers,
}

const CLIENT_FEATURES: &[(&str, &str)] = &[
    (
        "Express Shipping",
        "Time-critical deliveries with real-time tracking and guaranteed arrival times",
    ),
    (
        "Custom Solutions",
        "Tailored logistics solutions to meet your specific business requirements",
    ),
    (
        "24/7 Support",
        "Round-the-clock customer service and shipment monitoring",
    ),
    (
        "Nationwide Coverage",
        "Extensive network coverage across the United States",
    ),
    (
        "Competitive Rates",
        "Transparent pricing with no hidden fees or surprises",
    ),
    (
        "Safety First",
        "Comprehensive insurance coverage and safety protocols",
    ),
];

const DRIVER_BENEFITS: &[&str] = &[
    "Competitive pay rates and timely payments",
    "Flexible schedule options",
    "Modern equipment and technology",
    "Dedicated dispatch support",
    "Regular route opportunities",
    "Safety incentives and bonuses",
];

const DRIVER_REQUIREMENTS: &[&str] = &[
    "Valid CDL with clean driving record",
    "Minimum 2 years of verifiable experience",
    "DOT medical certification",
    "Professional attitude and appearance",
];

/// Tabbed services overview: what we do for shippers, what we offer drivers.
#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let active_tab = use_state(|| ServiceTab::Clients);
    let navigator = use_navigator();

    let tab_button = |tab: ServiceTab, label: &'static str| {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == tab;
        let onclick = Callback::from(move |_| active_tab.set(tab));
        let classes = if is_active {
            classes!(
                "px-8", "py-3", "rounded-lg", "font-medium", "transition-all", "duration-300",
                "bg-gradient-to-r", "from-red-600", "to-red-700", "text-white", "shadow-lg"
            )
        } else {
            classes!(
                "px-8", "py-3", "rounded-lg", "font-medium", "transition-all", "duration-300",
                "text-red-200", "hover:text-white"
            )
        };
        html! {
            <button type="button" {onclick} class={classes}>{ label }</button>
        }
    };

    let apply_now = Callback::from(move |_| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::DriverSetup);
        }
    });

    let clients_panel = html! {
        <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-6")}>
            { for CLIENT_FEATURES.iter().map(|(title, description)| html! {
                <div class={classes!(
                    "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-6",
                    "rounded-xl", "border", "border-red-500/10", "backdrop-blur-sm",
                    "hover:from-red-900/20", "transition-all", "duration-300"
                )}>
                    <h3 class={classes!("text-xl", "font-semibold", "text-white", "mb-2")}>
                        { *title }
                    </h3>
                    <p class={classes!("text-red-200/80")}>{ *description }</p>
                </div>
            }) }
        </div>
    };

    let drivers_panel = html! {
        <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-8")}>
            <div class={classes!(
                "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-8",
                "rounded-xl", "border", "border-red-500/10", "backdrop-blur-sm"
            )}>
                <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-6")}>
                    { "Join Our Fleet" }
                </h3>
                <ul class={classes!("space-y-4")}>
                    { for DRIVER_BENEFITS.iter().map(|benefit| html! {
                        <li class={classes!("flex", "items-start", "gap-3")}>
                            <div class={classes!(
                                "w-6", "h-6", "rounded-full", "bg-red-500/20", "flex",
                                "items-center", "justify-center", "mt-1", "shrink-0"
                            )}>
                                <div class={classes!("w-2", "h-2", "rounded-full", "bg-red-500")} />
                            </div>
                            <span class={classes!("text-red-100")}>{ *benefit }</span>
                        </li>
                    }) }
                </ul>
            </div>

            <div class={classes!("space-y-6")}>
                <div class={classes!(
                    "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-6",
                    "rounded-xl", "border", "border-red-500/10", "backdrop-blur-sm"
                )}>
                    <h4 class={classes!("text-xl", "font-semibold", "text-white", "mb-3")}>
                        { "Requirements" }
                    </h4>
                    <ul class={classes!("space-y-3", "text-red-200/80")}>
                        { for DRIVER_REQUIREMENTS.iter().map(|req| html! {
                            <li>{ format!("• {req}") }</li>
                        }) }
                    </ul>
                </div>

                <div class={classes!(
                    "bg-gradient-to-br", "from-red-900/10", "to-transparent", "p-6",
                    "rounded-xl", "border", "border-red-500/10", "backdrop-blur-sm"
                )}>
                    <h4 class={classes!("text-xl", "font-semibold", "text-white", "mb-3")}>
                        { "Get Started" }
                    </h4>
                    <p class={classes!("text-red-200/80", "mb-4")}>
                        { "Ready to join our team? Contact our recruitment department:" }
                    </p>
                    <div class={classes!("flex", "items-center", "gap-4")}>
                        <button
                            type="button"
                            onclick={apply_now}
                            class={classes!(
                                "px-6", "py-3", "bg-gradient-to-r", "from-red-600", "to-red-700",
                                "text-white", "rounded-lg", "font-medium", "hover:from-red-700",
                                "hover:to-red-800", "transition-all", "duration-300"
                            )}
                        >
                            { "Apply Now" }
                        </button>
                        <a
                            href="tel:(513) 895-9653"
                            class={classes!("text-red-300", "hover:text-red-200", "transition-colors")}
                        >
                            { "(513) 895-9653" }
                        </a>
                    </div>
                </div>
            </div>
        </div>
    };

    html! {
        <div class={classes!(
            "relative", "min-h-[85vh]", "bg-gradient-to-b", "from-[#2A0001]",
            "to-[#1A0000]", "overflow-hidden"
        )}>
            <div class={classes!("relative", "z-10", "py-16")}>
                <div class={classes!("container", "mx-auto", "px-4", "max-w-6xl")}>
                    <div class={classes!("text-center", "mb-12")}>
                        <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                            { "Your Success, Our Priority" }
                        </h2>
                        <p class={classes!("text-red-200/80", "text-lg")}>
                            { "Comprehensive solutions for both clients and drivers" }
                        </p>
                    </div>

                    <div class={classes!("flex", "justify-center", "mb-12")}>
                        <div class={classes!(
                            "inline-flex", "p-1", "bg-red-950/30", "rounded-xl", "backdrop-blur-sm"
                        )}>
                            { tab_button(ServiceTab::Clients, "For Clients") }
                            { tab_button(ServiceTab::Drivers, "For Drivers") }
                        </div>
                    </div>

                    {
                        match *active_tab {
                            ServiceTab::Clients => clients_panel,
                            ServiceTab::Drivers => drivers_panel,
                        }
                    }
                </div>
            </div>
        </div>
    }
}
