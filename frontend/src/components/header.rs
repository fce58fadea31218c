use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth::use_auth,
    components::icons::{Icon, IconName},
    router::Route,
};

struct NavItem {
    label: &'static str,
    route: Route,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        route: Route::Home,
    },
    NavItem {
        label: "Carrier Setup",
        route: Route::CarrierSetup,
    },
    NavItem {
        label: "Drivers",
        route: Route::DriverSetup,
    },
    NavItem {
        label: "Account",
        route: Route::Account,
    },
];

/// Site navigation bar. The dashboard link only appears for admin sessions;
/// the server still authorizes every admin call on its own.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_auth();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let nav_link = |label: &'static str, route: Route| {
        let close_menu = close_menu.clone();
        html! {
            <Link<Route>
                to={route}
                classes={classes!(
                    "block", "px-4", "py-2", "text-red-100/80", "font-medium",
                    "transition-colors", "duration-200", "hover:text-white"
                )}
            >
                <span onclick={move |_| close_menu.emit(())}>{ label }</span>
            </Link<Route>>
        }
    };

    let mut links: Vec<Html> = NAV_ITEMS
        .iter()
        .map(|item| nav_link(item.label, item.route.clone()))
        .collect();
    if session.is_admin() {
        links.push(nav_link("Dashboard", Route::Admin));
    }

    let menu_classes = if *menu_open {
        classes!("block", "lg:flex", "lg:items-center", "lg:gap-2")
    } else {
        classes!("hidden", "lg:flex", "lg:items-center", "lg:gap-2")
    };

    html! {
        <header class={classes!(
            "sticky", "top-0", "z-40", "bg-[#2A0001]/95", "backdrop-blur-sm",
            "border-b", "border-red-500/10"
        )}>
            <div class={classes!(
                "max-w-7xl", "mx-auto", "px-4", "py-3", "flex", "flex-wrap",
                "items-center", "justify-between", "gap-3"
            )}>
                <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-3")}>
                    <Icon name={IconName::Truck} size={28} class={classes!("text-red-500")} />
                    <span class={classes!("text-white", "font-bold", "tracking-wide")}>
                        { "TK EXPEDITED LLC" }
                    </span>
                </Link<Route>>

                <button
                    type="button"
                    class={classes!("lg:hidden", "text-red-100", "hover:text-white")}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon name={if *menu_open { IconName::X } else { IconName::Menu }} size={24} />
                </button>

                <nav class={classes!(menu_classes, "w-full", "lg:w-auto")}>
                    { for links }
                    <a
                        href="tel:(513) 895-9653"
                        class={classes!(
                            "mt-2", "lg:mt-0", "lg:ml-4", "inline-flex", "items-center", "gap-2",
                            "px-4", "py-2", "rounded-lg", "bg-gradient-to-r", "from-red-600",
                            "to-red-700", "text-white", "font-medium", "transition-all",
                            "duration-300", "hover:from-red-700", "hover:to-red-800"
                        )}
                    >
                        <Icon name={IconName::Phone} size={16} />
                        { "(513) 895-9653" }
                    </a>
                </nav>
            </div>
        </header>
    }
}
