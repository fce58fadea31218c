use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!(
            "min-h-[60vh]", "flex", "flex-col", "items-center", "justify-center",
            "bg-[#2A0001]", "text-center", "px-4", "py-20"
        )}>
            <p class={classes!("text-red-500", "font-mono", "text-sm", "tracking-widest", "mb-4")}>
                { "404" }
            </p>
            <h1 class={classes!("text-4xl", "font-bold", "text-white", "mb-4")}>
                { "This route doesn't exist" }
            </h1>
            <p class={classes!("text-red-200/80", "mb-8")}>
                { "The page you're looking for may have moved or never shipped." }
            </p>
            <Link<Route>
                to={Route::Home}
                classes={classes!(
                    "px-6", "py-3", "bg-gradient-to-r", "from-red-600", "to-red-700",
                    "text-white", "rounded-lg", "font-medium", "hover:from-red-700",
                    "hover:to-red-800", "transition-all", "duration-300"
                )}
            >
                { "Back to Home" }
            </Link<Route>>
        </main>
    }
}
