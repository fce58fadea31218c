mod api;
mod auth;
mod components;
mod config;
pub mod hooks;
mod models;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <auth::AuthProvider>
            <router::AppRouter />
        </auth::AuthProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
