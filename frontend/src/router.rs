use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/carrier-setup")]
    CarrierSetup,

    #[at("/drivers")]
    DriverSetup,

    #[at("/privacy")]
    Privacy,

    #[at("/account")]
    Account,

    #[at("/admin")]
    Admin,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::CarrierSetup => html! { <pages::carrier_setup::CarrierSetupPage /> },
        Route::DriverSetup => html! { <pages::driver_setup::DriverSetupPage /> },
        Route::Privacy => html! { <pages::privacy::PrivacyPage /> },
        Route::Account => html! { <pages::account::AccountPage /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
