use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::{self, ApiError},
    auth::{self, use_auth},
    components::{
        forms::{status_banner, SubmitStatus},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_scroll_to_top,
};

/// Account page: session overview plus sign-in/sign-out against the
/// external identity provider.
#[function_component(AccountPage)]
pub fn account_page() -> Html {
    use_scroll_to_top();
    let session = use_auth();

    if session.loading {
        return html! {
            <main class={classes!(
                "min-h-[60vh]", "flex", "items-center", "justify-center", "bg-gray-50"
            )}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </main>
        };
    }

    html! {
        <main class={classes!(
            "min-h-screen", "flex", "items-center", "justify-center", "bg-gray-50",
            "py-12", "px-4"
        )}>
            <div class={classes!("max-w-md", "w-full", "space-y-8")}>
                {
                    if let Some(user) = session.user.clone() {
                        let display = if user.display_name.is_empty() {
                            user.email.clone()
                        } else {
                            user.display_name.clone()
                        };
                        let sign_out = {
                            let on_sign_out = session.on_sign_out.clone();
                            Callback::from(move |_| on_sign_out.emit(()))
                        };
                        html! {
                            <>
                                <h2 class={classes!(
                                    "text-center", "text-3xl", "font-extrabold", "text-gray-900"
                                )}>
                                    { format!("Welcome, {display}") }
                                </h2>
                                <div class={classes!("text-center", "text-gray-600")}>
                                    <p>{ user.email.clone() }</p>
                                    if !user.roles.is_empty() {
                                        <p class={classes!("mt-2", "text-sm", "text-gray-500")}>
                                            { format!("Roles: {}", user.roles.join(", ")) }
                                        </p>
                                    }
                                </div>
                                <button
                                    type="button"
                                    onclick={sign_out}
                                    class={classes!(
                                        "w-full", "flex", "justify-center", "py-2", "px-4",
                                        "border", "border-transparent", "text-base", "font-medium",
                                        "rounded-md", "text-white", "bg-red-600",
                                        "hover:bg-red-700"
                                    )}
                                >
                                    { "Sign Out" }
                                </button>
                            </>
                        }
                    } else {
                        html! { <SignInForm /> }
                    }
                }
            </div>
        </main>
    }
}

#[function_component(SignInForm)]
fn sign_in_form() -> Html {
    let session = use_auth();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let status = status.clone();
        let on_refresh = session.on_refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }
            let email = (*email).clone();
            let password = (*password).clone();
            let status = status.clone();
            let on_refresh = on_refresh.clone();
            status.set(SubmitStatus::Submitting);
            spawn_local(async move {
                match api::sign_in(&email, &password).await {
                    Ok(grant) => {
                        auth::store_session(&grant.refresh_token);
                        status.set(SubmitStatus::Idle);
                        on_refresh.emit(());
                    },
                    Err(ApiError::Authentication) => {
                        status.set(SubmitStatus::Failed(
                            "Invalid email or password.".to_string(),
                        ));
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("Sign-in failed: {err}").into());
                        status.set(SubmitStatus::Failed(
                            "Could not sign in right now. Please try again.".to_string(),
                        ));
                    },
                }
            });
        })
    };

    let input_classes = classes!(
        "w-full",
        "border",
        "border-gray-300",
        "rounded-md",
        "px-4",
        "py-2",
        "text-gray-900",
        "focus:border-red-500",
        "focus:outline-none"
    );

    let email_oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let password_oninput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <>
            <h2 class={classes!("text-center", "text-3xl", "font-extrabold", "text-gray-900")}>
                { "Your Account" }
            </h2>
            <form onsubmit={on_submit} class={classes!("mt-8", "space-y-4")}>
                <input
                    type="email"
                    name="email"
                    placeholder="Email address"
                    value={(*email).clone()}
                    oninput={email_oninput}
                    required={true}
                    class={input_classes.clone()}
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={password_oninput}
                    required={true}
                    class={input_classes.clone()}
                />
                <button
                    type="submit"
                    disabled={status.is_submitting()}
                    class={classes!(
                        "w-full", "flex", "justify-center", "py-2", "px-4", "border",
                        "border-transparent", "text-base", "font-medium", "rounded-md",
                        "text-white", "bg-blue-600", "hover:bg-blue-700",
                        "disabled:opacity-50"
                    )}
                >
                    { if status.is_submitting() { "Signing In..." } else { "Sign In" } }
                </button>
            </form>
            { status_banner(&status) }
        </>
    }
}
