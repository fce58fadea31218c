//! Identity context for the whole app.
//!
//! The identity provider is external; this module owns the client-side
//! session lifecycle: restore on mount, expose the signed-in user and role
//! claims through a yew context, and hand out a fresh bearer token for each
//! authenticated request. Tokens are short-lived and deliberately never
//! cached across calls.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use tk_expedited_shared::UserInfo;

#[cfg(not(feature = "mock"))]
const SESSION_KEY: &str = "tkx.session";

#[cfg(not(feature = "mock"))]
fn read_session() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_KEY).ok()?
}

/// Persist the identity provider's session grant after sign-in.
pub fn store_session(refresh_token: &str) {
    #[cfg(feature = "mock")]
    {
        let _ = refresh_token;
    }

    #[cfg(not(feature = "mock"))]
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SESSION_KEY, refresh_token);
    }
}

fn clear_session() {
    #[cfg(not(feature = "mock"))]
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// A fresh bearer token for exactly one request.
///
/// Fails with [`ApiError::Authentication`] when no session grant is stored.
pub async fn current_id_token() -> Result<String, ApiError> {
    #[cfg(feature = "mock")]
    {
        return api::fetch_id_token("mock-refresh-token").await;
    }

    #[cfg(not(feature = "mock"))]
    {
        let Some(refresh_token) = read_session() else {
            return Err(ApiError::Authentication);
        };
        api::fetch_id_token(&refresh_token).await
    }
}

async fn load_session() -> Result<Option<UserInfo>, ApiError> {
    // No stored grant is the ordinary signed-out state, not a failure.
    #[cfg(not(feature = "mock"))]
    if read_session().is_none() {
        return Ok(None);
    }

    let token = current_id_token().await?;
    let info = api::fetch_user_info(&token).await?;
    Ok(Some(info))
}

/// The app-wide identity snapshot plus the two session controls.
#[derive(Clone, PartialEq)]
pub struct AuthSession {
    /// Signed-in user, if any.
    pub user: Option<UserInfo>,
    /// True until the initial session restore finishes.
    pub loading: bool,
    /// Re-run the session restore (e.g. after sign-in).
    pub on_refresh: Callback<()>,
    /// Drop the stored grant and return to the signed-out state.
    pub on_sign_out: Callback<()>,
}

impl AuthSession {
    /// Role claims for the current user; empty when signed out.
    pub fn roles(&self) -> &[String] {
        self.user.as_ref().map(|u| u.roles.as_slice()).unwrap_or(&[])
    }

    /// Whether the current user carries the given role tag.
    pub fn has_role(&self, tag: &str) -> bool {
        self.roles().iter().any(|r| r == tag)
    }

    /// Whether the dashboard should even be offered. The server still
    /// enforces the role on every admin call.
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let user = use_state(|| None::<UserInfo>);
    let loading = use_state(|| true);

    let refresh = {
        let user = user.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let user = user.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                match load_session().await {
                    Ok(info) => user.set(info),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to restore session: {err}").into(),
                        );
                        user.set(None);
                    },
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let sign_out = {
        let user = user.clone();
        Callback::from(move |_| {
            clear_session();
            user.set(None);
        })
    };

    let session = AuthSession {
        user: (*user).clone(),
        loading: *loading,
        on_refresh: refresh,
        on_sign_out: sign_out,
    };

    html! {
        <ContextProvider<AuthSession> context={session}>
            { props.children.clone() }
        </ContextProvider<AuthSession>>
    }
}

/// Access the identity context. Panics if no [`AuthProvider`] wraps the tree.
#[hook]
pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>().expect("AuthProvider is mounted at the app root")
}
