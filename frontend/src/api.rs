#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tk_expedited_shared::{
    Carrier, ContactMessage, DriverApplication, NewsletterSignup, QuoteRequest, User, UserInfo,
    UserPatch,
};

#[cfg(feature = "mock")]
use crate::models;

// API base URL - resolved at compile time, defaults to local development.
// Production builds set TKX_API_BASE in the release workflow.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("TKX_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// Why an API call failed.
///
/// Success and failure are carried by this tagged type, never inferred from
/// message text. `Authorization` means the token was accepted but the role
/// was not; only the server can make that call, the client just surfaces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("You are not signed in")]
    Authentication,
    #[error("Your account does not have permission for this action")]
    Authorization,
    #[error("Unexpected server response ({0})")]
    Status(u16),
    #[error("Malformed server response: {0}")]
    Decode(String),
}

#[cfg(not(feature = "mock"))]
fn status_error(status: u16) -> ApiError {
    match status {
        401 => ApiError::Authentication,
        403 => ApiError::Authorization,
        other => ApiError::Status(other),
    }
}

/// Session grant handed out by the identity provider after sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    pub refresh_token: String,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    refresh_token: &'a str,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    id_token: String,
}

/// Acknowledgement body for the carrier setup upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarrierSetupResponse {
    pub message: String,
}

/// Exchange credentials for a session grant with the identity provider.
pub async fn sign_in(email: &str, password: &str) -> Result<SessionGrant, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = (email, password);
        return Ok(SessionGrant {
            refresh_token: "mock-refresh-token".to_string(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/auth/sign-in", API_BASE);
        let response = Request::post(&url)
            .json(&SignInRequest {
                email,
                password,
            })
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))
    }
}

/// Exchange the session grant for a fresh short-lived bearer token.
///
/// Tokens are requested immediately before each authenticated call and are
/// never cached across calls; the provider owns their lifetime.
pub async fn fetch_id_token(refresh_token: &str) -> Result<String, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = refresh_token;
        return Ok("mock-id-token".to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/auth/token", API_BASE);
        let response = Request::post(&url)
            .json(&TokenRequest {
                refresh_token,
            })
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
        Ok(token.id_token)
    }
}

/// Fetch the signed-in user's profile and role claims.
pub async fn fetch_user_info(token: &str) -> Result<UserInfo, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = token;
        return Ok(models::mock_user_info());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/auth/user-info?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))
    }
}

/// Fetch the full user collection for the admin dashboard.
pub async fn fetch_admin_users(token: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = token;
        return Ok(models::mock_users());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/users?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))
    }
}

/// Fetch the full carrier collection for the admin dashboard.
pub async fn fetch_admin_carriers(token: &str) -> Result<Vec<Carrier>, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = token;
        return Ok(models::mock_carriers());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/carriers?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))
    }
}

/// Approve a pending user account.
pub async fn approve_user(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = (token, id);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/users/{}/approve", API_BASE, id);
        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}

/// Persist a partial user update (display name, role set).
pub async fn update_user(token: &str, id: i64, patch: &UserPatch) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = (token, id, patch);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/users/{}", API_BASE, id);
        let response = Request::put(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(patch)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}

/// Submit a quote request from the home-page modal.
pub async fn submit_quote_request(quote: &QuoteRequest) -> Result<(), ApiError> {
    submit_lead("quote-request", quote).await
}

/// Submit a driver application.
pub async fn submit_driver_application(application: &DriverApplication) -> Result<(), ApiError> {
    submit_lead("driver-setup", application).await
}

/// Submit a contact form message.
pub async fn submit_contact_message(message: &ContactMessage) -> Result<(), ApiError> {
    submit_lead("contact", message).await
}

/// Subscribe to the newsletter from the footer form.
pub async fn subscribe_newsletter(signup: &NewsletterSignup) -> Result<(), ApiError> {
    submit_lead("newsletter/subscribe", signup).await
}

async fn submit_lead<T: Serialize>(lead_type: &str, body: &T) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = (lead_type, body);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/{}", API_BASE, lead_type);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        // Lead endpoints answer 200 or 201 depending on the collection.
        if !response.ok() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}

/// Submit the carrier setup form, documents included, as one multipart
/// request.
pub async fn submit_carrier_setup(
    form: web_sys::FormData,
) -> Result<CarrierSetupResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = form;
        return Ok(CarrierSetupResponse {
            message: "Carrier setup received. Our team will reach out shortly.".to_string(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/carrier-setup", API_BASE);
        // The browser sets the multipart boundary; no explicit content type.
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(status_error(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))
    }
}
