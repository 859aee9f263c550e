//! Client for the authentication API.
//!
//! Each call resolves with a [`SubmissionOutcome`], never a failed future:
//! transport and decode failures are folded into the error variant, so the
//! forms deal with exactly one result shape. Business-level rejections arrive
//! in the reply body's `error` slot regardless of HTTP status.

use crate::core::submit::SubmissionOutcome;
use crate::core::validation::{LoginCredentials, Registration};

#[cfg(not(feature = "ssr"))]
use crate::core::submit::ActionResponse;

/// Failure modes of an action call, before they become an outcome message.
/// The `Display` strings are what the user sees in the banner.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, thiserror::Error)]
enum ClientError {
    #[error("Network error. Please try again.")]
    Transport(#[source] gloo_net::Error),
    #[error("The server returned an unexpected response.")]
    Payload(#[source] gloo_net::Error),
}

/// Submit login credentials.
#[cfg(not(feature = "ssr"))]
pub async fn login(credentials: &LoginCredentials) -> SubmissionOutcome {
    resolve(post_action("/api/auth/login", credentials).await)
}

#[cfg(feature = "ssr")]
pub async fn login(_credentials: &LoginCredentials) -> SubmissionOutcome {
    SubmissionOutcome::Error("Login not available on server".to_string())
}

/// Submit a registration request.
#[cfg(not(feature = "ssr"))]
pub async fn register(registration: &Registration) -> SubmissionOutcome {
    resolve(post_action("/api/auth/register", registration).await)
}

#[cfg(feature = "ssr")]
pub async fn register(_registration: &Registration) -> SubmissionOutcome {
    SubmissionOutcome::Error("Register not available on server".to_string())
}

#[cfg(not(feature = "ssr"))]
async fn post_action<T: serde::Serialize>(
    url: &str,
    body: &T,
) -> Result<ActionResponse, ClientError> {
    use gloo_net::http::Request;

    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(ClientError::Transport)?;

    let response = request.send().await.map_err(ClientError::Transport)?;

    // The reply body carries the result shape even for rejections, so the
    // status code is not consulted here.
    response
        .json::<ActionResponse>()
        .await
        .map_err(ClientError::Payload)
}

#[cfg(not(feature = "ssr"))]
fn resolve(result: Result<ActionResponse, ClientError>) -> SubmissionOutcome {
    match result {
        Ok(response) => response.into(),
        Err(error) => SubmissionOutcome::Error(error.to_string()),
    }
}
