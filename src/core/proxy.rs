//! Pass-through for the authentication API
//!
//! The client submits credentials to same-origin `/api/auth/{action}`
//! endpoints; this router forwards those calls to the upstream auth service
//! named by `AUTH_API_URL` and hands the reply back untouched. No credential
//! checking or session handling happens here.
//!
//! Without a configured upstream the handler still answers with the
//! `{error}`/`{success}` result shape, so the client flow always terminates
//! with a banner instead of a dangling request.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;

use super::config::Config;

/// Actions the upstream service exposes. Anything else is a 404, not a
/// forward, so the proxy cannot be used to reach arbitrary upstream paths.
const SUPPORTED_ACTIONS: [&str; 2] = ["login", "register"];

/// Shared state for the auth pass-through
#[derive(Clone)]
pub struct ProxyState {
    upstream: Option<String>,
    client: reqwest::Client,
}

impl ProxyState {
    pub fn new(config: &Config) -> Self {
        Self {
            upstream: config.auth_api_url.clone(),
            client: reqwest::Client::new(),
        }
    }
}

/// Create the auth pass-through router
///
/// Routes:
/// - `POST /api/auth/{action}` - forward to `{AUTH_API_URL}/{action}`
pub fn auth_proxy_router(config: &Config) -> Router {
    Router::new()
        .route("/api/auth/{action}", post(forward_action))
        .with_state(ProxyState::new(config))
}

pub(crate) fn is_supported_action(action: &str) -> bool {
    SUPPORTED_ACTIONS.contains(&action)
}

/// Join the upstream base URL and an action path segment.
pub(crate) fn upstream_url(base: &str, action: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), action)
}

async fn forward_action(
    State(state): State<ProxyState>,
    Path(action): Path<String>,
    body: Bytes,
) -> Response {
    if !is_supported_action(&action) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(base) = state.upstream.as_deref() else {
        tracing::warn!(%action, "auth call received but AUTH_API_URL is not set");
        return result_body(json!({
            "error": "Authentication is not available right now. Please try again later."
        }));
    };

    let url = upstream_url(base, &action);
    match state
        .client
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(reply) => {
            let status = reply.status();
            let payload = reply.bytes().await.unwrap_or_default();
            tracing::debug!(%action, status = %status, "forwarded auth call");
            (
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
                [(header::CONTENT_TYPE, "application/json")],
                payload,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(%action, %error, "upstream auth service unreachable");
            result_body(json!({
                "error": "Authentication is not available right now. Please try again later."
            }))
        }
    }
}

/// A 200 reply in the action result shape; the client renders it as a banner.
fn result_body(value: serde_json::Value) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        value.to_string(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_actions_are_forwarded() {
        assert!(is_supported_action("login"));
        assert!(is_supported_action("register"));
        assert!(!is_supported_action("logout"));
        assert!(!is_supported_action("../admin"));
    }

    #[test]
    fn upstream_url_handles_trailing_slash() {
        assert_eq!(
            upstream_url("https://auth.example.com", "login"),
            "https://auth.example.com/login"
        );
        assert_eq!(
            upstream_url("https://auth.example.com/", "register"),
            "https://auth.example.com/register"
        );
    }
}
