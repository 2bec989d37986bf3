//! Session endpoint client.

use crate::backend::api::ApiClient;
use crate::backend::session::error::SessionError;
use crate::backend::session::models::User;
use crate::backend::session::query::{SessionResult, SessionSource};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Reads the current session from `GET {session_path}`.
#[derive(Clone, Debug)]
pub struct HttpSessionSource {
    api: ApiClient,
    path: String,
}

impl HttpSessionSource {
    pub fn new(api: ApiClient, path: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into(),
        }
    }
}

impl SessionSource for HttpSessionSource {
    async fn fetch_session(&self) -> SessionResult {
        let response = self
            .api
            .get(&self.path)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        interpret(status, &body)
    }
}

/// Turns a session response into a result.
///
/// `401` means "nobody is signed in" and is not an error. A `2xx` body is
/// either a user record or JSON `null`.
pub fn interpret(status: StatusCode, body: &str) -> SessionResult {
    if status == StatusCode::UNAUTHORIZED {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(SessionError::Status(status.as_u16()));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<User>>(body)?)
}
