//! Sign-in and sign-out requests.

use crate::backend::api::ApiClient;
use crate::backend::session::error::SessionError;
use serde::Serialize;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trims the email and checks both fields before anything is sent.
    pub fn parse(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Enter the email address you registered with.");
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters long.");
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Posts credentials to the login and logout endpoints.
#[derive(Clone, Debug)]
pub struct AuthClient {
    api: ApiClient,
    login_path: String,
    logout_path: String,
}

impl AuthClient {
    pub fn new(
        api: ApiClient,
        login_path: impl Into<String>,
        logout_path: impl Into<String>,
    ) -> Self {
        Self {
            api,
            login_path: login_path.into(),
            logout_path: logout_path.into(),
        }
    }

    /// Signs in. The server answers with a session cookie on success.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SessionError> {
        let response = self.api.post(&self.login_path).json(credentials).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Sign-in rejected with status {status}");
            return Err(SessionError::Status(status.as_u16()));
        }
        tracing::info!("Signed in as {}", credentials.email);
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        let response = self.api.post(&self.logout_path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Status(status.as_u16()));
        }
        tracing::info!("Signed out");
        Ok(())
    }
}

/// User-facing message for a failed sign-in.
pub fn login_failure_message(err: &SessionError) -> &'static str {
    match err {
        SessionError::Status(401 | 403) => "Email or password is incorrect.",
        SessionError::Status(429) => "Too many attempts. Try again in a few minutes.",
        SessionError::Status(_) | SessionError::Decode(_) => {
            "Sign-in is unavailable right now. Please try again later."
        }
        SessionError::Transport(_) => "Could not reach GoldVault. Check your connection.",
    }
}
