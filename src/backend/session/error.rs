//! Session request errors.

use thiserror::Error;

/// Why a session request produced no usable answer.
///
/// `401 Unauthorized` is not an error: it resolves to "no session".
/// Every variant carries owned data so a single in-flight result can be
/// cloned out to each waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session request failed: {0}")]
    Transport(String),
    #[error("session endpoint returned status {0}")]
    Status(u16),
    #[error("invalid session payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
