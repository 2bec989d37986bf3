//! Access decisions for guarded routes.
//!
//! Pure functions of the current [`Session`]; the guard components only turn
//! the resulting state into a render or a redirect.

use crate::backend::session::{Role, Session, SessionError, User};
use crate::frontend::app::route::Route;
use thiserror::Error;

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

/// Where unauthenticated visitors are sent.
pub const SIGN_IN_ROUTE: Route = Route::Auth {};

/// Landing route for roles missing from [`LANDING_ROUTES`].
pub const DEFAULT_LANDING: Route = Route::Dashboard {};

/// Role-specific landing routes for signed-in users.
pub const LANDING_ROUTES: &[(Role, Route)] = &[(Role::Admin, Route::Admin {})];

/// Which guard a route is rendered behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Rendered for everyone.
    PublicAlways,
    /// Rendered for anonymous visitors; signed-in users are sent to their
    /// landing route.
    PublicRedirectIfAuthenticated,
    /// Requires a session, and the given role when there is one.
    Protected(Option<Role>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("no active session")]
    Unauthenticated,
    #[error("the {required} role is required")]
    Forbidden { required: Role },
    #[error(transparent)]
    Transport(#[from] SessionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedState {
    Loading,
    Unauthenticated,
    Forbidden,
    Authorized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicState {
    Loading,
    Anonymous,
    /// Signed in; carries the landing route to redirect to.
    Authenticated(Route),
}

/// Checks a resolved session against an optional role requirement.
pub fn authorize(session: &Session, required: Option<Role>) -> Result<&User, AccessError> {
    if let Some(err) = &session.error {
        return Err(AccessError::Transport(err.clone()));
    }
    let user = session.user.as_ref().ok_or(AccessError::Unauthenticated)?;
    match required {
        Some(required) if user.role != Some(required) => Err(AccessError::Forbidden { required }),
        _ => Ok(user),
    }
}

pub fn evaluate_protected(session: &Session, required: Option<Role>) -> ProtectedState {
    if session.is_loading {
        return ProtectedState::Loading;
    }
    match authorize(session, required) {
        Ok(_) => ProtectedState::Authorized,
        Err(e @ AccessError::Forbidden { .. }) => {
            tracing::debug!("Access denied: {e}");
            ProtectedState::Forbidden
        }
        Err(e) => {
            tracing::debug!("Sending visitor to sign-in: {e}");
            ProtectedState::Unauthenticated
        }
    }
}

pub fn evaluate_public(session: &Session) -> PublicState {
    if session.is_loading {
        PublicState::Loading
    } else if session.is_authenticated() {
        PublicState::Authenticated(landing_for(session.role()))
    } else {
        PublicState::Anonymous
    }
}

/// Landing route for a signed-in user's role.
pub fn landing_for(role: Option<Role>) -> Route {
    role.and_then(|role| LANDING_ROUTES.iter().find(|(r, _)| *r == role))
        .map_or(DEFAULT_LANDING, |(_, route)| route.clone())
}
