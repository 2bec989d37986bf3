use crate::backend::session::{Role, User};
use crate::frontend::services::context::test_helpers::{FixedSource, PendingSource, TestApp};

fn signed_in(role: Role) -> FixedSource {
    FixedSource(Ok(Some(User {
        email: Some("investor@goldvault.test".to_string()),
        role: Some(role),
        ..User::default()
    })))
}

#[test]
fn anonymous_visitor_sees_sign_in() {
    let app = TestApp::mount("/auth", FixedSource(Ok(None)));

    assert_eq!(app.path(), "/auth");
    assert!(app.shows("Auth"));
}

#[test]
fn admin_is_sent_to_admin_area() {
    let app = TestApp::mount("/", signed_in(Role::Admin));

    assert_eq!(app.path(), "/admin");
    assert!(app.shows("Admin"));
    assert!(!app.shows("Landing"));
}

#[test]
fn member_is_sent_to_dashboard() {
    let app = TestApp::mount("/home", signed_in(Role::Member));

    assert_eq!(app.path(), "/dashboard");
    assert!(app.shows("Dashboard"));
    assert!(!app.shows("Home"));
}

#[test]
fn loading_session_does_not_redirect() {
    let app = TestApp::mount("/", PendingSource);

    assert_eq!(app.path(), "/");
    assert!(app.shows("LoadingIndicator"));
    assert!(!app.shows("Landing"));
}
