use super::*;

fn signed_in(role: Option<Role>) -> Session {
    Session::resolved(Ok(Some(User {
        id: Some("u1".to_owned()),
        role,
        ..User::default()
    })))
}

fn anonymous() -> Session {
    Session::resolved(Ok(None))
}

#[test]
fn anonymous_visitors_are_sent_to_sign_in_from_protected_routes() {
    assert_eq!(
        evaluate_protected(&anonymous(), None),
        ProtectedState::Unauthenticated
    );
    assert_eq!(
        evaluate_protected(&anonymous(), Some(Role::Admin)),
        ProtectedState::Unauthenticated
    );
    assert_eq!(SIGN_IN_ROUTE, Route::Auth {});
}

#[test]
fn anonymous_visitors_see_public_routes() {
    assert_eq!(evaluate_public(&anonymous()), PublicState::Anonymous);
}

#[test]
fn admins_land_on_admin_area() {
    assert_eq!(
        evaluate_public(&signed_in(Some(Role::Admin))),
        PublicState::Authenticated(Route::Admin {})
    );
}

#[test]
fn other_roles_land_on_dashboard() {
    for role in [Some(Role::Member), Some(Role::Unknown), None] {
        assert_eq!(
            evaluate_public(&signed_in(role)),
            PublicState::Authenticated(Route::Dashboard {}),
            "role {role:?}"
        );
    }
}

#[test]
fn wrong_role_is_forbidden_without_redirect() {
    assert_eq!(
        evaluate_protected(&signed_in(Some(Role::Member)), Some(Role::Admin)),
        ProtectedState::Forbidden
    );
}

#[test]
fn matching_role_is_authorized() {
    assert_eq!(
        evaluate_protected(&signed_in(Some(Role::Admin)), Some(Role::Admin)),
        ProtectedState::Authorized
    );
}

#[test]
fn any_session_passes_when_no_role_is_required() {
    for role in [Some(Role::Admin), Some(Role::Member), None] {
        assert_eq!(
            evaluate_protected(&signed_in(role), None),
            ProtectedState::Authorized
        );
    }
}

#[test]
fn missing_role_fails_role_check_without_panicking() {
    assert_eq!(
        evaluate_protected(&signed_in(None), Some(Role::Admin)),
        ProtectedState::Forbidden
    );
    assert_eq!(
        evaluate_protected(&signed_in(Some(Role::Unknown)), Some(Role::Admin)),
        ProtectedState::Forbidden
    );
}

#[test]
fn loading_renders_only_the_indicator() {
    let session = Session::loading();
    assert_eq!(
        evaluate_protected(&session, None),
        ProtectedState::Loading
    );
    assert_eq!(
        evaluate_protected(&session, Some(Role::Admin)),
        ProtectedState::Loading
    );
    assert_eq!(evaluate_public(&session), PublicState::Loading);
}

#[test]
fn transport_errors_degrade_to_unauthenticated() {
    let session = Session::resolved(Err(SessionError::Transport("offline".to_owned())));
    assert_eq!(
        evaluate_protected(&session, None),
        ProtectedState::Unauthenticated
    );
    assert_eq!(evaluate_public(&session), PublicState::Anonymous);
}

#[test]
fn error_wins_over_a_stale_user() {
    let session = Session {
        user: Some(User::default()),
        is_loading: false,
        error: Some(SessionError::Status(502)),
    };
    assert_eq!(
        authorize(&session, None),
        Err(AccessError::Transport(SessionError::Status(502)))
    );
    assert_eq!(evaluate_public(&session), PublicState::Anonymous);
}

#[test]
fn authorize_reports_the_missing_role() {
    let err = authorize(&signed_in(Some(Role::Member)), Some(Role::Admin)).unwrap_err();
    assert_eq!(
        err,
        AccessError::Forbidden {
            required: Role::Admin
        }
    );
    assert_eq!(err.to_string(), "the admin role is required");
}

#[test]
fn landing_table_defaults_to_dashboard() {
    assert_eq!(landing_for(Some(Role::Admin)), Route::Admin {});
    assert_eq!(landing_for(Some(Role::Member)), DEFAULT_LANDING);
    assert_eq!(landing_for(None), DEFAULT_LANDING);
}
