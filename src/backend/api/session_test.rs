use super::*;
use crate::backend::session::models::{Role, Session};

#[test]
fn unauthorized_is_no_session_not_an_error() {
    let result = interpret(StatusCode::UNAUTHORIZED, r#"{"message":"login required"}"#);
    assert_eq!(result, Ok(None));

    let session = Session::resolved(result);
    assert!(!session.is_authenticated());
    assert!(session.error.is_none());
}

#[test]
fn success_with_user_record() {
    let result = interpret(StatusCode::OK, r#"{"id":"u7","role":"member"}"#);
    let user = result.expect("ok").expect("user");
    assert_eq!(user.id.as_deref(), Some("u7"));
    assert_eq!(user.role, Some(Role::Member));
}

#[test]
fn success_with_null_or_empty_body_is_no_session() {
    assert_eq!(interpret(StatusCode::OK, "null"), Ok(None));
    assert_eq!(interpret(StatusCode::NO_CONTENT, ""), Ok(None));
}

#[test]
fn other_failures_are_errors() {
    assert_eq!(
        interpret(StatusCode::INTERNAL_SERVER_ERROR, ""),
        Err(SessionError::Status(500))
    );
    assert_eq!(
        interpret(StatusCode::FORBIDDEN, ""),
        Err(SessionError::Status(403))
    );
}

#[test]
fn undecodable_body_is_a_decode_error() {
    let result = interpret(StatusCode::OK, "<html>maintenance</html>");
    assert!(matches!(result, Err(SessionError::Decode(_))));
}
