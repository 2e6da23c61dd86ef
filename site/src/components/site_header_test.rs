use super::*;
use crate::net::identity::Identity;

fn signed_in() -> Session {
    Session::authenticated(Identity {
        uid: "1".to_owned(),
        email: None,
        display_name: None,
        provider: "password".to_owned(),
    })
}

#[test]
fn unauthenticated_sessions_show_access() {
    for session in [Session::default(), Session::signed_out(), Session::authenticating(), Session::failed("x")] {
        assert_eq!(AccessControl::for_session(&session, false), AccessControl::Access);
        assert_eq!(AccessControl::for_session(&session, false).label(), "ACCESS");
    }
}

#[test]
fn authenticated_session_shows_sign_out_only() {
    let control = AccessControl::for_session(&signed_in(), false);
    assert_eq!(control, AccessControl::SignOut { pending: false });
    assert_eq!(control.label(), "SIGN OUT");
}

#[test]
fn pending_sign_out_changes_label() {
    let control = AccessControl::for_session(&signed_in(), true);
    assert_eq!(control.label(), "SIGNING OUT...");
}
