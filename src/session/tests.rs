use super::*;

#[test]
fn test_new_session_has_no_history() {
    let session = Session::new();
    assert!(session.last_invoked().is_none());
    assert!(session.last_change().is_none());
    assert!(!session.registers.exists('a'));
}

#[test]
fn test_last_invoked_marker() {
    let mut session = Session::new();
    session.set_last_invoked('a');
    assert_eq!(session.last_invoked(), Some('a'));

    session.set_last_invoked(':');
    assert_eq!(session.last_invoked(), Some(':'));
}

#[test]
fn test_record_change() {
    let mut session = Session::new();
    session.record_change(vec![Key::Char('i'), Key::Char('h'), Key::Escape]);
    assert_eq!(
        session.last_change().unwrap(),
        &[Key::Char('i'), Key::Char('h'), Key::Escape]
    );

    // a later change replaces the previous one
    session.record_change(vec![Key::Char('x')]);
    assert_eq!(session.last_change().unwrap(), &[Key::Char('x')]);
}

#[test]
fn test_handle_error_surfaces_status_text() {
    let mut session = Session::new();
    session.handle_error(EncoreError::invalid_register('%'));

    let latest = session.error_manager.notifications().latest().unwrap();
    assert_eq!(latest.message, "E354: Invalid register name: '%'");
    assert_eq!(latest.kind, NotificationType::Error);
}

#[test]
fn test_notify_kinds() {
    let mut session = Session::new();
    session.notify(NotificationType::Info, "recording @a");

    let latest = session.error_manager.notifications().latest().unwrap();
    assert_eq!(latest.message, "recording @a");
    assert_eq!(latest.kind, NotificationType::Info);
    assert!(latest.ttl.is_some());

    session.notify(NotificationType::Error, "broken");
    let latest = session.error_manager.notifications().latest().unwrap();
    assert!(latest.ttl.is_none());
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = Session::new();
    let second = Session::new();

    first.registers.set('a', vec![Key::Char('x')]);
    first.set_last_invoked('a');

    assert!(!second.registers.exists('a'));
    assert!(second.last_invoked().is_none());
}
