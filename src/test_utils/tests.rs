//! Tests for test utilities
//! These tests verify that the mock interpreters behave as scripted

use crate::interpreter::{CommandInterpreter, MacroRequest};
use crate::key::Key;
use crate::test_utils::{LineInterpreter, MockInterpreter};

#[test]
fn test_mock_records_dispatches() {
    let mut interp = MockInterpreter::new();
    assert!(interp.dispatch(Key::Char('x')).succeeded);
    assert!(interp.dispatch(Key::Escape).succeeded);

    assert_eq!(interp.dispatched, vec![Key::Char('x'), Key::Escape]);
    assert_eq!(interp.dispatched_chars(), "x");
}

#[test]
fn test_mock_fail_from() {
    let mut interp = MockInterpreter::new().fail_from(1);
    assert!(interp.dispatch(Key::Char('a')).succeeded);
    assert!(!interp.dispatch(Key::Char('b')).succeeded);
    assert!(!interp.dispatch(Key::Char('c')).succeeded);
}

#[test]
fn test_mock_fail_on_key() {
    let mut interp = MockInterpreter::new().fail_on(Key::Char('n'));
    assert!(interp.dispatch(Key::Char('x')).succeeded);
    assert!(!interp.dispatch(Key::Char('n')).succeeded);
    assert!(interp.dispatch(Key::Char('x')).succeeded);
}

#[test]
fn test_mock_parses_invocation_pairs() {
    let mut interp = MockInterpreter::new().parse_invocations();

    assert!(interp.dispatch(Key::Char('@')).macro_request.is_none());
    let outcome = interp.dispatch(Key::Char('b'));
    assert_eq!(outcome.macro_request, Some(MacroRequest::new('b', 1)));

    // a plain key afterwards carries no request
    assert!(interp.dispatch(Key::Char('b')).macro_request.is_none());
}

#[test]
fn test_line_interpreter_motions_fail_at_edges() {
    let mut interp = LineInterpreter::new(&["one", "two"]);

    assert!(!interp.dispatch(Key::Char('k')).succeeded);
    assert!(interp.dispatch(Key::Char('j')).succeeded);
    assert!(!interp.dispatch(Key::Char('j')).succeeded);
    assert_eq!(interp.cursor, 1);
}

#[test]
fn test_line_interpreter_edits() {
    let mut interp = LineInterpreter::new(&["abc"]);

    assert!(interp.dispatch(Key::Char('x')).succeeded);
    assert_eq!(interp.lines, vec!["bc"]);

    assert!(interp.dispatch(Key::Char('~')).succeeded);
    assert_eq!(interp.lines, vec!["Bc"]);
}

#[test]
fn test_line_interpreter_x_fails_on_empty_line() {
    let mut interp = LineInterpreter::new(&[""]);
    assert!(!interp.dispatch(Key::Char('x')).succeeded);
}
