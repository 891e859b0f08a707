//! Tests for Encore error handling

use super::*;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Info), "INFO");
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    assert!(ErrorSeverity::Critical > ErrorSeverity::Info);
}

#[test]
fn test_error_type_display() {
    assert_eq!(format!("{}", ErrorType::Resolution), "Resolution");
    assert_eq!(format!("{}", ErrorType::Recording), "Recording");
    assert_eq!(format!("{}", ErrorType::Playback), "Playback");
    assert_eq!(format!("{}", ErrorType::Internal), "Internal");
    assert_eq!(format!("{}", ErrorType::Other), "Other");
}

#[test]
fn test_error_new() {
    let err = EncoreError::new(ErrorType::Playback, "E001", "test msg");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorType::Playback);
    assert_eq!(err.code, "E001");
    assert_eq!(err.message, "test msg");
}

#[test]
fn test_error_warning() {
    let err = EncoreError::warning(ErrorType::Recording, "W001", "still recording");
    assert_eq!(err.severity, ErrorSeverity::Warning);
    assert_eq!(err.kind, ErrorType::Recording);
    assert_eq!(err.code, "W001");
    assert_eq!(err.message, "still recording");
}

#[test]
fn test_invalid_register_error() {
    let err = EncoreError::invalid_register('~');
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorType::Resolution);
    assert!(err.is_code(errors::INVALID_REGISTER));
    assert_eq!(err.message, "E354: Invalid register name: '~'");
}

#[test]
fn test_no_previous_macro_error() {
    let err = EncoreError::no_previous_macro();
    assert!(err.is_code(errors::NO_PREVIOUS_MACRO));
    assert_eq!(err.message, "E748: No previously used register");
}

#[test]
fn test_recording_errors_are_warnings() {
    assert_eq!(
        EncoreError::already_recording().severity,
        ErrorSeverity::Warning
    );
    assert_eq!(
        EncoreError::not_recording().severity,
        ErrorSeverity::Warning
    );
    assert!(EncoreError::already_recording().is_code(errors::ALREADY_RECORDING));
    assert!(EncoreError::not_recording().is_code(errors::NOT_RECORDING));
}

#[test]
fn test_error_display() {
    let err = EncoreError::new(ErrorType::Playback, "E001", "test msg");
    assert_eq!(format!("{}", err), "[ERROR] Playback(E001): test msg");
}

#[test]
fn test_error_contains_msg() {
    let err = EncoreError::new(ErrorType::Other, "E", "the quick brown fox");
    assert!(err.contains_msg("quick"));
    assert!(err.contains_msg("brown"));
    assert!(!err.contains_msg("lazy"));
}
