//! Command interpreter boundary
//! The seam between the macro engine and the editor's command machinery

/// ## interpreter/ Invariants
///
/// - `dispatch` is synchronous; the outcome is known before it returns.
/// - Repeated identical dispatch calls are legal and independent.
/// - The interpreter never calls back into the macro engine; a nested
///   invocation parsed during replay is returned as a `MacroRequest`.
use crate::key::Key;

/// A nested macro invocation parsed by the interpreter during replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroRequest {
    /// The register character following `@`
    pub register: char,
    /// Requested repeat count (a bare invocation is 1)
    pub count: usize,
}

impl MacroRequest {
    #[must_use]
    pub fn new(register: char, count: usize) -> Self {
        Self { register, count }
    }
}

/// Result of dispatching a single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Whether the operation the event completed succeeded.
    /// A failed motion or text-object match reports false here.
    pub succeeded: bool,
    /// Set when the event completed a macro invocation token (`@x`)
    pub macro_request: Option<MacroRequest>,
}

impl DispatchOutcome {
    /// Successful dispatch with no pending invocation
    #[must_use]
    pub fn ok() -> Self {
        Self {
            succeeded: true,
            macro_request: None,
        }
    }

    /// Failed dispatch
    #[must_use]
    pub fn failed() -> Self {
        Self {
            succeeded: false,
            macro_request: None,
        }
    }

    /// Successful dispatch that completed a macro invocation token
    #[must_use]
    pub fn request(register: char, count: usize) -> Self {
        Self {
            succeeded: true,
            macro_request: Some(MacroRequest::new(register, count)),
        }
    }
}

/// The editor-side command machinery the macro engine replays through
pub trait CommandInterpreter {
    /// Execute a single input event as if freshly typed
    fn dispatch(&mut self, key: Key) -> DispatchOutcome;

    /// The keystroke rendering of the last command-line (`:`) command,
    /// used as the source when the `:` register is played
    fn last_command_line(&self) -> Option<Vec<Key>>;
}
