//! Macro session state
//! Session-wide mutable state shared by the recorder, player, and controller

/// ## session/ Invariants
///
/// - All shared state is reached through an explicitly passed `Session`;
///   there are no ambient globals, so isolated sessions can run in
///   parallel under test.
/// - The last-invoked marker holds the resolved source of the most
///   recent playback dispatch and is unset until the first playback.
use crate::error::manager::ErrorManager;
use crate::error::EncoreError;
use crate::key::Key;
use crate::notification::NotificationType;
use crate::register::RegisterStore;

/// One editing session's macro state
pub struct Session {
    /// Named register slots
    pub registers: RegisterStore,
    /// Resolved source of the most recent playback, consumed by `@@`
    last_invoked: Option<char>,
    /// Event rendering of the last change, the source behind `.`
    last_change: Option<Vec<Key>>,
    /// Error and notification manager
    pub error_manager: ErrorManager,
}

impl Session {
    /// Create a new isolated session
    #[must_use]
    pub fn new() -> Self {
        Self {
            registers: RegisterStore::new(),
            last_invoked: None,
            last_change: None,
            error_manager: ErrorManager::new(),
        }
    }

    /// The register the most recent playback resolved to
    #[must_use]
    pub fn last_invoked(&self) -> Option<char> {
        self.last_invoked
    }

    /// Record the resolved source of a playback dispatch
    pub fn set_last_invoked(&mut self, register: char) {
        self.last_invoked = Some(register);
    }

    /// The event sequence behind the `.` register, if any
    #[must_use]
    pub fn last_change(&self) -> Option<&[Key]> {
        self.last_change.as_deref()
    }

    /// Called by the editor after each buffer change so `.` stays current
    pub fn record_change(&mut self, sequence: Vec<Key>) {
        self.last_change = Some(sequence);
    }

    /// Handle an error by delegating to the ErrorManager
    pub fn handle_error(&mut self, err: EncoreError) {
        self.error_manager.handle(err);
    }

    /// Add a notification
    pub fn notify(&mut self, kind: NotificationType, message: impl Into<String>) {
        let ttl = match kind {
            NotificationType::Error => None,
            NotificationType::Warning => Some(std::time::Duration::from_secs(8)),
            NotificationType::Info => Some(std::time::Duration::from_secs(5)),
        };
        self.error_manager
            .notifications_mut()
            .add(kind, message, ttl);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
