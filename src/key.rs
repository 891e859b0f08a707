//! Key representation for recorded and replayed input

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+A)
    Ctrl(u8),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    PageUp,
    PageDown,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    /// System events
    Resize(u16, u16),
}

impl Key {
    /// Whether this event is user input rather than a system event.
    /// System events never belong in a recorded sequence.
    #[must_use]
    pub fn is_input(&self) -> bool {
        !matches!(self, Key::Resize(_, _))
    }
}
