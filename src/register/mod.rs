//! Register store
//! Named storage slots for committed macro event sequences

use crate::error::{EncoreError, Result};
use crate::key::Key;
use std::collections::HashMap;

/// Resolved meaning of a register character used as a playback source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A named slot `a`-`z`; uppercase input is normalized to lowercase
    Slot(char),
    /// `:` - the last command-line command, queried from the interpreter
    CommandLine,
    /// `.` - the last change, auto-populated by the editor
    LastChange,
    /// `@` - whatever register the previous playback resolved to
    LastInvoked,
}

impl Source {
    /// Classify a register character.
    /// Anything outside `[a-zA-Z:.@]` (including the filename registers
    /// `%` and `#`) is rejected before any replay is attempted.
    pub fn classify(name: char) -> Result<Self> {
        match name {
            'a'..='z' => Ok(Source::Slot(name)),
            'A'..='Z' => Ok(Source::Slot(name.to_ascii_lowercase())),
            ':' => Ok(Source::CommandLine),
            '.' => Ok(Source::LastChange),
            '@' => Ok(Source::LastInvoked),
            _ => Err(EncoreError::invalid_register(name)),
        }
    }
}

/// Maps slot names to committed event sequences.
/// Slots live for the whole session; there is no eviction.
#[derive(Debug, Default)]
pub struct RegisterStore {
    slots: HashMap<char, Vec<Key>>,
}

impl RegisterStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// The committed sequence for a slot, if it has ever been recorded
    #[must_use]
    pub fn get(&self, slot: char) -> Option<&[Key]> {
        debug_assert!(slot.is_ascii_lowercase());
        self.slots.get(&slot).map(Vec::as_slice)
    }

    /// Commit a sequence to a slot, replacing any previous content
    pub fn set(&mut self, slot: char, sequence: Vec<Key>) {
        debug_assert!(slot.is_ascii_lowercase());
        self.slots.insert(slot, sequence);
    }

    /// Whether a slot has ever been committed to
    #[must_use]
    pub fn exists(&self, slot: char) -> bool {
        self.slots.contains_key(&slot)
    }
}
