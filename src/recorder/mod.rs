//! Macro recorder
//! State machine that accumulates input events into a pending buffer

/// ## recorder/ Invariants
///
/// - At most one recording session is open at a time.
/// - Append mode seeds the buffer from the stored sequence and never
///   truncates prior content.
/// - A committed sequence is immutable until the next recording
///   targeting the same slot commits.
/// - The terminating keystroke is not part of the committed sequence.
use crate::error::{EncoreError, Result};
use crate::key::Key;
use crate::register::RegisterStore;
use tracing::debug;

/// An open recording session
#[derive(Debug)]
struct Recording {
    /// Target slot, always lowercase
    slot: char,
    /// Pending event sequence; seeded from the store in append mode
    buffer: Vec<Key>,
    /// Events fed since the session opened
    fed: usize,
}

/// Records input events into a register slot.
/// Two states: Idle, or one open `Recording`.
#[derive(Debug, Default)]
pub struct Recorder {
    active: Option<Recording>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Whether a recording session is open
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// The slot currently being recorded to (for status display)
    #[must_use]
    pub fn register(&self) -> Option<char> {
        self.active.as_ref().map(|rec| rec.slot)
    }

    /// Open a recording session targeting `register`.
    ///
    /// An uppercase letter selects append mode: the buffer is seeded with
    /// the slot's current content (empty if the slot has never been used),
    /// so a session that records nothing recommits the seed unchanged.
    /// Fails without changing state if `register` is not a letter or a
    /// session is already open.
    pub fn start(&mut self, register: char, store: &RegisterStore) -> Result<()> {
        if self.active.is_some() {
            return Err(EncoreError::already_recording());
        }
        if !register.is_ascii_alphabetic() {
            return Err(EncoreError::invalid_register(register));
        }
        let append = register.is_ascii_uppercase();
        let slot = register.to_ascii_lowercase();
        let buffer = if append {
            store.get(slot).map(<[Key]>::to_vec).unwrap_or_default()
        } else {
            Vec::new()
        };
        debug!(slot = %slot, append, seeded = buffer.len(), "recording started");
        self.active = Some(Recording {
            slot,
            buffer,
            fed: 0,
        });
        Ok(())
    }

    /// Append an observed event to the pending buffer
    pub fn feed(&mut self, key: Key) -> Result<()> {
        let rec = self.active.as_mut().ok_or_else(EncoreError::not_recording)?;
        rec.buffer.push(key);
        rec.fed += 1;
        Ok(())
    }

    /// Close the session and commit the buffer to the target slot.
    ///
    /// The input pump mirrors every event before the interpreter sees it,
    /// so the keystroke that requested the stop is always the last fed
    /// event; it is dropped before the commit. Returns the committed
    /// sequence length.
    pub fn stop(&mut self, store: &mut RegisterStore) -> Result<usize> {
        let rec = self.active.take().ok_or_else(EncoreError::not_recording)?;
        let mut buffer = rec.buffer;
        if rec.fed > 0 {
            buffer.pop();
        }
        let committed = buffer.len();
        debug!(slot = %rec.slot, committed, "recording stopped");
        store.set(rec.slot, buffer);
        Ok(committed)
    }
}
