//! Macro player
//! Replays stored event sequences through the command interpreter

/// ## player/ Invariants
///
/// - Events replay strictly in recorded order; repetition k+1 never
///   starts before repetition k's outcome is known.
/// - The failure signal is consulted only at repetition boundaries; a
///   failure mid-repetition lets that repetition finish but no further
///   repetition starts, in any frame.
/// - Completed repetitions are never rolled back.
/// - Nested invocation pushes a frame instead of re-entering `play`, so
///   an inner repeat count cannot corrupt an outer counter.
/// - Source resolution has zero side effects when it fails.
use crate::constants::{errors, limits};
use crate::error::{EncoreError, ErrorType, Result};
use crate::interpreter::CommandInterpreter;
use crate::key::Key;
use crate::register::Source;
use crate::session::Session;
use tracing::{debug, trace, warn};

/// Playback configuration
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    /// Frame stack depth at which playback gives up. A backstop for
    /// hosts whose interpreter has no recursion guard of its own.
    pub max_nesting: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            max_nesting: limits::DEFAULT_MAX_NESTING,
        }
    }
}

/// Outcome of a playback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayResult {
    /// Fully executed repetitions of the requested sequence
    pub completed_repeats: usize,
    /// True when playback stopped before the requested count was reached
    pub aborted: bool,
}

/// One entry of the playback stack
#[derive(Debug)]
struct Frame {
    /// Resolved source char, for diagnostics
    marker: char,
    events: Vec<Key>,
    /// Index of the next event to feed within the current repetition
    pos: usize,
    remaining: usize,
    completed: usize,
}

impl Frame {
    fn new(marker: char, events: Vec<Key>, count: usize) -> Self {
        Self {
            marker,
            events,
            pos: 0,
            remaining: count.max(1),
            completed: 0,
        }
    }
}

/// What to do next with the top frame
enum Advance {
    /// Feed one event to the interpreter
    Dispatch(Key),
    /// Pop the frame; it finished or aborted
    Finished {
        marker: char,
        completed: usize,
        aborted: bool,
    },
}

/// Replays event sequences, tracking repetition and nesting state
#[derive(Debug, Default)]
pub struct Player {
    settings: PlayerSettings,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: PlayerSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(settings: PlayerSettings) -> Self {
        Self { settings }
    }

    /// Replay the sequence behind `register`, `count` times.
    ///
    /// Returns an error only when the initial resolution fails; once
    /// replay has started, dispatch failures truncate the remaining
    /// repetitions and are reported through [`PlayResult::aborted`].
    pub fn play<I: CommandInterpreter>(
        &self,
        session: &mut Session,
        interpreter: &mut I,
        register: char,
        count: usize,
    ) -> Result<PlayResult> {
        let (marker, events) = resolve_source(session, interpreter, register)?;
        session.set_last_invoked(marker);
        debug!(register = %marker, count, events = events.len(), "playback started");

        let mut stack = vec![Frame::new(marker, events, count)];
        let mut failed = false;
        let mut limit_reported = false;
        let mut result = PlayResult::default();

        while let Some(top) = stack.last_mut() {
            match Self::advance(top, failed) {
                Advance::Finished {
                    marker,
                    completed,
                    aborted,
                } => {
                    let _ = stack.pop();
                    if aborted {
                        debug!(register = %marker, completed, "playback aborted");
                    }
                    if stack.is_empty() {
                        result.completed_repeats = completed;
                        result.aborted = aborted;
                    }
                }
                Advance::Dispatch(key) => {
                    trace!(?key, depth = stack.len(), "replaying event");
                    let outcome = interpreter.dispatch(key);
                    if !outcome.succeeded {
                        failed = true;
                    }
                    if let Some(req) = outcome.macro_request {
                        match resolve_source(session, interpreter, req.register) {
                            Ok((marker, events)) => {
                                session.set_last_invoked(marker);
                                if stack.len() >= self.settings.max_nesting {
                                    failed = true;
                                    if !limit_reported {
                                        limit_reported = true;
                                        session.handle_error(EncoreError::warning(
                                            ErrorType::Playback,
                                            errors::NESTING_LIMIT,
                                            errors::MSG_NESTING_LIMIT,
                                        ));
                                        warn!(depth = stack.len(), "macro nesting limit reached");
                                    }
                                } else {
                                    stack.push(Frame::new(marker, events, req.count));
                                }
                            }
                            // A bad register inside a replayed sequence is a
                            // replay failure, not a resolution error of this
                            // play call.
                            Err(err) => {
                                failed = true;
                                session.handle_error(err);
                            }
                        }
                    }
                }
            }
        }
        Ok(result)
    }

    /// Step the frame's repetition bookkeeping and pick the next action.
    /// `failed` is only honored here, at repetition boundaries.
    fn advance(frame: &mut Frame, failed: bool) -> Advance {
        if frame.pos == 0 {
            if frame.remaining == 0 {
                return Advance::Finished {
                    marker: frame.marker,
                    completed: frame.completed,
                    aborted: false,
                };
            }
            if failed {
                return Advance::Finished {
                    marker: frame.marker,
                    completed: frame.completed,
                    aborted: true,
                };
            }
            if frame.events.is_empty() {
                // an unset register replays as a silent no-op
                frame.completed += frame.remaining;
                frame.remaining = 0;
                return Advance::Finished {
                    marker: frame.marker,
                    completed: frame.completed,
                    aborted: false,
                };
            }
        }
        let key = frame.events[frame.pos];
        frame.pos += 1;
        if frame.pos >= frame.events.len() {
            frame.pos = 0;
            frame.remaining -= 1;
            frame.completed += 1;
        }
        Advance::Dispatch(key)
    }
}

/// Resolve a register character to the marker recorded as last-invoked
/// and the event sequence to replay. Has no side effects on failure.
pub fn resolve_source<I: CommandInterpreter>(
    session: &Session,
    interpreter: &I,
    register: char,
) -> Result<(char, Vec<Key>)> {
    match Source::classify(register)? {
        Source::Slot(slot) => {
            let events = session
                .registers
                .get(slot)
                .map(<[Key]>::to_vec)
                .unwrap_or_default();
            Ok((slot, events))
        }
        Source::CommandLine => {
            let events = interpreter.last_command_line().unwrap_or_default();
            Ok((':', events))
        }
        Source::LastChange => {
            let events = session.last_change().map(<[Key]>::to_vec).unwrap_or_default();
            Ok(('.', events))
        }
        Source::LastInvoked => {
            let previous = session
                .last_invoked()
                .ok_or_else(EncoreError::no_previous_macro)?;
            // the marker never holds `@`, so this recurses at most once
            resolve_source(session, interpreter, previous)
        }
    }
}
