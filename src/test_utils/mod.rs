//! Test utilities
//! Shared testing helpers and mocks

use crate::interpreter::{CommandInterpreter, DispatchOutcome};
use crate::key::Key;

/// Scripted command interpreter for testing.
/// Records every dispatched event and fails on request.
#[derive(Debug)]
pub struct MockInterpreter {
    /// Every event dispatched, in order
    pub dispatched: Vec<Key>,
    /// Dispatches at or after this index report failure
    fail_from: Option<usize>,
    /// Keys that always report failure
    fail_keys: Vec<Key>,
    /// Recognize `@x` pairs and hand back macro requests
    parse_invocations: bool,
    /// Repeat count attached to parsed macro requests
    request_count: usize,
    pending_at: bool,
    command_line: Option<Vec<Key>>,
}

impl MockInterpreter {
    pub fn new() -> Self {
        Self {
            dispatched: Vec::new(),
            fail_from: None,
            fail_keys: Vec::new(),
            parse_invocations: false,
            request_count: 1,
            pending_at: false,
            command_line: None,
        }
    }

    /// Make every dispatch at or after `index` report failure
    pub fn fail_from(mut self, index: usize) -> Self {
        self.fail_from = Some(index);
        self
    }

    /// Make every dispatch of `key` report failure
    pub fn fail_on(mut self, key: Key) -> Self {
        self.fail_keys.push(key);
        self
    }

    /// Recognize `@x` pairs in the dispatched stream as macro requests
    pub fn parse_invocations(mut self) -> Self {
        self.parse_invocations = true;
        self
    }

    /// Attach `count` to every parsed macro request
    pub fn with_request_count(mut self, count: usize) -> Self {
        self.request_count = count;
        self
    }

    /// Script the last command-line command
    pub fn with_command_line(mut self, events: Vec<Key>) -> Self {
        self.command_line = Some(events);
        self
    }

    /// The dispatched events as a readable string, `Char` keys only
    pub fn dispatched_chars(&self) -> String {
        self.dispatched
            .iter()
            .filter_map(|key| match key {
                Key::Char(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInterpreter for MockInterpreter {
    fn dispatch(&mut self, key: Key) -> DispatchOutcome {
        let index = self.dispatched.len();
        self.dispatched.push(key);

        let mut succeeded = true;
        if let Some(from) = self.fail_from {
            if index >= from {
                succeeded = false;
            }
        }
        if self.fail_keys.contains(&key) {
            succeeded = false;
        }

        if self.parse_invocations && succeeded {
            if self.pending_at {
                self.pending_at = false;
                if let Key::Char(register) = key {
                    return DispatchOutcome::request(register, self.request_count);
                }
            } else if key == Key::Char('@') {
                self.pending_at = true;
            }
        }

        if succeeded {
            DispatchOutcome::ok()
        } else {
            DispatchOutcome::failed()
        }
    }

    fn last_command_line(&self) -> Option<Vec<Key>> {
        self.command_line.clone()
    }
}

/// Minimal line-oriented interpreter with observable state.
///
/// Understands just enough keys to exercise playback against a real
/// mutation target: `j`/`k` move between lines and fail at the edges,
/// `x` deletes the first character of the current line, `~` uppercases
/// it, and `@x` pairs become macro requests.
#[derive(Debug)]
pub struct LineInterpreter {
    pub lines: Vec<String>,
    pub cursor: usize,
    pub dispatched: Vec<Key>,
    pending_at: bool,
}

impl LineInterpreter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            cursor: 0,
            dispatched: Vec::new(),
            pending_at: false,
        }
    }

    fn current_line(&mut self) -> &mut String {
        &mut self.lines[self.cursor]
    }
}

impl CommandInterpreter for LineInterpreter {
    fn dispatch(&mut self, key: Key) -> DispatchOutcome {
        self.dispatched.push(key);

        if self.pending_at {
            self.pending_at = false;
            if let Key::Char(register) = key {
                return DispatchOutcome::request(register, 1);
            }
            return DispatchOutcome::failed();
        }

        match key {
            Key::Char('@') => {
                self.pending_at = true;
                DispatchOutcome::ok()
            }
            Key::Char('j') => {
                if self.cursor + 1 < self.lines.len() {
                    self.cursor += 1;
                    DispatchOutcome::ok()
                } else {
                    DispatchOutcome::failed()
                }
            }
            Key::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    DispatchOutcome::ok()
                } else {
                    DispatchOutcome::failed()
                }
            }
            Key::Char('x') => {
                let line = self.current_line();
                if line.is_empty() {
                    DispatchOutcome::failed()
                } else {
                    line.remove(0);
                    DispatchOutcome::ok()
                }
            }
            Key::Char('~') => {
                let line = self.current_line();
                if line.is_empty() {
                    DispatchOutcome::failed()
                } else {
                    let upper = line.remove(0).to_ascii_uppercase();
                    line.insert(0, upper);
                    DispatchOutcome::ok()
                }
            }
            _ => DispatchOutcome::ok(),
        }
    }

    fn last_command_line(&self) -> Option<Vec<Key>> {
        None
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
