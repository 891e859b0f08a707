//! Macro controller
//! The façade the rest of the editor talks to

/// ## controller/ Invariants
///
/// - The input pump mirrors every event through `record_event` before
///   forwarding it to the interpreter for live execution.
/// - Every recorder and player error is surfaced as status text here;
///   nothing panics past this boundary.
/// - While a recording session is open, playback requests are ignored;
///   invocation tokens are captured as events only.
use crate::error::Result;
use crate::interpreter::CommandInterpreter;
use crate::key::Key;
use crate::notification::NotificationType;
use crate::player::{PlayResult, Player, PlayerSettings};
use crate::recorder::Recorder;
use crate::session::Session;
use tracing::debug;

/// Records, stores, and replays macro event sequences for one session
pub struct MacroController {
    session: Session,
    recorder: Recorder,
    player: Player,
}

impl MacroController {
    /// Create a controller with an isolated session and default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(PlayerSettings::default())
    }

    /// Create a controller with custom playback settings
    #[must_use]
    pub fn with_settings(settings: PlayerSettings) -> Self {
        Self {
            session: Session::new(),
            recorder: Recorder::new(),
            player: Player::with_settings(settings),
        }
    }

    /// The session context (registers, markers, notifications)
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session context
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Whether the input pump should mirror events into the recorder
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// The slot an open recording session targets (for status display)
    #[must_use]
    pub fn recording_register(&self) -> Option<char> {
        self.recorder.register()
    }

    /// Open a recording session targeting `register`.
    /// Surfaces a status message on success and on error.
    pub fn begin_recording(&mut self, register: char) -> Result<()> {
        match self.recorder.start(register, &self.session.registers) {
            Ok(()) => {
                let slot = self.recorder.register().unwrap_or(register);
                self.session
                    .notify(NotificationType::Info, format!("recording @{slot}"));
                Ok(())
            }
            Err(err) => {
                self.session.handle_error(err.clone());
                Err(err)
            }
        }
    }

    /// Mirror one live input event into the open recording session.
    /// Called by the input pump for every event while `is_recording()`.
    pub fn record_event(&mut self, key: Key) {
        if !key.is_input() || !self.recorder.is_recording() {
            return;
        }
        if let Err(err) = self.recorder.feed(key) {
            self.session.handle_error(err);
        }
    }

    /// Close the recording session and commit its buffer.
    /// Returns the committed sequence length.
    pub fn end_recording(&mut self) -> Result<usize> {
        match self.recorder.stop(&mut self.session.registers) {
            Ok(committed) => Ok(committed),
            Err(err) => {
                self.session.handle_error(err.clone());
                Err(err)
            }
        }
    }

    /// Replay the sequence behind `register`, `count` times.
    ///
    /// Counts below 1 are treated as a bare invocation. While a recording
    /// session is open this is a no-op: the invocation keys are captured
    /// by the recorder and take effect when the recorded sequence plays.
    pub fn invoke<I: CommandInterpreter>(
        &mut self,
        interpreter: &mut I,
        register: char,
        count: usize,
    ) -> Result<PlayResult> {
        if self.recorder.is_recording() {
            debug!(register = %register, "playback ignored during recording");
            return Ok(PlayResult::default());
        }
        match self
            .player
            .play(&mut self.session, interpreter, register, count)
        {
            Ok(result) => Ok(result),
            Err(err) => {
                self.session.handle_error(err.clone());
                Err(err)
            }
        }
    }
}

impl Default for MacroController {
    fn default() -> Self {
        Self::new()
    }
}
