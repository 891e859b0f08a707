//! Global constants for the Encore macro engine

pub mod errors {
    // Error Codes
    pub const INVALID_REGISTER: &str = "E354";
    pub const NO_PREVIOUS_MACRO: &str = "E748";
    pub const ALREADY_RECORDING: &str = "ALREADY_RECORDING";
    pub const NOT_RECORDING: &str = "NOT_RECORDING";
    pub const NESTING_LIMIT: &str = "NESTING_LIMIT";

    // Error Messages
    pub const MSG_NO_PREVIOUS_MACRO: &str = "E748: No previously used register";
    pub const MSG_ALREADY_RECORDING: &str = "Already recording a macro";
    pub const MSG_NOT_RECORDING: &str = "Not recording a macro";
    pub const MSG_NESTING_LIMIT: &str = "Macro nesting limit reached";
}

pub mod limits {
    /// Backstop on the playback frame stack for hosts whose command
    /// interpreter carries no recursion guard of its own
    pub const DEFAULT_MAX_NESTING: usize = 1000;
}
