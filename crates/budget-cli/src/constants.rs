//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Transaction not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (including rejected form submissions).
    pub const INVALID_INPUT: i32 = 4;
}

/// Rows shown by `list` when no explicit limit or filter is given.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Width of the longest bar drawn by `chart`.
pub const CHART_BAR_WIDTH: usize = 30;
