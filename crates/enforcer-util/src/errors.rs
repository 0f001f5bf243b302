use miette::Diagnostic;
use thiserror::Error;

/// Why a block of console text produced no conflicts.
///
/// These are ordinary outcomes of parsing user-supplied text, not faults:
/// the caller shows the message and lets the user try different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The input was empty or whitespace only.
    #[error("Empty input")]
    EmptyInput,

    /// No line carried the `[ERROR]` marker.
    #[error("No [ERROR] lines found. Please paste maven enforcer output.")]
    #[diagnostic(help("Copy the full output of `mvn enforcer:enforce`, including the [ERROR] prefixes"))]
    NoErrorMarkers,

    /// Every `[ERROR]` line was a separator or a stray fragment.
    #[error("Could not parse dependency paths")]
    NoParsablePaths,

    /// Paths were found but none of them contained a dependency coordinate.
    #[error("No conflicts found in the input")]
    #[diagnostic(help(
        "Only DependencyConvergence and RequireUpperBoundDeps failures are recognised"
    ))]
    NoConflictsFound,
}

/// Unified error type for enforcer-helper operations.
#[derive(Debug, Error, Diagnostic)]
pub enum EnforcerError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your config file for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },

    /// The console output could not be turned into conflicts.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

/// Convenience alias for `miette::Result<T>`.
pub type EnforcerResult<T> = miette::Result<T>;
