use thiserror::Error;

/// Top-level error type for the pvv utility library.
#[derive(Debug, Error)]
pub enum PvvError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Util(#[from] UtilError),
}

/// Errors related to geometric values and computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{kind} expects {expected} values, got {actual}")]
    Arity {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("the list of points cannot be empty")]
    EmptyInput,

    #[error("position is empty")]
    EmptyPosition,

    #[error("motion at velocity {velocity} for {elapsed_seconds}s has no finite position")]
    NonFiniteMotion { velocity: f64, elapsed_seconds: f64 },
}

/// Errors raised by the helper utilities.
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    Git {
        command: &'static str,
        stderr: String,
    },

    #[error("cannot expand `~`: no home directory")]
    NoHomeDir,

    #[error("cannot format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Convenience type alias for results using [`PvvError`].
pub type Result<T> = std::result::Result<T, PvvError>;
