//! Storage error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    /// The backend could not be read or written.
    #[display("backend")]
    Backend,
    /// The stored document does not parse or is inconsistent.
    #[display("corrupt document")]
    Corrupt,
}

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error ({}): {} at {}:{}", kind, message, file, line)]
pub struct StoreError {
    /// Error category.
    pub kind: StoreErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new backend error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(StoreErrorKind::Backend, message)
    }

    /// Creates an error for a document that does not parse or is
    /// inconsistent.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::with_kind(StoreErrorKind::Corrupt, message)
    }

    #[track_caller]
    fn with_kind(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the stored document itself is bad, as opposed to
    /// the backend failing.
    pub fn is_corrupt(&self) -> bool {
        self.kind == StoreErrorKind::Corrupt
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
