//! Error types used by the emitter.
//!
//! Registration and emission never fail. The only fallible operation is
//! [`Emitter::drain`](crate::Emitter::drain), which waits for background
//! listener work with a deadline.
//!
//! [`EmitterError`] provides helper methods (`as_label`, `as_message`) for logging.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by the emitter.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitterError {
    /// Drain grace period was exceeded; some listener work was still running.
    #[error("drain timeout {grace:?} exceeded; {in_flight} task(s) still running")]
    GraceExceeded {
        /// The requested grace duration.
        grace: Duration,
        /// Number of background tasks (dispatch and listener) still alive at the deadline.
        in_flight: usize,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use emitvisor::EmitterError;
    /// use std::time::Duration;
    ///
    /// let err = EmitterError::GraceExceeded { grace: Duration::from_secs(5), in_flight: 2 };
    /// assert_eq!(err.as_label(), "emitter_grace_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::GraceExceeded { .. } => "emitter_grace_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::GraceExceeded { grace, in_flight } => {
                format!("grace exceeded after {grace:?}; in_flight={in_flight}")
            }
        }
    }
}
