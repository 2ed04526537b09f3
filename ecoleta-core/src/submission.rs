use thiserror::Error;

use crate::error::GatewayError;

/// Lifecycle of a single submission.
///
/// ```text
/// Idle → Submitting → Succeeded
///   ↑         ↓
///   └──── Failed
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(GatewayError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("A submission is already in progress")]
    InProgress,
    #[error("The point has already been submitted")]
    AlreadySubmitted,
    #[error("The previous failure has not been acknowledged")]
    Unacknowledged,
    #[error("No submission is in progress")]
    NotSubmitting,
}

impl SubmissionState {
    pub fn begin(&mut self) -> Result<(), SubmissionError> {
        match self {
            Self::Idle => {
                *self = Self::Submitting;
                Ok(())
            }
            Self::Submitting => Err(SubmissionError::InProgress),
            Self::Succeeded => Err(SubmissionError::AlreadySubmitted),
            Self::Failed(_) => Err(SubmissionError::Unacknowledged),
        }
    }

    pub fn finish(&mut self, result: Result<(), GatewayError>) -> Result<(), SubmissionError> {
        if !self.is_submitting() {
            return Err(SubmissionError::NotSubmitting);
        }
        *self = match result {
            Ok(()) => Self::Succeeded,
            Err(err) => Self::Failed(err),
        };
        Ok(())
    }

    /// Returns to `Idle` after a failure.
    ///
    /// Returns `false` if there was no failure to acknowledge.
    pub fn acknowledge_failure(&mut self) -> bool {
        if matches!(self, Self::Failed(_)) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub const fn error(&self) -> Option<&GatewayError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}
