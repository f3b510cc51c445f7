//! Registry operation failures.
//!
//! Every variant is recoverable: callers report it and carry on.

use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Why an assignment was refused.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum AssignmentFailure {
    #[error("guest not found")]
    GuestNotFound,
    #[error("menu not found")]
    MenuNotFound,
    #[error("no servings left")]
    MenuExhausted,
}

/// Why a reassignment was refused.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ReassignmentFailure {
    #[error("guest not found")]
    GuestNotFound,
    #[error("guest has no menu assigned")]
    NotAssigned,
    #[error("menu not found")]
    MenuNotFound,
    #[error("no servings left")]
    MenuExhausted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("could not assign menu '{menu}' to guest '{guest}': {reason}")]
    AssignmentFailed {
        guest: String,
        menu: String,
        reason: AssignmentFailure,
    },

    #[error("could not move guest '{guest}' to menu '{menu}': {reason}")]
    ReassignmentFailed {
        guest: String,
        menu: String,
        reason: ReassignmentFailure,
    },
}
