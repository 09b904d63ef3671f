use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Student '{0}' already exists!")]
    Duplicate(String),

    #[error("Student '{0}' not found!")]
    NotFound(String),

    #[error("Student name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    InvalidGrade(#[from] CoreError),

    #[error("The roster lock was poisoned by a panicking writer")]
    LockPoisoned,
}

/// A flat classification of `RosterError` for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Duplicate,
    NotFound,
    InvalidName,
    InvalidInput,
    OutOfRange,
    Unavailable,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::Duplicate(_) => ErrorKind::Duplicate,
            RosterError::NotFound(_) => ErrorKind::NotFound,
            RosterError::EmptyName => ErrorKind::InvalidName,
            RosterError::InvalidGrade(CoreError::InvalidInput(_)) => ErrorKind::InvalidInput,
            RosterError::InvalidGrade(CoreError::OutOfRange(_)) => ErrorKind::OutOfRange,
            RosterError::LockPoisoned => ErrorKind::Unavailable,
        }
    }
}
