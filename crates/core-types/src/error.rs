use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input '{0}': expected a whole number")]
    InvalidInput(String),

    #[error("Grade {0} is out of range: must be between 0 and 100")]
    OutOfRange(String),
}
