use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No active timetable")]
    NoActiveTimetable,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Generation already in progress")]
    GenerationInProgress,

    #[error("Generation failed: {0}")]
    GenerationFailed(#[from] eyre::Report),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
