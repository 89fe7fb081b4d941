use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("logger not started: call start() before recording turns")]
    LoggerNotStarted,

    #[error("unknown grade: {0} (expected Junior/Middle/Senior)")]
    InvalidGrade(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
