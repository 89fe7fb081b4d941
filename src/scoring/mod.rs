//! Pure answer-evaluation functions: keyword coverage and clarity

pub mod clarity;
pub mod scorer;

pub use clarity::estimate_clarity;
pub use scorer::{score_answer, AnswerScore};
