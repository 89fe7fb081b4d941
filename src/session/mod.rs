//! Session state, candidate records, and the transcript logger

pub mod logger;
pub mod profile;
pub mod state;

pub use logger::InterviewLogger;
pub use profile::{CandidateProfile, InterviewLog, TurnLog};
pub use state::{BehaviorSignals, EvaluationRecord, Exchange, SessionState};
