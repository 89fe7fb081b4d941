//! Candidate profile and the session log records

use serde::{Deserialize, Serialize};

use crate::core::types::Grade;
use crate::verdict::FinalFeedback;

/// Who is being interviewed and for what
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub participant_name: String,
    pub position: String,
    pub target_grade: Grade,
    pub experience: String,
}

/// One turn as recorded for the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnLog {
    /// Monotonic from 1
    pub turn_id: u32,
    /// What the interviewer showed on the previous turn
    pub agent_visible_message: String,
    pub user_message: String,
    /// Router/planner/renderer diagnostics, never shown to the candidate
    pub internal_thoughts: String,
}

/// Full session record written to disk after every change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewLog {
    pub participant_name: String,
    pub turns: Vec<TurnLog>,
    pub final_feedback: Option<FinalFeedback>,
    pub meta: serde_json::Value,
}

impl InterviewLog {
    pub fn new(participant_name: &str, meta: serde_json::Value) -> Self {
        Self {
            participant_name: participant_name.to_string(),
            turns: Vec::new(),
            final_feedback: None,
            meta,
        }
    }
}
