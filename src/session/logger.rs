//! Session transcript logger
//!
//! Persists the interview log as pretty JSON after every mutation.
//! Last write wins; there is no stronger durability guarantee. Recording
//! a turn before `start()` is a precondition violation and returns an
//! error rather than silently dropping the data.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{CoachError, Result};
use crate::session::profile::{InterviewLog, TurnLog};
use crate::verdict::FinalFeedback;

pub struct InterviewLogger {
    path: PathBuf,
    log: Option<InterviewLog>,
}

impl InterviewLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            log: None,
        }
    }

    /// Begin a new session log. Profile fields go into `meta`.
    pub fn start(&mut self, participant_name: &str, meta: serde_json::Value) -> Result<()> {
        self.log = Some(InterviewLog::new(participant_name, meta));
        self.flush()
    }

    pub fn add_turn(
        &mut self,
        turn_id: u32,
        agent_visible_message: &str,
        user_message: &str,
        internal_thoughts: &str,
    ) -> Result<()> {
        let log = self.log.as_mut().ok_or(CoachError::LoggerNotStarted)?;
        log.turns.push(TurnLog {
            turn_id,
            agent_visible_message: agent_visible_message.to_string(),
            user_message: user_message.to_string(),
            internal_thoughts: internal_thoughts.to_string(),
        });
        self.flush()
    }

    /// Attach the final feedback and persist one last time
    pub fn finalize(&mut self, final_feedback: FinalFeedback) -> Result<()> {
        let log = self.log.as_mut().ok_or(CoachError::LoggerNotStarted)?;
        log.final_feedback = Some(final_feedback);
        self.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let log = self.log.as_ref().ok_or(CoachError::LoggerNotStarted)?;
        let json = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
