//! Mutable per-session interview state
//!
//! One instance per session, owned by the orchestrator driving it. All
//! mutation goes through methods so the invariants hold at the API
//! boundary: difficulty stays in 1..=5, at most one streak is nonzero,
//! the transcript window never grows past its cap.

use serde::Serialize;

use crate::core::config::{MAX_DIFFICULTY, MIN_DIFFICULTY, TRANSCRIPT_WINDOW};
use crate::core::types::EvalLabel;
use crate::router::RouteFlags;

/// One interviewer/candidate exchange kept for context
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub interviewer: String,
    pub candidate: String,
}

/// Everything scored for one answered question. Appended once, never edited.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    pub topic: String,
    pub question_id: String,
    pub question: String,
    pub answer: String,
    pub label: EvalLabel,
    pub coverage: f64,
    pub missing: Vec<String>,
    pub reference_answer: String,
}

/// Behavioral counters feeding the soft-skill narrative.
///
/// A closed set of explicit fields rather than a key-value bag, so every
/// counter the verdict reads is visible here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BehaviorSignals {
    pub offtopic_count: u32,
    pub hallucination_flags: u32,
    pub role_reversal_count: u32,
    pub engagement_flags: u32,
    pub honesty_flags: u32,
    pub clarity_votes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current question difficulty, 1..=5
    difficulty: u8,
    correct_streak: u32,
    incorrect_streak: u32,
    transcript: Vec<Exchange>,
    asked_question_ids: Vec<&'static str>,
    asked_topics: Vec<&'static str>,
    pub signals: BehaviorSignals,
    evaluations: Vec<EvaluationRecord>,
}

impl SessionState {
    pub fn new(initial_difficulty: u8) -> Self {
        Self {
            difficulty: initial_difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            correct_streak: 0,
            incorrect_streak: 0,
            transcript: Vec::new(),
            asked_question_ids: Vec::new(),
            asked_topics: Vec::new(),
            signals: BehaviorSignals::default(),
            evaluations: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn correct_streak(&self) -> u32 {
        self.correct_streak
    }

    pub fn incorrect_streak(&self) -> u32 {
        self.incorrect_streak
    }

    pub fn asked_question_ids(&self) -> &[&'static str] {
        &self.asked_question_ids
    }

    pub fn asked_topics(&self) -> &[&'static str] {
        &self.asked_topics
    }

    pub fn evaluations(&self) -> &[EvaluationRecord] {
        &self.evaluations
    }

    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Remember one exchange, evicting the oldest past the window
    pub fn add_exchange(&mut self, interviewer: &str, candidate: &str) {
        self.transcript.push(Exchange {
            interviewer: interviewer.to_string(),
            candidate: candidate.to_string(),
        });
        if self.transcript.len() > TRANSCRIPT_WINDOW {
            let excess = self.transcript.len() - TRANSCRIPT_WINDOW;
            self.transcript.drain(..excess);
        }
    }

    /// Append the evaluation of an answered question
    pub fn note_eval(&mut self, record: EvaluationRecord) {
        self.evaluations.push(record);
    }

    /// Update streaks from the latest label. Partial resets both sides so
    /// ambiguous answers never swing difficulty.
    pub fn record_label(&mut self, label: EvalLabel) {
        match label {
            EvalLabel::Correct => {
                self.correct_streak += 1;
                self.incorrect_streak = 0;
            }
            EvalLabel::Wrong | EvalLabel::Unknown => {
                self.incorrect_streak += 1;
                self.correct_streak = 0;
            }
            EvalLabel::Partial => {
                self.correct_streak = 0;
                self.incorrect_streak = 0;
            }
        }
    }

    /// Shift difficulty, clamped to the allowed band
    pub fn bump_difficulty(&mut self, delta: i8) {
        let next = i16::from(self.difficulty) + i16::from(delta);
        self.difficulty = next.clamp(i16::from(MIN_DIFFICULTY), i16::from(MAX_DIFFICULTY)) as u8;
    }

    pub fn add_clarity_vote(&mut self, vote: u8) {
        self.signals.clarity_votes.push(vote);
    }

    /// Bump the behavioral counters for whichever flags fired this turn.
    /// Asking about the job counts as engagement as well.
    pub fn record_flags(&mut self, flags: &RouteFlags) {
        if flags.role_reversal {
            self.signals.role_reversal_count += 1;
            self.signals.engagement_flags += 1;
        }
        if flags.offtopic {
            self.signals.offtopic_count += 1;
        }
        if flags.hallucination {
            self.signals.hallucination_flags += 1;
        }
    }

    /// Mark a question as asked so the selector never repeats it
    pub fn mark_asked(&mut self, id: &'static str, topic: &'static str) {
        self.asked_question_ids.push(id);
        self.asked_topics.push(topic);
    }
}
