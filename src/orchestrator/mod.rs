//! Session orchestration
//!
//! The only component that sequences the others. One instance per session;
//! it exclusively owns the session state for the session's lifetime and
//! drives router -> (verdict | planner -> renderer) every turn.

use rand_chacha::ChaCha8Rng;

use crate::bank::Question;
use crate::core::error::{CoachError, Result};
use crate::llm::LanguageModel;
use crate::planner::plan_turn;
use crate::render::render;
use crate::router::{classify, Route};
use crate::session::{CandidateProfile, InterviewLogger, SessionState};
use crate::verdict::{synthesize, FinalFeedback};

/// What a turn produced: either the next visible message or, on stop, the
/// final feedback. After `Finished` the session is over.
#[derive(Debug)]
pub enum TurnOutcome {
    Reply(String),
    Finished(FinalFeedback),
}

pub struct SessionOrchestrator {
    state: SessionState,
    logger: InterviewLogger,
    llm: Box<dyn LanguageModel>,
    rng: ChaCha8Rng,
    last_question: Option<&'static Question>,
    turn_id: u32,
    started: bool,
}

impl SessionOrchestrator {
    pub fn new(logger: InterviewLogger, llm: Box<dyn LanguageModel>, rng: ChaCha8Rng) -> Self {
        Self {
            state: SessionState::new(1),
            logger,
            llm,
            rng,
            last_question: None,
            turn_id: 0,
            started: false,
        }
    }

    /// Begin the session: seed difficulty from the target grade, open the
    /// log, and return the greeting shown to the candidate.
    pub fn start(&mut self, profile: &CandidateProfile) -> Result<String> {
        self.state = SessionState::new(profile.target_grade.initial_difficulty());
        self.logger
            .start(&profile.participant_name, serde_json::to_value(profile)?)?;

        self.last_question = None;
        self.turn_id = 1;
        self.started = true;

        tracing::info!(
            participant = %profile.participant_name,
            grade = %profile.target_grade,
            difficulty = self.state.difficulty(),
            "interview session started"
        );

        Ok(format!(
            "Привет, {}! Ты претендуешь на позицию {} {}. \
             Расскажи коротко про свой опыт и последний проект/задачу.",
            profile.participant_name, profile.target_grade, profile.position
        ))
    }

    /// Process one candidate message.
    ///
    /// `interviewer_msg` is what was shown on the previous turn; it goes
    /// into the transcript and the audit log alongside the reply.
    pub async fn handle_message(
        &mut self,
        profile: &CandidateProfile,
        interviewer_msg: &str,
        user_msg: &str,
    ) -> Result<TurnOutcome> {
        // recording a turn before start is a precondition violation, not
        // something to paper over
        if !self.started {
            return Err(CoachError::LoggerNotStarted);
        }

        self.state.add_exchange(interviewer_msg, user_msg);

        let decision = classify(user_msg);

        // stop short-circuits straight to the verdict; nothing new is
        // scored or selected past this point
        if decision.route == Route::Stop {
            let feedback = synthesize(profile, &self.state);
            self.logger.finalize(feedback.clone())?;
            tracing::info!(
                recommendation = %feedback.hiring_recommendation,
                confidence = feedback.confidence_score,
                "interview finished"
            );
            return Ok(TurnOutcome::Finished(feedback));
        }

        let outcome = plan_turn(
            profile,
            &mut self.state,
            self.last_question,
            user_msg,
            &decision,
            self.llm.as_ref(),
            &mut self.rng,
        )
        .await;

        let reply = render(&outcome.plan);

        let internal = format!(
            "[Router]: route={} flags={:?} note={}\n[Planner]: {}\n[Interviewer]: {}",
            decision.route, decision.flags, decision.note, outcome.note, reply.internal_note
        );
        self.logger
            .add_turn(self.turn_id, interviewer_msg, user_msg, &internal)?;

        self.turn_id += 1;
        self.last_question = Some(outcome.selected);

        Ok(TurnOutcome::Reply(reply.visible_message))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn log_path(&self) -> &std::path::Path {
        self.logger.path()
    }
}
