//! Per-turn planning
//!
//! One call per non-stop turn. Applies the ordered effects to the session
//! state (clarity vote, behavioral counters, scoring, streaks, difficulty,
//! question selection) and returns the Plan the renderer turns into the
//! visible reply.

use rand::Rng;

use crate::bank::{pick_question, Question};
use crate::core::config::STREAK_TRIGGER;
use crate::core::types::EvalLabel;
use crate::llm::{reword_question, LanguageModel};
use crate::router::{Route, RouteDecision, RouteFlags};
use crate::scoring::{estimate_clarity, score_answer};
use crate::session::{CandidateProfile, EvaluationRecord, SessionState};

/// How the renderer should phrase this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRoute {
    NextQuestion,
    HandleOfftopic,
    HandleHallucination,
    AnswerRoleReversal,
}

/// Canned reply when the candidate asks about the job; enough to answer
/// briefly and return to the interview
const ROLE_REVERSAL_ANSWER: &str =
    "Обычно на испытательном сроке дают 1–2 небольшие фичи и 1 багфикс, \
     чтобы посмотреть качество кода, скорость обучения и коммуникацию. \
     По микросервисам: часто есть смешанная архитектура — часть монолита + отдельные сервисы вокруг критичных доменов.";

/// Decision bundle handed from planning to rendering, one per turn
#[derive(Debug, Clone)]
pub struct Plan {
    pub eval: EvalLabel,
    /// Rounded to 2 decimals for reporting
    pub coverage: f64,
    pub flags: RouteFlags,
    pub route: PlanRoute,
    pub difficulty_delta: i8,
    pub difficulty_now: u8,
    pub preferred_topic: Option<&'static str>,
    pub next_question: String,
    pub role_reversal_answer: Option<&'static str>,
}

/// Plan plus the diagnostics the orchestrator logs
#[derive(Debug, Clone)]
pub struct PlannerOutcome {
    pub plan: Plan,
    /// The bank question behind `plan.next_question` (which may be reworded)
    pub selected: &'static Question,
    pub note: String,
}

/// Run one planning pass, mutating `state` in place.
#[allow(clippy::too_many_arguments)]
pub async fn plan_turn(
    profile: &CandidateProfile,
    state: &mut SessionState,
    last_question: Option<&'static Question>,
    user_answer: &str,
    decision: &RouteDecision,
    llm: &dyn LanguageModel,
    rng: &mut impl Rng,
) -> PlannerOutcome {
    // 1) soft signal first: how clearly did they communicate
    state.add_clarity_vote(estimate_clarity(user_answer));

    // 2) behavioral counters from the router's flags
    state.record_flags(&decision.flags);

    // 3) score the answer to the previously asked question, if any.
    // The very first turn is introductions only.
    let mut eval_label = EvalLabel::Unknown;
    let mut coverage = 0.0;

    if let Some(question) = last_question {
        let score = score_answer(user_answer, question.expected_keywords);
        eval_label = score.label;
        coverage = score.coverage;

        state.note_eval(EvaluationRecord {
            topic: question.topic.to_string(),
            question_id: question.id.to_string(),
            question: question.prompt.to_string(),
            answer: user_answer.to_string(),
            label: score.label,
            coverage: score.coverage,
            missing: score.missing,
            reference_answer: question.reference_answer.to_string(),
        });

        // 4) streaks drive difficulty adaptation
        state.record_label(score.label);
    }

    // 5) two in a row moves the difficulty one step
    let difficulty_delta: i8 = if state.correct_streak() >= STREAK_TRIGGER {
        1
    } else if state.incorrect_streak() >= STREAK_TRIGGER {
        -1
    } else {
        0
    };
    state.bump_difficulty(difficulty_delta);

    // 6) map the router's route to the renderer's branch
    let (route, role_reversal_answer) = match decision.route {
        Route::Offtopic => (PlanRoute::HandleOfftopic, None),
        Route::Hallucination => (PlanRoute::HandleHallucination, None),
        Route::RoleReversal => (PlanRoute::AnswerRoleReversal, Some(ROLE_REVERSAL_ANSWER)),
        // Stop never reaches the planner; treat anything else as a plain turn
        _ => (PlanRoute::NextQuestion, None),
    };

    // 7) if the candidate is struggling on a topic during normal evaluation,
    // reinforce it with another question on the same topic
    let preferred_topic = match (route, last_question) {
        (PlanRoute::NextQuestion, Some(q)) if eval_label.is_failure() => Some(q.topic),
        _ => None,
    };

    // 8) pick the next bank question and record it as asked
    let next_q = pick_question(
        state.difficulty(),
        state.asked_question_ids(),
        state.asked_topics(),
        preferred_topic,
        rng,
    );
    state.mark_asked(next_q.id, next_q.topic);

    // 9) optionally reword it; any collaborator failure keeps the bank text
    let next_question = if route == PlanRoute::NextQuestion {
        let topics = state.asked_topics();
        let recent = &topics[topics.len().saturating_sub(6)..];
        reword_question(llm, profile, state.difficulty(), next_q, recent).await
    } else {
        next_q.prompt.to_string()
    };

    let coverage_rounded = (coverage * 100.0).round() / 100.0;

    let note = format!(
        "eval={} coverage={} streak(c/i)={}/{} router_route={} flags={:?} diff={} -> next={}",
        eval_label,
        coverage_rounded,
        state.correct_streak(),
        state.incorrect_streak(),
        decision.route,
        decision.flags,
        state.difficulty(),
        next_q.id,
    );
    tracing::debug!("{note}");

    PlannerOutcome {
        plan: Plan {
            eval: eval_label,
            coverage: coverage_rounded,
            flags: decision.flags,
            route,
            difficulty_delta,
            difficulty_now: state.difficulty(),
            preferred_topic,
            next_question,
            role_reversal_answer,
        },
        selected: next_q,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::find_question;
    use crate::core::types::Grade;
    use crate::llm::DisabledLlm;
    use crate::router::classify;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            participant_name: "Алекс".into(),
            position: "Backend Developer".into(),
            target_grade: Grade::Junior,
            experience: "Пет-проекты на Django, немного SQL.".into(),
        }
    }

    async fn run_turn(
        state: &mut SessionState,
        last: Option<&'static Question>,
        answer: &str,
        rng: &mut ChaCha8Rng,
    ) -> PlannerOutcome {
        let decision = classify(answer);
        plan_turn(&profile(), state, last, answer, &decision, &DisabledLlm, rng).await
    }

    #[tokio::test]
    async fn test_first_turn_scores_nothing() {
        let mut state = SessionState::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = run_turn(&mut state, None, "Привет, я Алекс, знаю Python и SQL.", &mut rng).await;

        assert!(state.evaluations().is_empty());
        assert_eq!(outcome.plan.eval, EvalLabel::Unknown);
        assert_eq!(outcome.plan.route, PlanRoute::NextQuestion);
        assert_eq!(state.asked_question_ids().len(), 1);
        assert_eq!(outcome.plan.next_question, outcome.selected.prompt);
    }

    #[tokio::test]
    async fn test_correct_answer_recorded_and_streak_updated() {
        let mut state = SessionState::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let q = find_question("sql_join_1").unwrap();
        state.mark_asked(q.id, q.topic);

        let answer = "INNER JOIN возвращает только совпавшие строки. \
                      LEFT JOIN — все строки слева плюс совпадения справа, иначе NULL.";
        let outcome = run_turn(&mut state, Some(q), answer, &mut rng).await;

        assert_eq!(outcome.plan.eval, EvalLabel::Correct);
        assert_eq!(outcome.plan.coverage, 1.0);
        assert_eq!(state.correct_streak(), 1);
        assert_eq!(state.evaluations().len(), 1);
        // one correct answer is not yet a streak
        assert_eq!(outcome.plan.difficulty_delta, 0);
    }

    #[tokio::test]
    async fn test_two_corrects_raise_difficulty_by_one() {
        let mut state = SessionState::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let q = find_question("sql_join_1").unwrap();
        state.mark_asked(q.id, q.topic);
        let good = "INNER JOIN возвращает только совпавшие строки. \
                    LEFT JOIN — все строки слева плюс совпадения справа, иначе NULL.";

        let first = run_turn(&mut state, Some(q), good, &mut rng).await;
        assert_eq!(first.plan.difficulty_now, 1);

        // any question works for the second correct; reuse the same keywords
        let second = run_turn(&mut state, Some(q), good, &mut rng).await;
        assert_eq!(second.plan.difficulty_delta, 1);
        assert_eq!(second.plan.difficulty_now, 2);
    }

    #[tokio::test]
    async fn test_difficulty_clamps_at_max() {
        let mut state = SessionState::new(5);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let q = find_question("sql_join_1").unwrap();
        state.mark_asked(q.id, q.topic);
        let good = "INNER JOIN возвращает только совпавшие строки. \
                    LEFT JOIN — все строки слева плюс совпадения справа, иначе NULL.";

        run_turn(&mut state, Some(q), good, &mut rng).await;
        let outcome = run_turn(&mut state, Some(q), good, &mut rng).await;
        assert_eq!(outcome.plan.difficulty_delta, 1);
        assert_eq!(outcome.plan.difficulty_now, 5);
    }

    #[tokio::test]
    async fn test_failed_answer_sets_preferred_topic() {
        // difficulty 2 keeps sql_index_3 (difficulty 3) inside the ±1 band
        let mut state = SessionState::new(2);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let q = find_question("sql_join_1").unwrap();
        state.mark_asked(q.id, q.topic);

        let outcome = run_turn(&mut state, Some(q), "я не знаю", &mut rng).await;
        assert_eq!(outcome.plan.eval, EvalLabel::Unknown);
        assert_eq!(outcome.plan.preferred_topic, Some("SQL"));
        // SQL is reinforced: the next question stays on topic
        assert_eq!(outcome.selected.id, "sql_index_3");
    }

    #[tokio::test]
    async fn test_interruption_turn_skips_topic_reinforcement() {
        let mut state = SessionState::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let q = find_question("sql_join_1").unwrap();
        state.mark_asked(q.id, q.topic);

        // scored wrong, but the route is role reversal, not evaluate
        let outcome = run_turn(
            &mut state,
            Some(q),
            "А какие задачи будут на испытательном сроке?",
            &mut rng,
        )
        .await;
        assert_eq!(outcome.plan.route, PlanRoute::AnswerRoleReversal);
        assert_eq!(outcome.plan.preferred_topic, None);
        assert!(outcome.plan.role_reversal_answer.is_some());
        assert_eq!(state.signals.role_reversal_count, 1);
    }

    #[tokio::test]
    async fn test_hallucination_turn_counts_flag_and_keeps_bank_text() {
        let mut state = SessionState::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let q = find_question("sql_join_1").unwrap();
        state.mark_asked(q.id, q.topic);

        let outcome = run_turn(
            &mut state,
            Some(q),
            "Я читал, что в Python 4.0 уберут циклы for, поэтому их не учу.",
            &mut rng,
        )
        .await;
        assert_eq!(outcome.plan.route, PlanRoute::HandleHallucination);
        assert_eq!(state.signals.hallucination_flags, 1);
        // interruption branches never go through the reworder
        assert_eq!(outcome.plan.next_question, outcome.selected.prompt);
    }
}
