//! Property tests for the session-state and verdict invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use interview_coach::bank::{pick_question, QUESTION_BANK};
use interview_coach::core::types::{EvalLabel, Grade};
use interview_coach::router::RouteFlags;
use interview_coach::scoring::score_answer;
use interview_coach::session::{CandidateProfile, EvaluationRecord, SessionState};
use interview_coach::verdict::synthesize;

fn label_strategy() -> impl Strategy<Value = EvalLabel> {
    prop_oneof![
        Just(EvalLabel::Correct),
        Just(EvalLabel::Partial),
        Just(EvalLabel::Wrong),
        Just(EvalLabel::Unknown),
    ]
}

fn record(label: EvalLabel, topic: &str) -> EvaluationRecord {
    EvaluationRecord {
        topic: topic.to_string(),
        question_id: "q".into(),
        question: "?".into(),
        answer: "ответ".into(),
        label,
        coverage: 0.5,
        missing: Vec::new(),
        reference_answer: "эталон".into(),
    }
}

proptest! {
    /// Difficulty stays in 1..=5 no matter what delta sequence is applied
    #[test]
    fn difficulty_always_clamped(
        initial in 1u8..=5,
        deltas in proptest::collection::vec(-3i8..=3, 0..64),
    ) {
        let mut state = SessionState::new(initial);
        for delta in deltas {
            state.bump_difficulty(delta);
            prop_assert!((1..=5).contains(&state.difficulty()));
        }
    }

    /// At most one streak is nonzero after any label sequence
    #[test]
    fn streaks_mutually_exclusive(
        labels in proptest::collection::vec(label_strategy(), 0..64),
    ) {
        let mut state = SessionState::new(1);
        for label in labels {
            state.record_label(label);
            prop_assert!(
                state.correct_streak() == 0 || state.incorrect_streak() == 0
            );
        }
    }

    /// Confidence never leaves 25..=95 whatever the history and penalties
    #[test]
    fn confidence_always_in_band(
        labels in proptest::collection::vec(label_strategy(), 0..32),
        offtopic in 0u32..20,
        hallucinations in 0u32..20,
    ) {
        let mut state = SessionState::new(3);
        for label in labels {
            state.note_eval(record(label, "SQL"));
        }
        for _ in 0..offtopic {
            state.record_flags(&RouteFlags { offtopic: true, ..Default::default() });
        }
        for _ in 0..hallucinations {
            state.record_flags(&RouteFlags { hallucination: true, ..Default::default() });
        }

        let profile = CandidateProfile {
            participant_name: "Алекс".into(),
            position: "Backend Developer".into(),
            target_grade: Grade::Junior,
            experience: "-".into(),
        };
        let feedback = synthesize(&profile, &state);
        prop_assert!((25..=95).contains(&feedback.confidence_score));
    }

    /// The selector never repeats a question while unasked ones remain
    #[test]
    fn selector_never_repeats_early(
        difficulty in 1u8..=5,
        seed in any::<u64>(),
        asked_count in 0usize..9,
    ) {
        let asked_ids: Vec<&str> = QUESTION_BANK
            .iter()
            .take(asked_count)
            .map(|q| q.id)
            .collect();
        let asked_topics: Vec<&str> = QUESTION_BANK
            .iter()
            .take(asked_count)
            .map(|q| q.topic)
            .collect();

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let q = pick_question(difficulty, &asked_ids, &asked_topics, None, &mut rng);
        prop_assert!(!asked_ids.contains(&q.id));
    }

    /// Coverage is a valid fraction and the label matches the thresholds
    #[test]
    fn scoring_coverage_and_label_consistent(answer in ".{0,200}") {
        let keywords = &["inner", "left", "null", "все строки", "совпад"];
        let score = score_answer(&answer, keywords);
        prop_assert!((0.0..=1.0).contains(&score.coverage));
        match score.label {
            EvalLabel::Correct => prop_assert!(score.coverage >= 0.65),
            EvalLabel::Partial => prop_assert!(score.coverage >= 0.30 && score.coverage < 0.65),
            EvalLabel::Wrong => prop_assert!(score.coverage < 0.30),
            EvalLabel::Unknown => prop_assert!(score.coverage == 0.0),
        }
        prop_assert_eq!(score.matched.len() + score.missing.len(), keywords.len());
    }
}
