//! Adaptive question selection
//!
//! Picks the next question close to the current difficulty, avoiding
//! repeats and recently used topics. All random tie-breaks go through an
//! injected Rng so sessions can be replayed deterministically.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bank::catalog::{Question, QUESTION_BANK};
use crate::core::config::{DIFFICULTY_BAND, RECENT_TOPIC_WINDOW};

/// Pick the next question.
///
/// Priority order:
/// 1. unasked questions within ±1 of current difficulty
/// 2. among those, the preferred topic if one is set (reinforce a weak topic)
/// 3. otherwise topics not asked in the last two questions
/// 4. otherwise anything in the band
/// 5. band exhausted: any unasked question
/// 6. whole bank exhausted: any question at all (repeats allowed)
pub fn pick_question(
    difficulty: u8,
    asked_ids: &[&str],
    asked_topics: &[&str],
    preferred_topic: Option<&str>,
    rng: &mut impl Rng,
) -> &'static Question {
    let band = i16::from(DIFFICULTY_BAND);
    let candidates: Vec<&'static Question> = QUESTION_BANK
        .iter()
        .filter(|q| !asked_ids.contains(&q.id))
        .filter(|q| (i16::from(q.difficulty) - i16::from(difficulty)).abs() <= band)
        .collect();

    // topic reinforcement beats diversity
    if let Some(topic) = preferred_topic {
        let same_topic: Vec<&'static Question> = candidates
            .iter()
            .copied()
            .filter(|q| q.topic == topic)
            .collect();
        if let Some(q) = same_topic.choose(rng) {
            return *q;
        }
    }

    // avoid the topics of the last two questions
    let recent = &asked_topics[asked_topics.len().saturating_sub(RECENT_TOPIC_WINDOW)..];
    let fresh_topic: Vec<&'static Question> = candidates
        .iter()
        .copied()
        .filter(|q| !recent.contains(&q.topic))
        .collect();
    if let Some(q) = fresh_topic.choose(rng) {
        return *q;
    }

    if let Some(q) = candidates.choose(rng) {
        return *q;
    }

    // band exhausted: take any unasked question regardless of difficulty
    let remaining: Vec<&'static Question> = QUESTION_BANK
        .iter()
        .filter(|q| !asked_ids.contains(&q.id))
        .collect();
    if let Some(q) = remaining.choose(rng) {
        return *q;
    }

    // whole bank asked: repeats are the graceful degrade, not a failure
    QUESTION_BANK
        .choose(rng)
        .expect("question bank is never empty")
}
