//! Interview policy constants - all tunable values in one place
//!
//! These are fixed policy values, not derived quantities. Changing them
//! shifts how strict the interview feels and how fast difficulty adapts.

/// Coverage at or above this labels an answer "correct"
pub const CORRECT_COVERAGE: f64 = 0.65;

/// Coverage at or above this (but below CORRECT_COVERAGE) labels "partial"
pub const PARTIAL_COVERAGE: f64 = 0.30;

// Clarity thresholds are in characters (not bytes - answers are often Cyrillic)
pub const CLARITY_TERSE_CHARS: usize = 25;
pub const CLARITY_ADEQUATE_CHARS: usize = 120;

/// Consecutive same-direction evaluations needed to move difficulty
pub const STREAK_TRIGGER: u32 = 2;

/// Difficulty is always clamped to this band
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Question selection stays within this distance of current difficulty
pub const DIFFICULTY_BAND: u8 = 1;

/// How many of the most recent topics the diversity heuristic avoids
pub const RECENT_TOPIC_WINDOW: usize = 2;

/// Only the most recent exchanges are kept in session memory
pub const TRANSCRIPT_WINDOW: usize = 12;

// Confidence scoring
pub const CONFIDENCE_FLOOR: i64 = 25;
pub const CONFIDENCE_CEILING: i64 = 95;
pub const CONFIDENCE_BASE: f64 = 40.0;
pub const OFFTOPIC_PENALTY: f64 = 0.05;
pub const HALLUCINATION_PENALTY: f64 = 0.15;

/// Ratio gates for the verdict
pub const STRONG_HIRE_RATIO: f64 = 0.75;
pub const HIRE_RATIO: f64 = 0.5;
pub const STRONG_HIRE_CONFIDENCE: i64 = 70;
pub const HIRE_CONFIDENCE: i64 = 60;
pub const GRADE_UPGRADE_RATIO: f64 = 0.75;
pub const GRADE_UPGRADE_DIFFICULTY: u8 = 3;
pub const GRADE_DOWNGRADE_RATIO: f64 = 0.35;

/// At most this many remediation lines are generated from gaps
pub const ROADMAP_GAP_CAP: usize = 6;

// Reworded questions are accepted only inside these bounds
pub const REWORD_MIN_CHARS: usize = 10;
pub const REWORD_MAX_CHARS: usize = 400;
pub const REWORD_TEMPERATURE: f32 = 0.2;

/// The rewording call is best-effort and must never stall a turn
pub const LLM_TIMEOUT_SECS: u64 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_ordered() {
        assert!(PARTIAL_COVERAGE < CORRECT_COVERAGE);
        assert!(CLARITY_TERSE_CHARS < CLARITY_ADEQUATE_CHARS);
        assert!(MIN_DIFFICULTY < MAX_DIFFICULTY);
        assert!(CONFIDENCE_FLOOR < CONFIDENCE_CEILING);
        assert!(REWORD_MIN_CHARS < REWORD_MAX_CHARS);
    }

    #[test]
    fn test_verdict_gates_ordered() {
        assert!(HIRE_RATIO < STRONG_HIRE_RATIO);
        assert!(HIRE_CONFIDENCE < STRONG_HIRE_CONFIDENCE);
        assert!(GRADE_DOWNGRADE_RATIO < GRADE_UPGRADE_RATIO);
    }
}
