//! Final verdict synthesis
//!
//! Runs once, at stop: folds the whole evaluation history and the
//! behavioral signals into the structured hiring feedback.

use serde::{Deserialize, Serialize};

use crate::core::config::{
    CONFIDENCE_BASE, CONFIDENCE_CEILING, CONFIDENCE_FLOOR, GRADE_DOWNGRADE_RATIO,
    GRADE_UPGRADE_DIFFICULTY, GRADE_UPGRADE_RATIO, HALLUCINATION_PENALTY, HIRE_CONFIDENCE,
    HIRE_RATIO, OFFTOPIC_PENALTY, ROADMAP_GAP_CAP, STRONG_HIRE_CONFIDENCE, STRONG_HIRE_RATIO,
};
use crate::core::types::{EvalLabel, Grade, HiringRecommendation};
use crate::session::{CandidateProfile, EvaluationRecord, SessionState};

/// A topic where the most recent relevant answer fell short
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapItem {
    pub topic: String,
    pub what_went_wrong: String,
    pub correct_answer: String,
}

/// Narrative triple, one line per soft skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftSkills {
    pub clarity: String,
    pub honesty: String,
    pub engagement: String,
}

/// The structured hiring verdict, produced exactly once per session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalFeedback {
    pub grade: Grade,
    pub hiring_recommendation: HiringRecommendation,
    /// 0..=100, clamped to 25..=95 by construction
    pub confidence_score: i64,
    pub confirmed_skills: Vec<String>,
    pub knowledge_gaps: Vec<GapItem>,
    pub soft_skills: SoftSkills,
    pub roadmap: Vec<String>,
    pub optional_links: Vec<String>,
}

/// Topic-agnostic pointers appended to every report
const RESOURCE_LINKS: &[&str] = &[
    "Python docs: Built-in Types, Iterators",
    "PostgreSQL docs: JOIN, Indexes, EXPLAIN",
    "MDN: HTTP Methods, Status Codes, Idempotency",
    "Django docs: QuerySet (lazy evaluation), select_related/prefetch_related",
];

/// Synthesize the final feedback from the session state.
pub fn synthesize(profile: &CandidateProfile, state: &SessionState) -> FinalFeedback {
    // 1) hard skills: group evaluations by topic in first-seen order
    let mut topics: Vec<&str> = Vec::new();
    for e in state.evaluations() {
        if !topics.iter().any(|t| *t == e.topic) {
            topics.push(e.topic.as_str());
        }
    }

    let mut confirmed: Vec<String> = Vec::new();
    let mut gaps: Vec<GapItem> = Vec::new();

    for topic in &topics {
        let items: Vec<&EvaluationRecord> = state
            .evaluations()
            .iter()
            .filter(|e| e.topic == *topic)
            .collect();

        if items.iter().any(|e| e.label == EvalLabel::Correct) {
            confirmed.push(topic.to_string());
        }

        // keep the most recent failure per topic
        if let Some(last) = items.iter().rev().find(|e| e.label.is_failure()) {
            gaps.push(GapItem {
                topic: topic.to_string(),
                what_went_wrong: format!(
                    "Ответ оценен как {} (coverage={:.2}). Не хватило пунктов: [{}]",
                    last.label,
                    last.coverage,
                    last.missing.join(", "),
                ),
                correct_answer: last.reference_answer.clone(),
            });
        }
    }

    confirmed.sort();
    confirmed.dedup();

    // 2) soft skills from the clarity votes and behavioral counters
    let soft_skills = soft_skill_narrative(state);

    // 3) confidence from the correct ratio minus behavioral penalties
    let total = state.evaluations().len();
    let correct = state
        .evaluations()
        .iter()
        .filter(|e| e.label == EvalLabel::Correct)
        .count();
    let wrong = state
        .evaluations()
        .iter()
        .filter(|e| e.label.is_failure())
        .count();

    let ratio = if total > 0 {
        correct as f64 / total as f64
    } else {
        0.0
    };

    let penalty = f64::from(state.signals.offtopic_count) * OFFTOPIC_PENALTY
        + f64::from(state.signals.hallucination_flags) * HALLUCINATION_PENALTY;
    let raw = (ratio * 100.0 - penalty * 100.0 + CONFIDENCE_BASE).round() as i64;
    let confidence = raw.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    // 4) grade: default to the target; only Junior can be upgraded, and a
    // weak ratio overrides everything. The asymmetry is intentional.
    let mut grade = profile.target_grade;
    if ratio >= GRADE_UPGRADE_RATIO
        && state.difficulty() >= GRADE_UPGRADE_DIFFICULTY
        && profile.target_grade == Grade::Junior
    {
        grade = Grade::Middle;
    }
    if ratio < GRADE_DOWNGRADE_RATIO {
        grade = Grade::Junior;
    }

    // 5) recommendation, strictest rule first
    let hiring_recommendation = if state.signals.hallucination_flags > 0 && wrong >= 2 {
        HiringRecommendation::NoHire
    } else if ratio >= STRONG_HIRE_RATIO && confidence >= STRONG_HIRE_CONFIDENCE {
        HiringRecommendation::StrongHire
    } else if ratio >= HIRE_RATIO && confidence >= HIRE_CONFIDENCE {
        HiringRecommendation::Hire
    } else {
        HiringRecommendation::NoHire
    };

    // 6) roadmap: one remediation line per gap, capped
    let mut roadmap: Vec<String> = Vec::new();
    if gaps.is_empty() {
        roadmap.push(
            "Продолжать практику: решать задачи и объяснять решения вслух (структура ответа)."
                .to_string(),
        );
    } else {
        for gap in gaps.iter().take(ROADMAP_GAP_CAP) {
            roadmap.push(format!(
                "Подтянуть тему: {}. Повтори базовые определения и сделай 10 практических задач/примеров.",
                gap.topic
            ));
        }
    }
    if state.signals.hallucination_flags > 0 {
        roadmap.push(
            "Перед интервью: проверять сомнительные утверждения по официальной документации/PEP и фиксировать источники."
                .to_string(),
        );
    }

    FinalFeedback {
        grade,
        hiring_recommendation,
        confidence_score: confidence,
        confirmed_skills: confirmed,
        knowledge_gaps: gaps,
        soft_skills,
        roadmap,
        optional_links: RESOURCE_LINKS.iter().map(|s| s.to_string()).collect(),
    }
}

fn soft_skill_narrative(state: &SessionState) -> SoftSkills {
    let votes = &state.signals.clarity_votes;
    let clarity_avg = if votes.is_empty() {
        0.0
    } else {
        votes.iter().map(|v| f64::from(*v)).sum::<f64>() / votes.len() as f64
    };

    let clarity = if clarity_avg < 0.8 {
        "Низкая: ответы короткие/неструктурированные; стоит проговаривать ход мысли и приводить примеры."
    } else if clarity_avg < 1.5 {
        "Средняя: в целом понятно, но иногда не хватает структуры и примеров."
    } else {
        "Высокая: отвечает развернуто и структурированно."
    };

    let honesty = if state.signals.hallucination_flags > 0 {
        "Под вопросом: были уверенные утверждения без подтверждений (сомнительные факты/слухи)."
    } else {
        "Хорошая: признавал(а) незнание и не пытался(ась) выкрутиться."
    };

    let engagement = if state.signals.engagement_flags > 0 {
        "Хорошая: задавал(а) вопросы о задачах/процессах и уточнял(а) требования."
    } else {
        "Средняя: встречные вопросы задавал(а) редко."
    };

    SoftSkills {
        clarity: clarity.to_string(),
        honesty: honesty.to_string(),
        engagement: engagement.to_string(),
    }
}
