//! Utterance routing
//!
//! Decides what kind of turn this is before any scoring happens: a stop
//! request, a behavioral interruption (off-topic chatter, an absurd claim,
//! the candidate interviewing us back), or a plain answer to evaluate.
//! Detection is keyword heuristics only; the precedence between flags is an
//! explicit ordered table so the policy stays visible and testable.

use std::fmt;

use serde::Serialize;

/// How the current utterance should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Stop,
    RoleReversal,
    Hallucination,
    Offtopic,
    Evaluate,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::RoleReversal => write!(f, "role_reversal"),
            Self::Hallucination => write!(f, "hallucination"),
            Self::Offtopic => write!(f, "offtopic"),
            Self::Evaluate => write!(f, "evaluate"),
        }
    }
}

/// Closed set of behavioral flags raised by the classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteFlags {
    pub offtopic: bool,
    pub hallucination: bool,
    pub role_reversal: bool,
}

/// Classifier output: route plus the raw flags for the behavioral counters
#[derive(Debug, Clone)]
pub struct RouteDecision {
    pub route: Route,
    pub flags: RouteFlags,
    pub note: &'static str,
}

/// Phrases that end the interview and request feedback
const STOP_PREFIXES: &[&str] = &["стоп интервью"];
const STOP_EXACT: &[&str] = &["стоп игра давай фидбэк", "давай фидбэк"];

const OFFTOPIC_KEYWORDS: &[&str] = &[
    "погода", "дожд", "снег", "политик", "выбор", "котик", "мем", "анекдот",
];

const HALLUCINATION_KEYWORDS: &[&str] = &[
    "python 4.0",
    "уберут циклы for",
    "циклы for уберут",
    "заменят на нейронные связи",
];

/// Job/process words; a question mark plus one of these reads as the
/// candidate asking about the role
const JOB_KEYWORDS: &[&str] = &[
    "какие задачи", "испытатель", "микросервис", "стек", "команда", "процессы",
];

/// Flag precedence, evaluated top-down. A candidate asking about the job
/// outranks correcting a claim, which outranks steering back from chatter.
const PRECEDENCE: &[(fn(RouteFlags) -> bool, Route, &str)] = &[
    (
        |f| f.role_reversal,
        Route::RoleReversal,
        "Candidate asked about the job; answer briefly then resume interview.",
    ),
    (
        |f| f.hallucination,
        Route::Hallucination,
        "Detected likely false/absurd claim; challenge politely and continue.",
    ),
    (
        |f| f.offtopic,
        Route::Offtopic,
        "Off-topic detected; steer back to interview.",
    ),
];

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when the candidate asked to end the interview
pub fn is_stop(text: &str) -> bool {
    let t = normalize(text);
    if STOP_PREFIXES.iter().any(|p| t.starts_with(p)) {
        return true;
    }
    // exact stop phrases, tolerant of sentence punctuation
    let stripped: String = t.chars().filter(|c| *c != '.' && *c != '!').collect();
    let stripped = normalize(&stripped);
    STOP_EXACT.iter().any(|p| stripped == *p)
}

/// Classify one utterance.
pub fn classify(user_text: &str) -> RouteDecision {
    if is_stop(user_text) {
        return RouteDecision {
            route: Route::Stop,
            flags: RouteFlags::default(),
            note: "User requested to stop interview.",
        };
    }

    let t = normalize(user_text);
    let flags = RouteFlags {
        offtopic: OFFTOPIC_KEYWORDS.iter().any(|k| t.contains(k)),
        hallucination: HALLUCINATION_KEYWORDS.iter().any(|k| t.contains(k)),
        role_reversal: t.contains('?') && JOB_KEYWORDS.iter().any(|k| t.contains(k)),
    };

    for (fires, route, note) in PRECEDENCE.iter().copied() {
        if fires(flags) {
            return RouteDecision { route, flags, note };
        }
    }

    RouteDecision {
        route: Route::Evaluate,
        flags,
        note: "Proceed with evaluation & next question selection.",
    }
}
