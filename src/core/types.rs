//! Core type definitions shared across the interview pipeline

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CoachError;

/// Candidate seniority grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Junior,
    Middle,
    Senior,
}

impl Grade {
    /// Starting interview difficulty for this grade
    pub fn initial_difficulty(&self) -> u8 {
        match self {
            Self::Junior => 1,
            Self::Middle => 2,
            Self::Senior => 3,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Junior => write!(f, "Junior"),
            Self::Middle => write!(f, "Middle"),
            Self::Senior => write!(f, "Senior"),
        }
    }
}

impl FromStr for Grade {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "middle" => Ok(Self::Middle),
            "senior" => Ok(Self::Senior),
            other => Err(CoachError::InvalidGrade(other.to_string())),
        }
    }
}

/// Outcome of scoring one answer against its question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalLabel {
    Correct,
    Partial,
    Wrong,
    Unknown,
}

impl EvalLabel {
    /// Wrong and unknown both count against the candidate
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Wrong | Self::Unknown)
    }
}

impl fmt::Display for EvalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Partial => write!(f, "partial"),
            Self::Wrong => write!(f, "wrong"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Final hiring call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringRecommendation {
    #[serde(rename = "No Hire")]
    NoHire,
    Hire,
    #[serde(rename = "Strong Hire")]
    StrongHire,
}

impl fmt::Display for HiringRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHire => write!(f, "No Hire"),
            Self::Hire => write!(f, "Hire"),
            Self::StrongHire => write!(f, "Strong Hire"),
        }
    }
}
