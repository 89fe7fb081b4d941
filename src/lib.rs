//! Interview Coach - Simulated Turn-Based Technical Interview
//!
//! Pipeline per turn: route the utterance, score the previous answer,
//! adapt difficulty, pick the next question, render the reply. On stop,
//! synthesize the hiring verdict from the accumulated session state.

pub mod bank;
pub mod core;
pub mod llm;
pub mod orchestrator;
pub mod planner;
pub mod render;
pub mod router;
pub mod scoring;
pub mod session;
pub mod verdict;
