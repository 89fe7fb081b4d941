pub mod config;
pub mod error;
pub mod types;

pub use error::{CoachError, Result};
pub use types::{EvalLabel, Grade, HiringRecommendation};
