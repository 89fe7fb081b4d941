//! Question bank: the static catalog and the adaptive selector over it

pub mod catalog;
pub mod selector;

pub use catalog::{find_question, Question, QUESTION_BANK};
pub use selector::pick_question;
