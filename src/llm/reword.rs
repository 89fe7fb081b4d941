//! Best-effort question rewording
//!
//! One attempt per turn, strict acceptance rules, silent fallback. A
//! reworded question is only used when it still looks like a question and
//! stays within sane length bounds; otherwise the bank phrasing wins.

use crate::bank::Question;
use crate::core::config::{REWORD_MAX_CHARS, REWORD_MIN_CHARS, REWORD_TEMPERATURE};
use crate::llm::{ChatMessage, LanguageModel};
use crate::session::CandidateProfile;

const REWORD_SYSTEM: &str = "Ты — Observer/ментор. Ты НЕ говоришь кандидату напрямую.\n\
Твоя задача: помочь Interviewer.\n\
Сформулируй ОДИН вопрос для интервью (естественно, как рекрутер).\n\
Верни только текст вопроса.";

/// Accept the rewrite only if it still reads as a question of sane length
fn is_acceptable(text: &str) -> bool {
    let len = text.trim().chars().count();
    text.contains('?') && len > REWORD_MIN_CHARS && len < REWORD_MAX_CHARS
}

/// Ask the collaborator to reword `question`; returns the bank phrasing on
/// any failure. Never propagates an error into the turn.
pub async fn reword_question(
    llm: &dyn LanguageModel,
    profile: &CandidateProfile,
    difficulty: u8,
    question: &Question,
    recent_topics: &[&str],
) -> String {
    let user_prompt = format!(
        "Вводные: position={} grade={} exp={}\n\
         Текущая сложность={}\n\
         Сформулируй ОДИН вопрос для интервью.\n\
         Тема: {}; сложность ~{}.\n\
         Не повторяй недавно заданные темы: {:?}.\n",
        profile.position,
        profile.target_grade,
        profile.experience,
        difficulty,
        question.topic,
        question.difficulty,
        recent_topics,
    );

    let messages = [
        ChatMessage::system(REWORD_SYSTEM),
        ChatMessage::user(user_prompt),
    ];

    match llm.generate(&messages, REWORD_TEMPERATURE).await {
        Ok(text) if is_acceptable(&text) => text.trim().to_string(),
        Ok(text) => {
            tracing::warn!(
                question_id = question.id,
                rejected_len = text.trim().chars().count(),
                "rejected reworded question, keeping bank phrasing"
            );
            question.prompt.to_string()
        }
        Err(e) => {
            tracing::warn!(question_id = question.id, error = %e, "reword failed, keeping bank phrasing");
            question.prompt.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::find_question;
    use crate::core::error::{CoachError, Result};
    use crate::core::types::Grade;
    use async_trait::async_trait;

    struct CannedLlm(Option<String>);

    #[async_trait]
    impl LanguageModel for CannedLlm {
        async fn generate(&self, _: &[ChatMessage], _: f32) -> Result<String> {
            self.0
                .clone()
                .ok_or_else(|| CoachError::Llm("canned failure".into()))
        }
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            participant_name: "Алекс".into(),
            position: "Backend Developer".into(),
            target_grade: Grade::Junior,
            experience: "Пет-проекты на Django".into(),
        }
    }

    #[tokio::test]
    async fn test_acceptable_rewrite_is_used() {
        let q = find_question("sql_join_1").unwrap();
        let llm = CannedLlm(Some("Чем INNER JOIN отличается от LEFT JOIN?".into()));
        let text = reword_question(&llm, &profile(), 1, q, &[]).await;
        assert_eq!(text, "Чем INNER JOIN отличается от LEFT JOIN?");
    }

    #[tokio::test]
    async fn test_rewrite_without_question_mark_rejected() {
        let q = find_question("sql_join_1").unwrap();
        let llm = CannedLlm(Some("Расскажи про джоины, это очень интересная тема".into()));
        let text = reword_question(&llm, &profile(), 1, q, &[]).await;
        assert_eq!(text, q.prompt);
    }

    #[tokio::test]
    async fn test_too_short_rewrite_rejected() {
        let q = find_question("sql_join_1").unwrap();
        let llm = CannedLlm(Some("JOIN?".into()));
        let text = reword_question(&llm, &profile(), 1, q, &[]).await;
        assert_eq!(text, q.prompt);
    }

    #[tokio::test]
    async fn test_too_long_rewrite_rejected() {
        let q = find_question("sql_join_1").unwrap();
        let long = format!("{}?", "очень длинный вопрос ".repeat(30));
        let llm = CannedLlm(Some(long));
        let text = reword_question(&llm, &profile(), 1, q, &[]).await;
        assert_eq!(text, q.prompt);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_bank_phrasing() {
        let q = find_question("sql_join_1").unwrap();
        let llm = CannedLlm(None);
        let text = reword_question(&llm, &profile(), 1, q, &[]).await;
        assert_eq!(text, q.prompt);
    }
}
