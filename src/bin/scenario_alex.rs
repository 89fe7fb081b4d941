//! Scripted demo session
//!
//! Runs a fixed five-message interview (greeting, a correct SQL answer, a
//! hallucination trap, a role reversal, stop) with rewording disabled and a
//! fixed seed, so the output is stable from run to run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::runtime::Runtime;

use interview_coach::core::error::Result;
use interview_coach::core::types::Grade;
use interview_coach::llm::DisabledLlm;
use interview_coach::orchestrator::{SessionOrchestrator, TurnOutcome};
use interview_coach::session::{CandidateProfile, InterviewLogger};

const SCRIPTED_ANSWERS: &[&str] = &[
    "Привет. Я Алекс, претендую на позицию Junior Backend Developer. Знаю Python, SQL и Git.",
    "INNER JOIN возвращает только совпавшие строки. LEFT JOIN — все строки слева плюс совпадения справа, иначе NULL. \
     LEFT JOIN нужен, например, чтобы получить всех пользователей, включая тех у кого нет заказов.",
    "Честно говоря, я читал на Хабре, что в Python 4.0 циклы for уберут и заменят на нейронные связи, поэтому я их не учу.",
    "Слушайте, а какие задачи вообще будут на испытательном сроке? Вы используете микросервисы?",
    "Стоп игра. Давай фидбэк.",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("interview_coach=debug")
        .init();

    let rt = Runtime::new()?;

    let profile = CandidateProfile {
        participant_name: "Алекс".into(),
        position: "Backend Developer".into(),
        target_grade: Grade::Junior,
        experience: "Пет-проекты на Django, немного SQL.".into(),
    };

    let log_path =
        std::env::var("LOG_PATH").unwrap_or_else(|_| "example_alex_interview_log.json".into());
    let logger = InterviewLogger::new(&log_path);

    // no LLM and a fixed seed: the run is fully deterministic
    let mut orchestrator = SessionOrchestrator::new(
        logger,
        Box::new(DisabledLlm),
        ChaCha8Rng::seed_from_u64(2024),
    );

    let mut interviewer_msg = orchestrator.start(&profile)?;
    println!("Interviewer: {interviewer_msg}\n");

    for answer in SCRIPTED_ANSWERS {
        println!("Алекс: {answer}\n");
        match rt.block_on(orchestrator.handle_message(&profile, &interviewer_msg, answer))? {
            TurnOutcome::Reply(next) => {
                interviewer_msg = next;
                println!("Interviewer: {interviewer_msg}\n");
            }
            TurnOutcome::Finished(feedback) => {
                println!("=== FINAL FEEDBACK ===");
                println!("{}", serde_json::to_string_pretty(&feedback)?);
                break;
            }
        }
    }

    println!("Saved: {log_path}");
    Ok(())
}
