//! Interview Coach - Entry Point
//!
//! Interactive interview loop over stdin/stdout: collect the candidate
//! profile, then alternate interviewer questions and candidate replies
//! until a stop phrase ends the session with the final feedback.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::runtime::Runtime;

use interview_coach::core::error::Result;
use interview_coach::core::types::Grade;
use interview_coach::llm::build_llm;
use interview_coach::orchestrator::{SessionOrchestrator, TurnOutcome};
use interview_coach::session::{CandidateProfile, InterviewLogger};

#[derive(Parser, Debug)]
#[command(name = "interview-coach")]
#[command(about = "Turn-based technical interview simulator")]
struct Args {
    /// Where the session log is written
    #[arg(long, default_value = "interview_log.json")]
    log_path: String,

    /// Fix the question-selection seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "interview_coach=info".into()),
        )
        .init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    println!("=== Interview Coach ===");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let participant_name = prompt(&mut lines, "Имя кандидата: ", "Без имени")?;
    let position = prompt(&mut lines, "Позиция: ", "Backend Developer")?;
    let target_grade: Grade = loop {
        let raw = prompt(&mut lines, "Грейд (Junior/Middle/Senior): ", "Junior")?;
        match raw.parse() {
            Ok(grade) => break grade,
            Err(e) => println!("{e}"),
        }
    };
    let experience = prompt(&mut lines, "Опыт (кратко): ", "Нет данных")?;

    let profile = CandidateProfile {
        participant_name,
        position,
        target_grade,
        experience,
    };

    let logger = InterviewLogger::new(&args.log_path);
    let llm = build_llm();
    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut orchestrator = SessionOrchestrator::new(logger, llm, rng);
    let mut interviewer_msg = orchestrator.start(&profile)?;
    println!("\nInterviewer: {interviewer_msg}");

    loop {
        print!("\nТы: ");
        io::stdout().flush()?;
        let user_msg = match lines.next() {
            Some(line) => line?.trim().to_string(),
            None => break,
        };
        if user_msg.is_empty() {
            continue;
        }

        match rt.block_on(orchestrator.handle_message(&profile, &interviewer_msg, &user_msg))? {
            TurnOutcome::Reply(next_msg) => {
                interviewer_msg = next_msg;
                println!("\nInterviewer: {interviewer_msg}");
            }
            TurnOutcome::Finished(feedback) => {
                println!(
                    "\nInterviewer: Спасибо! Интервью остановлено. Финальный фидбэк сохранён в {}",
                    args.log_path
                );
                println!("\n=== FINAL FEEDBACK (json) ===");
                println!("{}", serde_json::to_string_pretty(&feedback)?);
                break;
            }
        }
    }

    Ok(())
}

fn prompt(
    lines: &mut std::io::Lines<io::StdinLock<'_>>,
    label: &str,
    default: &str,
) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let value = match lines.next() {
        Some(line) => line?.trim().to_string(),
        None => String::new(),
    };
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value
    })
}
