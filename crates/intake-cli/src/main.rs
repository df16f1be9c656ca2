use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use intake_cli::{Session, SessionOptions, SnapshotFormat};
use intake_core::{
    config::{discipline_from_env_value, gender_policy_from_env_value},
    constants::{DISCIPLINE_ENV_VAR, GENDER_POLICY_ENV_VAR},
    GenderPolicy, PatientQueue, QueueConfig, QueueResult,
};

const DEFAULT_LOG_DIRECTIVE: &str = "intake=info";

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Front-desk patient intake queue")]
struct Cli {
    /// Starting discipline: fifo or alternating (overrides INTAKE_DISCIPLINE)
    #[arg(long)]
    discipline: Option<String>,
    /// Refuse patients whose gender is neither M nor F (overrides INTAKE_GENDER_POLICY)
    #[arg(long)]
    strict_gender: bool,
    /// Do not print the prompt before each command
    #[arg(long)]
    no_prompt: bool,
    /// Print queue snapshots as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Flags win over environment values.
    fn queue_config(
        &self,
        env_discipline: Option<String>,
        env_gender_policy: Option<String>,
    ) -> QueueResult<QueueConfig> {
        let discipline = discipline_from_env_value(self.discipline.clone().or(env_discipline))?;
        let gender_policy = if self.strict_gender {
            GenderPolicy::Reject
        } else {
            gender_policy_from_env_value(env_gender_policy)?
        };
        Ok(QueueConfig::new(discipline, gender_policy))
    }

    fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prompt: !self.no_prompt,
            format: if self.json {
                SnapshotFormat::Json
            } else {
                SnapshotFormat::Text
            },
        }
    }
}

/// Builds the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVE`] only
/// when it is unset or blank.
fn log_filter(rust_log: Option<String>) -> anyhow::Result<EnvFilter> {
    match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(directives) => Ok(EnvFilter::try_new(directives)?),
        None => Ok(EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    }
}

/// Runs the desk loop on stdin/stdout.
///
/// Configuration is resolved once here and the queue is built and handed to the session.
/// Diagnostics go to stderr so stdout carries only desk feedback.
///
/// # Environment Variables
/// - `INTAKE_DISCIPLINE`: starting discipline (default: fifo)
/// - `INTAKE_GENDER_POLICY`: `drop` or `reject` (default: drop)
/// - `RUST_LOG`: tracing filter (default directive: `intake=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok())?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = cli.queue_config(
        std::env::var(DISCIPLINE_ENV_VAR).ok(),
        std::env::var(GENDER_POLICY_ENV_VAR).ok(),
    )?;

    tracing::info!(
        discipline = %cfg.discipline(),
        gender_policy = ?cfg.gender_policy(),
        "++ Starting intake desk"
    );

    let mut queue = PatientQueue::with_config(&cfg);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&mut queue, stdout.lock(), cli.session_options()).run(stdin.lock())?;

    tracing::info!(waiting = queue.len(), "intake desk closed");
    Ok(())
}
