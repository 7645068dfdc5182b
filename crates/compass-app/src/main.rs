use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use serde::Serialize;

use compass_app::commands::{self, RawAnswers};
use compass_app::config;
use compass_app::state::AppState;

/// Values Compass: answer a questionnaire, see which values rank highest.
#[derive(Debug, Parser)]
#[command(name = "compass", version)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available assessment frameworks.
    Frameworks,
    /// List questions, optionally of a single category.
    Questions {
        #[arg(long)]
        category: Option<String>,
    },
    /// Score a set of answers and save the assessment.
    Assess {
        #[arg(long, default_value = "personal")]
        framework: String,
        /// JSON object mapping question id to the raw answer.
        #[arg(long)]
        answers: PathBuf,
    },
    /// Show the most recent assessment and its share text.
    Results,
    /// List completed and in-progress assessments.
    History,
    /// Summaries of the newest assessments.
    Recent {
        #[arg(long, default_value_t = compass_storage::assessments::DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
    /// Delete an assessment by id.
    Delete { id: u32 },
    /// Write the latest report and the full history as JSON files.
    Export {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Show the highest-scoring entries of the value catalog.
    TopValues {
        #[arg(long, default_value_t = compass_storage::values::DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    let state = AppState::load(config).await?;

    match cli.command {
        Command::Frameworks => print_json(&commands::list_frameworks())?,
        Command::Questions { category } => {
            print_json(&commands::list_questions(&state, category.as_deref()).await?)?
        }
        Command::Assess { framework, answers } => {
            let contents = tokio::fs::read_to_string(&answers)
                .await
                .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", answers.display()))?;
            let raw: RawAnswers = serde_json::from_str(&contents)?;
            let assessment = commands::run_assessment(&state, &framework, &raw).await?;
            if let Some(fw) = compass_scoring::get_framework(&framework) {
                println!("{}", fw.describe_results(&assessment.results));
            }
        }
        Command::Results => {
            let latest = commands::latest_results(&state).await?;
            print_json(&latest.results)?;
            println!("\n{}", commands::share_latest(&state).await?);
        }
        Command::History => print_json(&commands::history(&state).await)?,
        Command::Recent { limit } => print_json(&commands::recent(&state, limit).await)?,
        Command::Delete { id } => {
            let deleted = commands::delete_assessment(&state, id).await?;
            println!("deleted assessment {} ({})", deleted.id, deleted.framework);
        }
        Command::Export { out } => {
            let history = commands::export_history(&state, &out).await?;
            println!("{}", history.display());
            match commands::export_latest_report(&state, &out).await {
                Ok(report) => println!("{}", report.display()),
                Err(compass_app::error::AppError::NotFound(_)) => {
                    tracing::info!("no assessments yet, skipping report");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::TopValues { limit } => print_json(&commands::top_values(&state, limit).await)?,
    }

    Ok(())
}
