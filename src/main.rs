use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use jobplanner::api::{HttpJobPlanApi, JobPlanApi};
use jobplanner::app::App;
use jobplanner::config::Config;
use jobplanner::logging;
use jobplanner::model::{Activity, ActivityCategory, DraftSummary, JobPlanDraft};

#[derive(Parser)]
#[command(name = "jobplanner")]
#[command(about = "Job planning dashboard for hospital clinicians")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a job-plan draft from a JSON file
    Submit {
        /// Path to the draft JSON
        file: PathBuf,
    },

    /// Post one sample activity to the endpoint (demo affordance)
    SampleActivity,

    /// Print the derived summary of a draft JSON file
    Summary {
        /// Path to the draft JSON
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Submit { file }) => {
            cmd_submit(&config, &file).await?;
        }
        Some(Commands::SampleActivity) => {
            cmd_sample_activity(&config).await?;
        }
        Some(Commands::Summary { file }) => {
            cmd_summary(&file)?;
        }
        None => {
            // No subcommand = launch TUI dashboard
            run_tui(config, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(config)?;
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if log_path.exists() {
            if let Ok(metadata) = log_path.metadata() {
                if metadata.len() > 0 {
                    eprintln!("Session log: {}", log_path.display());
                }
            }
        }
    }

    result
}

fn load_draft(file: &PathBuf) -> Result<JobPlanDraft> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&text).context("Failed to parse job plan draft")
}

async fn cmd_submit(config: &Config, file: &PathBuf) -> Result<()> {
    let draft = load_draft(file)?;
    let api = HttpJobPlanApi::new(config.api.base_url.clone(), config.api.timeout())?;

    match api.create_job_plan(&draft).await {
        Ok(receipt) => {
            match receipt.id {
                Some(id) => println!("Job plan created: {id}"),
                None => println!("Job plan created"),
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("Submission failed: {err}");
            eprintln!("The draft file is untouched; fix the problem and retry.");
            std::process::exit(1);
        }
    }
}

async fn cmd_sample_activity(config: &Config) -> Result<()> {
    let mut activity = Activity::new("Outpatient clinic", ActivityCategory::Dcc);
    activity.duration = "3 hours".to_string();
    activity.frequency = "Weekly".to_string();
    activity.location = "Clinic Room 3A".to_string();

    let api = HttpJobPlanApi::new(config.api.base_url.clone(), config.api.timeout())?;

    match api.create_activity(&activity).await {
        Ok(_) => {
            println!("Sample activity created: {}", activity.title);
            Ok(())
        }
        Err(err) => {
            eprintln!("Sample activity failed: {err}");
            std::process::exit(1);
        }
    }
}

fn cmd_summary(file: &PathBuf) -> Result<()> {
    let draft = load_draft(file)?;
    let summary = DraftSummary::of(&draft);

    let title = if draft.title.is_empty() {
        "(untitled)"
    } else {
        &draft.title
    };
    println!("Job Plan: {title}");
    println!("{}", "─".repeat(40));
    println!("Objectives:  {}", summary.objectives);
    println!("Resources:   {}", summary.resources);
    println!("Activities:  {}", summary.activities);
    println!();
    println!("By category:");
    for (category, count) in summary.category_counts() {
        println!("  {:<9} {}", category.label(), count);
    }

    Ok(())
}
