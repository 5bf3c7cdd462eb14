//! Thin CLI host for the lifepath analysis engine.
//!
//! The engine only ever sees an in-memory answer set; this binary owns the
//! durable copy (a JSON file in the platform data dir) and the export
//! document, the way the original questionnaire UI owned local storage.
//!
//! Usage:
//!   lifepath init
//!   lifepath analyze
//!   lifepath matrix
//!   lifepath export [--output lifepath-2026-08-28.json]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifepath::export::{self, ExportBundle};
use lifepath::{AnswerSet, Config, Engine};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "lifepath")]
#[command(about = "Self-reflection questionnaire analysis", long_about = None)]
struct Cli {
    /// Answer-set file; defaults to <data dir>/lifepath/answers.json
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty answer-set file
    Init,
    /// Run the analysis and print the result; updates the stored direction
    /// candidates
    Analyze,
    /// Recompute the weighted decision matrix and print the ranking
    Matrix,
    /// Write the {answers, analysis} bundle to a JSON document
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifepath=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let data_path = match cli.data {
        Some(path) => path,
        None => default_data_path()?,
    };
    let engine = Engine::new(Config::load()?)?;

    match cli.command {
        Commands::Init => init(&data_path),
        Commands::Analyze => analyze(&engine, &data_path),
        Commands::Matrix => matrix(&engine, &data_path),
        Commands::Export { output } => export_bundle(&engine, &data_path, output),
    }
}

fn default_data_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("could not resolve a platform data directory")?;
    Ok(base.join("lifepath").join("answers.json"))
}

fn load_answers(path: &Path) -> Result<AnswerSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading answer set from {}", path.display()))?;
    Ok(serde_json::from_str(&raw)?)
}

fn save_answers(path: &Path, answers: &AnswerSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(answers)?)?;
    Ok(())
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing {}", path.display());
    }
    save_answers(path, &AnswerSet::default())?;
    info!(path = %path.display(), "created empty answer set");
    Ok(())
}

fn analyze(engine: &Engine, path: &Path) -> Result<()> {
    let mut answers = load_answers(path)?;
    let analysis = engine.run_analysis(&mut answers);
    // Persist the side effect: the refreshed direction candidates
    save_answers(path, &answers)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn matrix(engine: &Engine, path: &Path) -> Result<()> {
    let mut answers = load_answers(path)?;
    let ranked = engine.rescore_matrix(&mut answers);
    save_answers(path, &answers)?;
    if ranked.is_empty() {
        info!("no candidate directions yet; run `lifepath analyze` first");
    }
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

fn export_bundle(engine: &Engine, path: &Path, output: Option<PathBuf>) -> Result<()> {
    let mut answers = load_answers(path)?;
    // The analysis is deterministic, so recomputing here reproduces exactly
    // what `analyze` last showed for these answers
    let analysis = engine.run_analysis(&mut answers);
    save_answers(path, &answers)?;

    // UTC date, matching the ISO-timestamp naming the exports have always used
    let out_path = output.unwrap_or_else(|| {
        PathBuf::from(export::default_filename(chrono::Utc::now().date_naive()))
    });
    ExportBundle::new(answers, analysis).write_to(&out_path)?;
    info!(path = %out_path.display(), "wrote export bundle");
    Ok(())
}
