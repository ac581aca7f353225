use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::batch::BatchRunner;
use matcher::config::Config;

/// Score résumés against a job description and report matched and missing keywords.
#[derive(Debug, Parser)]
#[command(version, about)]
#[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_file"])))]
struct Cli {
    /// Job description text
    #[arg(long)]
    job: Option<String>,

    /// File containing the job description
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Résumé files (.pdf or .txt)
    #[arg(required = true)]
    resumes: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the JSON reports
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let job_description = match (cli.job, cli.job_file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read job description from {}", path.display()))?,
        (None, None) => anyhow::bail!("either --job or --job-file is required"),
    };

    info!(
        "Vocabulary cap {} terms, {} keywords per document",
        config.matching.max_features, config.matching.keyword_top_n
    );

    let runner = BatchRunner::new(config.matching.clone(), config.max_document_bytes);
    let reports = runner.run(&cli.resumes, &job_description).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{output}");

    Ok(())
}
