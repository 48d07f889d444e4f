mod config;
mod error;
mod model;
mod parser;
mod report;
mod scoring;
mod writer;

use std::sync::Arc;

use clap::Parser;
use fuzzy_core::{rank, top, Engine, RuleBank};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Cli, Config};
use error::AppError;
use model::RankingReport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_cli(Cli::parse())?;
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        top = config.top_n,
        workers = config.workers,
        "configuration loaded"
    );

    let bank = load_rule_bank(&config)?;
    info!(
        name = bank.name(),
        rules = bank.len(),
        fingerprint = %bank.fingerprint(),
        "rule bank loaded"
    );
    let engine = Arc::new(Engine::new(bank));

    let candidates = parser::read_candidates(&config.input_path, config.input_format)?;
    let total = candidates.len();
    info!(candidates = total, "candidates loaded");

    let scored = scoring::score_concurrently(Arc::clone(&engine), candidates, config.workers).await?;
    let ranked = rank(scored);
    let best = top(&ranked, config.top_n);

    writer::write_ranking(&config.output_path, config.output_format, best)?;

    if let Some(json_path) = &config.json_path {
        writer::write_json(json_path, &RankingReport::new(engine.bank(), total, best))?;
    }

    for record in top(best, config.trace_n) {
        println!("{}", report::render_trace(record, engine.bank()));
    }
    println!("Top {} restaurants by fuzzy desirability:", best.len());
    print!("{}", report::render_table(best));

    info!(ranked = best.len(), "done");
    Ok(())
}

fn load_rule_bank(config: &Config) -> Result<RuleBank, AppError> {
    let Some(path) = &config.rules_path else {
        return Ok(RuleBank::standard());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("failed to read {}: {e}", path.display())))?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "custom".to_string());
    Ok(RuleBank::parse(name, &content)?)
}
