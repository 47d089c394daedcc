mod config;
mod dataset;
mod error;
mod models;
mod pipeline;
mod services;

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;

use config::AppConfig;
use models::BatchStatus;
use pipeline::{AdvicePipeline, FixedBackoff};
use services::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    log::info!("🚀 Starting NutriMind batch advice run...");

    let config = AppConfig::from_env()?;
    log::info!("✅ API key loaded");

    let records = dataset::load_records(&config.dataset_path)?;
    log::info!(
        "✅ Dataset loaded: {} records from {}",
        records.len(),
        config.dataset_path.display()
    );

    let model = Arc::new(GeminiClient::new(config.api_key.clone(), config.model.clone()));
    log::info!("✅ Gemini client initialized with model: {}", config.model);

    let policy = Arc::new(FixedBackoff::new(config.max_attempts, config.retry_delay));
    let pipeline = AdvicePipeline::new(model, policy, config.batch_size, config.cooldown);

    let report = pipeline.run(&records).await;

    dataset::write_results(&config.output_path, &report.results)?;

    let succeeded = report
        .batches
        .iter()
        .filter(|b| matches!(b.status, BatchStatus::Succeeded { .. }))
        .count();
    let exhausted = report.batches.len() - succeeded;

    log::info!("🎉 All batches processed!");

    println!(
        "\n📊 Run finished in {}s",
        (report.finished_at - report.started_at).num_seconds()
    );
    println!("   Batches: {} succeeded, {} exhausted", succeeded, exhausted);
    println!("   Advice entries: {}", report.results.len());
    println!("   Results written to {}", config.output_path.display());
    for batch in &report.batches {
        if let BatchStatus::Exhausted { attempts, last_error } = &batch.status {
            println!(
                "   ⚠️ Batch #{} (rows {}–{}) dropped after {} attempts: {}",
                batch.index, batch.start, batch.end, attempts, last_error
            );
        }
    }

    Ok(())
}
