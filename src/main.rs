use anyhow::Context;
use chrono::Local;
use log::info;
use newtricks::{Pipeline, PipelineConfig};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig {
        show_progress: true,
        ..PipelineConfig::default()
    };
    info!("{config}");

    let start = Instant::now();
    let pipeline = Pipeline::new(config);
    let output = pipeline
        .run(Local::now().naive_local())
        .context("registrant report failed")?;

    print!("{}", output.summary());
    info!(
        "Wrote {} enriched rows to {} and {} gold rows to {} in {:?}",
        output.enriched.len(),
        pipeline.config().enriched_output.display(),
        output.gold.len(),
        pipeline.config().gold_output.display(),
        start.elapsed()
    );

    Ok(())
}
