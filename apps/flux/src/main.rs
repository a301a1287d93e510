use tracing::info;

use flux_core::{DemoContext, Orchestrator};
use flux_model::DemoConfig;
use flux_observe::{LoggerConfig, logger_init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger (stderr; stdout carries the demo trace)
    logger_init(&LoggerConfig::default())?;
    info!("logger initialized");

    // 2) Demos, strictly one after another
    let ctx = DemoContext::realtime(DemoConfig::default());
    let reports = Orchestrator::new(ctx).run_all().await?;

    for report in &reports {
        info!(
            demo = %report.demo,
            produced = report.produced.len(),
            processed = report.processed_total(),
            "demo summary"
        );
    }
    Ok(())
}
