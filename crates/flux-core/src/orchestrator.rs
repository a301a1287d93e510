use tracing::{info, instrument};

use flux_model::{DemoKind, DemoReport};

use crate::{
    demo::{DemoContext, event_stream, pipeline, sequential},
    error::CoreError,
    source::RandomSource,
};

/// Runs the demos one after another, each to full completion before the next starts.
pub struct Orchestrator {
    ctx: DemoContext,
}

impl Orchestrator {
    pub fn new(ctx: DemoContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &DemoContext {
        &self.ctx
    }

    /// Event stream, then pipeline, then sequential.
    pub async fn run_all(&self) -> Result<Vec<DemoReport>, CoreError> {
        self.ctx.config.validate()?;

        let mut reports = Vec::with_capacity(DemoKind::ALL.len());
        for demo in DemoKind::ALL {
            reports.push(self.run(demo).await?);
        }

        info!(demos = reports.len(), "all demos completed");
        Ok(reports)
    }

    /// Run a single demo with a freshly built random source.
    #[instrument(level = "debug", skip(self))]
    pub async fn run(&self, demo: DemoKind) -> Result<DemoReport, CoreError> {
        let source = RandomSource::for_demo(&self.ctx.config, demo);
        match demo {
            DemoKind::EventStream => event_stream::run(&self.ctx, source).await,
            DemoKind::Pipeline => pipeline::run(&self.ctx, source).await,
            DemoKind::Sequential => sequential::run(&self.ctx, source).await,
        }
    }
}
