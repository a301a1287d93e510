//! No concurrency: generate the whole sequence, then filter it in order.

use tracing::{info, instrument};

use flux_model::{ConsumerReport, DemoKind, DemoReport, Value};
use flux_observe::ConsoleEvent;

use crate::{demo::DemoContext, error::CoreError, source::ValueSource, task::process};

const DEMO: DemoKind = DemoKind::Sequential;

#[instrument(level = "info", skip_all, fields(demo = %DEMO))]
pub async fn run<S: ValueSource>(
    ctx: &DemoContext,
    mut source: S,
) -> Result<DemoReport, CoreError> {
    ctx.console.emit(ConsoleEvent::Banner(DEMO));

    let produced: Vec<Value> = (0..ctx.config.count)
        .map(|_| {
            let value = source.next_value();
            ctx.console.emit(ConsoleEvent::Produced(value));
            value
        })
        .collect();

    ctx.console.emit(ConsoleEvent::Note("Processing numbers:"));

    let mut pass = ConsumerReport::new(0);
    for &value in &produced {
        pass.received.push(value);
        if value.is_even() {
            process(ctx, None, value).await;
            pass.processed.push(value);
        }
    }

    info!(
        produced = produced.len(),
        processed = pass.processed.len(),
        "sequence processed"
    );
    ctx.console.emit(ConsoleEvent::Finished(DEMO));

    Ok(DemoReport {
        demo: DEMO,
        produced,
        consumers: vec![pass],
    })
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{
        clock::TokioClock,
        source::FixedSource,
        testing::{RecordingConsole, SCENARIO, quiet_ctx, values},
    };
    use flux_model::DemoConfig;
    use tokio::time::Instant;

    #[tokio::test]
    async fn all_produced_before_any_processed() {
        let (ctx, console) = quiet_ctx(DemoConfig::default());
        let report = run(&ctx, FixedSource::new(SCENARIO)).await.unwrap();

        assert_eq!(report.consumers[0].received, values(&SCENARIO));
        assert_eq!(report.consumers[0].processed, values(&[8, 42, 100, 12, 64]));

        let events = console.events();
        let note = events
            .iter()
            .position(|e| *e == ConsoleEvent::Note("Processing numbers:"))
            .unwrap();
        let last_produced = events
            .iter()
            .rposition(|e| matches!(e, ConsoleEvent::Produced(_)))
            .unwrap();
        let first_processed = events
            .iter()
            .position(|e| matches!(e, ConsoleEvent::Processed { .. }))
            .unwrap();
        assert!(last_produced < note && note < first_processed);
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_only_for_even_values() {
        let console = Arc::new(RecordingConsole::default());
        let ctx = DemoContext::new(
            DemoConfig::default().with_count(4),
            Arc::new(TokioClock),
            console,
        );

        let start = Instant::now();
        let report = run(&ctx, FixedSource::new(SCENARIO)).await.unwrap();

        assert_eq!(report.consumers[0].processed, values(&[8, 42]));
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }
}
