use flux_model::{ConsumerId, ConsumerReport, Value};
use flux_observe::ConsoleEvent;
use tracing::{debug, instrument, trace};

use crate::{demo::DemoContext, queue::Receiver};

/// Drain `rx` until it is closed, processing every even value.
#[instrument(level = "debug", skip(ctx, rx))]
pub async fn consume(ctx: DemoContext, id: ConsumerId, rx: Receiver<Value>) -> ConsumerReport {
    let mut report = ConsumerReport::new(id);

    while let Some(value) = rx.recv().await {
        report.received.push(value);
        if value.is_even() {
            process(&ctx, Some(id), value).await;
            report.processed.push(value);
        } else {
            trace!(%value, "filtered out");
        }
    }

    debug!(
        received = report.received.len(),
        processed = report.processed.len(),
        "consumer drained queue"
    );
    report
}

/// Simulated work for a value that passed the filter.
pub async fn process(ctx: &DemoContext, consumer: Option<ConsumerId>, value: Value) {
    ctx.console.emit(ConsoleEvent::Processed { consumer, value });
    ctx.clock.sleep(ctx.config.process_interval()).await;
}
