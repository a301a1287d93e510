//! One producer, several consumers racing on a shared queue.
//!
//! All tasks hold a [`CompletionToken`](crate::barrier::CompletionToken) for their whole
//! lifetime; the demo returns only after the barrier sized to `consumers + 1` is released.

use tracing::{debug, info, instrument};

use flux_model::{DemoKind, DemoReport, Value};
use flux_observe::ConsoleEvent;

use crate::{
    barrier::CompletionBarrier,
    demo::DemoContext,
    error::CoreError,
    queue::queue,
    source::ValueSource,
    task::{consume, produce},
};

const DEMO: DemoKind = DemoKind::Pipeline;

#[instrument(level = "info", skip_all, fields(demo = %DEMO, consumers = ctx.config.consumers))]
pub async fn run<S: ValueSource>(ctx: &DemoContext, source: S) -> Result<DemoReport, CoreError> {
    ctx.config.validate()?;
    let consumers = ctx.config.consumers;

    ctx.console.emit(ConsoleEvent::Banner(DEMO));

    let barrier = CompletionBarrier::new(consumers + 1);
    let (tx, rx) = queue::<Value>();

    let producer = {
        let done = barrier.token()?;
        let ctx = ctx.clone();
        tokio::spawn(async move {
            let _done = done;
            produce(ctx, source, tx).await
        })
    };

    let mut workers = Vec::with_capacity(consumers);
    for id in 0..consumers {
        let done = barrier.token()?;
        let ctx = ctx.clone();
        let rx = rx.clone();
        workers.push(tokio::spawn(async move {
            let _done = done;
            consume(ctx, id, rx).await
        }));
    }
    drop(rx);

    barrier.wait().await;
    debug!(releases = barrier.releases(), "all pipeline tasks finished");

    let produced = producer.await??;
    let mut reports = Vec::with_capacity(consumers);
    for worker in workers {
        reports.push(worker.await?);
    }

    info!(
        produced = produced.len(),
        processed = reports.iter().map(|r| r.processed.len()).sum::<usize>(),
        "pipeline drained"
    );
    ctx.console.emit(ConsoleEvent::Finished(DEMO));

    Ok(DemoReport {
        demo: DEMO,
        produced,
        consumers: reports,
    })
}
