//! One producer, one consumer reading the queue as a reactive stream.

use futures::{StreamExt, future};
use tracing::{info, instrument};

use flux_model::{ConsumerReport, DemoKind, DemoReport, Value};
use flux_observe::ConsoleEvent;

use crate::{
    demo::DemoContext,
    error::CoreError,
    queue::queue,
    source::ValueSource,
    task::{process, produce},
};

const DEMO: DemoKind = DemoKind::EventStream;

#[instrument(level = "info", skip_all, fields(demo = %DEMO))]
pub async fn run<S: ValueSource>(ctx: &DemoContext, source: S) -> Result<DemoReport, CoreError> {
    ctx.console.emit(ConsoleEvent::Banner(DEMO));

    let (tx, rx) = queue::<Value>();
    let producer = tokio::spawn(produce(ctx.clone(), source, tx));

    let mut consumer = ConsumerReport::new(0);
    consumer.processed = rx
        .into_stream()
        .inspect(|value| consumer.received.push(*value))
        .filter(|value| future::ready(value.is_even()))
        .then(|value| {
            let ctx = ctx.clone();
            async move {
                process(&ctx, None, value).await;
                value
            }
        })
        .collect()
        .await;

    let produced = producer.await??;

    info!(
        produced = produced.len(),
        processed = consumer.processed.len(),
        "event stream drained"
    );
    ctx.console.emit(ConsoleEvent::Finished(DEMO));

    Ok(DemoReport {
        demo: DEMO,
        produced,
        consumers: vec![consumer],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        source::{FixedSource, RandomSource},
        testing::{SCENARIO, quiet_ctx, values},
    };
    use flux_model::DemoConfig;

    #[tokio::test]
    async fn consumer_sees_generation_order() {
        let (ctx, console) = quiet_ctx(DemoConfig::default());
        let report = run(&ctx, FixedSource::new(SCENARIO)).await.unwrap();

        assert_eq!(report.produced, values(&SCENARIO));
        assert_eq!(report.consumers.len(), 1);
        assert_eq!(report.consumers[0].received, report.produced);
        assert_eq!(report.consumers[0].processed, values(&[8, 42, 100, 12, 64]));
        assert_eq!(console.processed(), values(&[8, 42, 100, 12, 64]));
    }

    #[tokio::test]
    async fn banner_first_completion_last() {
        let (ctx, console) = quiet_ctx(DemoConfig::default().with_seed(11));
        let report = run(&ctx, RandomSource::seeded(11, 100)).await.unwrap();

        let events = console.events();
        assert_eq!(events.first(), Some(&ConsoleEvent::Banner(DemoKind::EventStream)));
        assert_eq!(events.last(), Some(&ConsoleEvent::Finished(DemoKind::EventStream)));
        assert_eq!(report.processed_total(), report.expected_processed().len());
        assert_eq!(console.produced(), report.produced);
    }
}
