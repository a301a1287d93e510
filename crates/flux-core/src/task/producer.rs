use flux_model::Value;
use flux_observe::ConsoleEvent;
use tracing::{debug, instrument, trace, warn};

use crate::{
    demo::DemoContext,
    error::CoreError,
    queue::{SendError, Sender},
    source::ValueSource,
};

/// Emit `config.count` values into `tx`, pausing after each one, then close the queue.
///
/// Returns the values in emission order. Each `send` waits for a consumer to take the
/// value. If every consumer goes away first the producer stops with
/// [`CoreError::QueueClosed`]; dropping `tx` still closes the queue on that path.
#[instrument(level = "debug", skip_all, fields(count = ctx.config.count))]
pub async fn produce<S: ValueSource>(
    ctx: DemoContext,
    mut source: S,
    mut tx: Sender<Value>,
) -> Result<Vec<Value>, CoreError> {
    let count = ctx.config.count;
    let mut produced = Vec::with_capacity(count);

    for seq in 0..count {
        let value = source.next_value();
        ctx.console.emit(ConsoleEvent::Produced(value));

        if let Err(SendError(value)) = tx.send(value).await {
            warn!(seq, %value, "no consumer left to take value");
            return Err(CoreError::QueueClosed);
        }
        trace!(seq, %value, "value handed off");
        produced.push(value);

        ctx.clock.sleep(ctx.config.emit_interval()).await;
    }

    tx.close();
    debug!(produced = produced.len(), "producer done, queue closed");
    Ok(produced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        queue::queue,
        source::FixedSource,
        testing::{SCENARIO, quiet_ctx, values},
    };
    use flux_model::DemoConfig;

    #[tokio::test]
    async fn emits_count_values_then_closes() {
        let (ctx, console) = quiet_ctx(DemoConfig::default().with_count(4));
        let (tx, rx) = queue();
        let producer = tokio::spawn(produce(ctx, FixedSource::new(SCENARIO), tx));

        let mut got = Vec::new();
        while let Some(v) = rx.recv().await {
            got.push(v);
        }

        let produced = producer.await.unwrap().unwrap();
        assert_eq!(produced, values(&[3, 8, 15, 42]));
        assert_eq!(got, produced);
        assert_eq!(console.produced(), produced);
        assert!(rx.is_closed());
    }

    #[tokio::test]
    async fn stops_when_consumers_are_gone() {
        let (ctx, _console) = quiet_ctx(DemoConfig::default());
        let (tx, rx) = queue();
        drop(rx);

        let err = produce(ctx, FixedSource::new(SCENARIO), tx)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::QueueClosed));
    }

    #[tokio::test]
    async fn zero_count_only_closes() {
        let (ctx, console) = quiet_ctx(DemoConfig::default().with_count(0));
        let (tx, rx) = queue();

        let produced = produce(ctx, FixedSource::new(SCENARIO), tx).await.unwrap();
        assert!(produced.is_empty());
        assert!(console.events().is_empty());
        assert_eq!(rx.recv().await, None);
    }
}
