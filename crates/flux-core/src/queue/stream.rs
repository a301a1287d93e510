use futures::stream::{self, Stream};

use super::Receiver;

impl<T> Receiver<T> {
    /// Read end as a [`Stream`]; ends when the queue is closed and drained.
    pub fn into_stream(self) -> impl Stream<Item = T> {
        stream::unfold(self, |rx| async move {
            let value = rx.recv().await?;
            Some((value, rx))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use crate::queue::queue;

    #[tokio::test]
    async fn stream_yields_in_send_order() {
        let (mut tx, rx) = queue::<u32>();
        let producer = tokio::spawn(async move {
            for v in [3, 8, 15, 42, 7] {
                tx.send(v).await.unwrap();
            }
        });

        let evens: Vec<u32> = rx
            .into_stream()
            .filter(|v| futures::future::ready(v % 2 == 0))
            .collect()
            .await;
        producer.await.unwrap();

        assert_eq!(evens, vec![8, 42]);
    }
}
