use serde::{Deserialize, Serialize};

use super::{ConsumerId, DemoKind, Value};

/// What a single consumer observed while draining its queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerReport {
    pub id: ConsumerId,
    /// Every value read from the queue, in read order.
    pub received: Vec<Value>,
    /// Values that passed the filter and were processed, in read order.
    pub processed: Vec<Value>,
}

impl ConsumerReport {
    pub fn new(id: ConsumerId) -> Self {
        Self {
            id,
            received: Vec::new(),
            processed: Vec::new(),
        }
    }
}

/// Outcome of one demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    pub demo: DemoKind,
    /// Values in generation order.
    pub produced: Vec<Value>,
    /// One entry per reader, ordered by consumer id.
    pub consumers: Vec<ConsumerReport>,
}

impl DemoReport {
    /// Number of values read across all consumers.
    pub fn received_total(&self) -> usize {
        self.consumers.iter().map(|c| c.received.len()).sum()
    }

    /// Number of values processed across all consumers.
    pub fn processed_total(&self) -> usize {
        self.consumers.iter().map(|c| c.processed.len()).sum()
    }

    /// Sorted union of everything the consumers received.
    ///
    /// Compare against a sorted copy of `produced` to check exactly-once delivery
    /// without assuming which consumer got which value.
    pub fn received_multiset(&self) -> Vec<Value> {
        let mut all: Vec<Value> = self
            .consumers
            .iter()
            .flat_map(|c| c.received.iter().copied())
            .collect();
        all.sort_unstable();
        all
    }

    /// Even values of `produced`, in generation order.
    pub fn expected_processed(&self) -> Vec<Value> {
        self.produced.iter().copied().filter(|v| v.is_even()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[u32]) -> Vec<Value> {
        raw.iter().copied().map(Value).collect()
    }

    fn sample() -> DemoReport {
        DemoReport {
            demo: DemoKind::Pipeline,
            produced: values(&[3, 8, 15, 42, 7]),
            consumers: vec![
                ConsumerReport {
                    id: 0,
                    received: values(&[3, 42]),
                    processed: values(&[42]),
                },
                ConsumerReport {
                    id: 1,
                    received: values(&[8, 15, 7]),
                    processed: values(&[8]),
                },
            ],
        }
    }

    #[test]
    fn totals_span_all_consumers() {
        let report = sample();
        assert_eq!(report.received_total(), 5);
        assert_eq!(report.processed_total(), 2);
    }

    #[test]
    fn multiset_is_sorted_union() {
        let report = sample();
        assert_eq!(report.received_multiset(), values(&[3, 7, 8, 15, 42]));
    }

    #[test]
    fn expected_processed_keeps_generation_order() {
        let report = sample();
        assert_eq!(report.expected_processed(), values(&[8, 42]));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["demo"], "pipeline");
        assert_eq!(json["consumers"][1]["received"], serde_json::json!([8, 15, 7]));
    }
}
