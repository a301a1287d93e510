use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DemoKind, IntervalMs, ModelError};

/// Tunables shared by the three demos.
///
/// Defaults reproduce the classic run: ten values in `[0, 100)`, a 500ms pause after
/// each emission, 200ms of simulated work per even value, two pipeline consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Number of values each producer emits.
    pub count: usize,
    /// Exclusive upper bound for generated values.
    pub upper_bound: u32,
    /// Pause after each emission.
    pub emit_interval_ms: IntervalMs,
    /// Simulated processing time for a value that passes the filter.
    pub process_interval_ms: IntervalMs,
    /// Number of consumers in the pipeline demo.
    pub consumers: usize,
    /// Base seed; `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 10,
            upper_bound: 100,
            emit_interval_ms: 500,
            process_interval_ms: 200,
            consumers: 2,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_consumers(mut self, consumers: usize) -> Self {
        self.consumers = consumers;
        self
    }

    #[inline]
    pub fn emit_interval(&self) -> Duration {
        Duration::from_millis(self.emit_interval_ms)
    }

    #[inline]
    pub fn process_interval(&self) -> Duration {
        Duration::from_millis(self.process_interval_ms)
    }

    /// Seed for a given demo, offset by its run index so demos don't replay each other.
    pub fn seed_for(&self, demo: DemoKind) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(demo.index()))
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.upper_bound == 0 {
            return Err(ModelError::InvalidConfig(
                "upper_bound must be greater than zero".into(),
            ));
        }
        if self.consumers == 0 {
            return Err(ModelError::InvalidConfig(
                "pipeline needs at least one consumer".into(),
            ));
        }
        Ok(())
    }
}
