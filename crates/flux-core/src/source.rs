use rand::{Rng, SeedableRng, rngs::StdRng};

use flux_model::{DemoConfig, DemoKind, Value};

/// Generator of the values a producer emits.
///
/// Each producer owns its source; nothing is shared between demos.
pub trait ValueSource: Send + 'static {
    fn next_value(&mut self) -> Value;
}

/// Uniform values in `[0, upper_bound)`.
pub struct RandomSource {
    rng: StdRng,
    upper_bound: u32,
}

impl RandomSource {
    /// An `upper_bound` of zero is treated as one.
    pub fn seeded(seed: u64, upper_bound: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            upper_bound: upper_bound.max(1),
        }
    }

    pub fn from_entropy(upper_bound: u32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            upper_bound: upper_bound.max(1),
        }
    }

    /// Source for one demo: seeded from `cfg.seed` if present, entropy otherwise.
    pub fn for_demo(cfg: &DemoConfig, demo: DemoKind) -> Self {
        match cfg.seed_for(demo) {
            Some(seed) => Self::seeded(seed, cfg.upper_bound),
            None => Self::from_entropy(cfg.upper_bound),
        }
    }
}

impl ValueSource for RandomSource {
    fn next_value(&mut self) -> Value {
        Value(self.rng.gen_range(0..self.upper_bound))
    }
}

/// Replays a fixed sequence, starting over when it runs out.
///
/// An empty sequence yields zeros.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<Value>,
    pos: usize,
}

impl FixedSource {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }
}

impl ValueSource for FixedSource {
    fn next_value(&mut self) -> Value {
        if self.values.is_empty() {
            return Value(0);
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
