//! The three demonstrations and the context they share.

pub mod event_stream;
pub mod pipeline;
pub mod sequential;

use std::sync::Arc;

use flux_model::DemoConfig;
use flux_observe::{Console, StdoutConsole};

use crate::clock::{Clock, TokioClock};

/// Everything a demo needs besides its value source.
#[derive(Clone)]
pub struct DemoContext {
    pub config: Arc<DemoConfig>,
    pub clock: Arc<dyn Clock>,
    pub console: Arc<dyn Console>,
}

impl DemoContext {
    pub fn new(config: DemoConfig, clock: Arc<dyn Clock>, console: Arc<dyn Console>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
            console,
        }
    }

    /// Real pauses, output on stdout.
    pub fn realtime(config: DemoConfig) -> Self {
        Self::new(config, Arc::new(TokioClock), Arc::new(StdoutConsole))
    }
}
