use std::sync::{Arc, Mutex};

use flux_model::{DemoConfig, Value};
use flux_observe::{Console, ConsoleEvent};

use crate::{DemoContext, NoDelay};

/// Console that keeps every event for later assertions.
#[derive(Default)]
pub struct RecordingConsole {
    events: Mutex<Vec<ConsoleEvent>>,
}

impl RecordingConsole {
    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn produced(&self) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ConsoleEvent::Produced(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub fn processed(&self) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ConsoleEvent::Processed { value, .. } => Some(value),
                _ => None,
            })
            .collect()
    }
}

impl Console for RecordingConsole {
    fn emit(&self, event: ConsoleEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Context with no pauses and a recording console.
pub fn quiet_ctx(config: DemoConfig) -> (DemoContext, Arc<RecordingConsole>) {
    let console = Arc::new(RecordingConsole::default());
    let ctx = DemoContext::new(config, Arc::new(NoDelay), console.clone());
    (ctx, console)
}

pub fn values(raw: &[u32]) -> Vec<Value> {
    raw.iter().copied().map(Value).collect()
}

/// Ten values with a known even subset: 8, 42, 100, 12, 64.
pub const SCENARIO: [u32; 10] = [3, 8, 15, 42, 7, 100, 12, 9, 55, 64];
