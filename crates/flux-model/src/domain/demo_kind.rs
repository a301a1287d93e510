use std::fmt;

use serde::{Deserialize, Serialize};

/// The three demonstrations, in the order the orchestrator runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DemoKind {
    /// One producer, one consumer reading the queue as a stream.
    EventStream,
    /// One producer, several consumers racing on a shared queue.
    Pipeline,
    /// No concurrency: generate everything, then filter in order.
    Sequential,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::EventStream, DemoKind::Pipeline, DemoKind::Sequential];

    /// Short symbolic identifier, used in logs and spans.
    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::EventStream => "event-stream",
            DemoKind::Pipeline => "pipeline",
            DemoKind::Sequential => "sequential",
        }
    }

    /// Banner title printed before the demo starts.
    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::EventStream => "Reactive Programming",
            DemoKind::Pipeline => "Asynchronous Programming",
            DemoKind::Sequential => "Synchronous Programming",
        }
    }

    /// Line printed once the demo has fully completed.
    pub fn completion(&self) -> &'static str {
        match self {
            DemoKind::EventStream => "Reactive tasks completed",
            DemoKind::Pipeline => "Asynchronous tasks completed",
            DemoKind::Sequential => "Synchronous tasks completed",
        }
    }

    /// Position in the run order; also used to derive per-demo seeds.
    pub fn index(&self) -> u64 {
        match self {
            DemoKind::EventStream => 0,
            DemoKind::Pipeline => 1,
            DemoKind::Sequential => 2,
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
