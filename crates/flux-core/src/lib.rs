mod error;
pub use error::CoreError;

pub mod barrier;
pub use barrier::{CompletionBarrier, CompletionToken};

pub mod queue;
pub use queue::{Receiver, SendError, Sender, queue};

mod clock;
pub use clock::{Clock, NoDelay, TokioClock};

mod source;
pub use source::{FixedSource, RandomSource, ValueSource};

pub mod task;

pub mod demo;
pub use demo::DemoContext;

mod orchestrator;
pub use orchestrator::Orchestrator;

#[cfg(test)]
pub(crate) mod testing;
