//! Human-readable trace of a demo run.
//!
//! Every demo reports what it produced and processed through a [`Console`].
//! The binary prints to stdout via [`StdoutConsole`]; tests swap in a recorder.

mod view;
pub use view::render;

use std::io::{self, Write};

use flux_model::{ConsumerId, DemoKind, Value};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Section header printed before a demo starts.
    Banner(DemoKind),
    /// A producer generated a value.
    Produced(Value),
    /// A value passed the filter and went through simulated processing.
    /// `consumer` is `None` outside the multi-consumer pipeline.
    Processed {
        consumer: Option<ConsumerId>,
        value: Value,
    },
    /// Free-form phase marker.
    Note(&'static str),
    /// A demo ran to completion.
    Finished(DemoKind),
}

pub trait Console: Send + Sync {
    fn emit(&self, event: ConsoleEvent);
}

/// Writes one line per event to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&self, event: ConsoleEvent) {
        trace!(target: "flux.console", ?event, "console event");

        let mut out = io::stdout().lock();
        // a closed stdout must not take a demo down with it
        let _ = writeln!(out, "{}", render(&event));
    }
}
