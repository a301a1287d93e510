mod value;
pub use value::Value;

mod demo_kind;
pub use demo_kind::DemoKind;

mod report;
pub use report::{ConsumerReport, DemoReport};

/// Identifier of a consumer task inside one demo run.
///
/// Consumers are numbered from zero in spawn order.
pub type ConsumerId = usize;

/// Interval value in milliseconds.
pub type IntervalMs = u64;
