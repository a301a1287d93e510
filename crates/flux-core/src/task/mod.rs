//! Producer and consumer task bodies shared by the concurrent demos.

mod consumer;
pub use consumer::{consume, process};

mod producer;
pub use producer::produce;
