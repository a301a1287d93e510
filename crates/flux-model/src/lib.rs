mod domain;
pub use domain::*;

mod config;
pub use config::DemoConfig;

mod error;
pub use error::ModelError;
