use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid demo config: {0}")]
    InvalidConfig(String),
}
