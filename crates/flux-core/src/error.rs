use thiserror::Error;
use tokio::task::JoinError;

use flux_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(#[from] ModelError),
    #[error("queue closed before all values were delivered")]
    QueueClosed,
    #[error("completion barrier already handed out all {capacity} tokens")]
    BarrierOverflow { capacity: usize },
    #[error("task panicked: {0}")]
    TaskPanicked(String),
}

impl From<JoinError> for CoreError {
    fn from(e: JoinError) -> Self {
        CoreError::TaskPanicked(e.to_string())
    }
}
