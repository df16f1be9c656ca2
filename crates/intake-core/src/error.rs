#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type QueueResult<T> = std::result::Result<T, QueueError>;
