use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid {what} distribution: {reason}")]
    Distribution { what: &'static str, reason: String },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
