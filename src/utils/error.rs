use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoyaltyError {
    #[error("Task join failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),

    #[error("Task batch did not complete within {secs} seconds")]
    BarrierTimeout { secs: u64 },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LoyaltyError>;
