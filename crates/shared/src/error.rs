#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("ingredient '{name}' has an invalid amount: {amount}")]
    InvalidAmount { name: String, amount: f64 },
}

pub type Result<T> = std::result::Result<T, RecordError>;
