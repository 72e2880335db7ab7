use std::path::PathBuf;

use skafferi_shared::RecordError;
use skafferi_shopping::ShoppingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("Shopping list error: {0}")]
    Shopping(#[from] ShoppingError),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
