use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShoppingError {
    #[error("Invalid servings: base servings must be greater than zero")]
    InvalidServings,

    #[error("Invalid servings: recipe {recipe_id} has zero base servings")]
    InvalidRecipeServings { recipe_id: String },

    #[error("Invalid servings: {slot} meal with recipe {recipe_id} is planned for zero servings")]
    InvalidPlannedServings { recipe_id: String, slot: String },
}

pub type Result<T> = std::result::Result<T, ShoppingError>;
