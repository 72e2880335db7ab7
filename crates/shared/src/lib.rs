mod error;
pub mod mealplan;
pub mod pantry;
pub mod recipe;

pub use error::*;

/// Identity key shared by ingredients, pantry items and shopping list entries.
///
/// Names are compared case-insensitively with surrounding whitespace ignored,
/// so "  Mjölk" and "mjölk" refer to the same ingredient.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
