pub mod matching;
pub mod missing;

pub use matching::{PantryIndex, RecipeMatch, rank_matches};
pub use missing::missing_ingredients;
