pub mod aggregation;
pub mod categorization;
mod error;
pub mod format;
pub mod scale;

pub use aggregation::{IngredientAggregationService, ShoppingListAccumulator, ShoppingListEntry};
pub use categorization::{CategorizationService, Category, CategoryGroup};
pub use error::*;
pub use format::{FormattedAmount, format_amount};
pub use scale::{scale, scale_factor};
