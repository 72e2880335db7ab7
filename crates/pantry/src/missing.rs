use skafferi_shared::{pantry::PantryItem, recipe::Recipe};
use skafferi_shopping::{Result, ShoppingError, ShoppingListAccumulator, ShoppingListEntry, scale};

use crate::PantryIndex;

/// Ingredients of `recipe` that are not in the pantry, scaled to `servings`.
///
/// Feeds the "add missing to shopping list" action: the result merges by the
/// same rules as the weekly shopping list.
pub fn missing_ingredients(
    recipe: &Recipe,
    pantry_items: &[PantryItem],
    servings: u32,
) -> Result<Vec<ShoppingListEntry>> {
    if recipe.servings == 0 {
        return Err(ShoppingError::InvalidRecipeServings {
            recipe_id: recipe.id.to_owned(),
        });
    }

    let pantry = PantryIndex::new(pantry_items);
    let mut accumulator = ShoppingListAccumulator::new();

    for ingredient in recipe
        .ingredients
        .iter()
        .filter(|ingredient| !pantry.is_available(&ingredient.name))
    {
        let amount = scale(ingredient.amount, servings, recipe.servings)?;
        accumulator.add(&ingredient.name, amount, &ingredient.unit);
    }

    Ok(accumulator.into_entries())
}
