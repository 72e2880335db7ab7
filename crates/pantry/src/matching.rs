use std::collections::HashSet;

use serde::Serialize;
use skafferi_shared::{normalize_name, pantry::PantryItem, recipe::Recipe};

/// Names of pantry items currently on hand.
#[derive(Debug, Default, Clone)]
pub struct PantryIndex {
    available: HashSet<String>,
}

impl PantryIndex {
    pub fn new(pantry_items: &[PantryItem]) -> Self {
        let available = pantry_items
            .iter()
            .filter(|item| item.is_available())
            .map(PantryItem::key)
            .collect();

        Self { available }
    }

    pub fn is_available(&self, ingredient_name: &str) -> bool {
        self.available.contains(&normalize_name(ingredient_name))
    }
}

/// How much of a recipe can be cooked from the pantry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub available_ingredients: usize,
    pub total_ingredients: usize,
    pub match_percentage: u32,
    pub missing_count: usize,
}

impl RecipeMatch<'_> {
    pub fn is_complete(&self) -> bool {
        self.missing_count == 0
    }
}

/// `available / total * 100` rounded half up, in integers to avoid float ties.
fn percentage(available: usize, total: usize) -> u32 {
    ((available * 200 + total) / (2 * total)) as u32
}

fn match_recipe<'a>(recipe: &'a Recipe, pantry: &PantryIndex) -> Option<RecipeMatch<'a>> {
    let total = recipe.ingredients.len();
    if total == 0 {
        return None;
    }

    let available = recipe
        .ingredients
        .iter()
        .filter(|ingredient| pantry.is_available(&ingredient.name))
        .count();

    Some(RecipeMatch {
        recipe,
        available_ingredients: available,
        total_ingredients: total,
        match_percentage: percentage(available, total),
        missing_count: total - available,
    })
}

/// Rank recipes by how many of their ingredients are in the pantry
///
/// # Business Rules
/// - An ingredient is available when a pantry item with the same name
///   (case-insensitive) has a quantity above zero; the needed amount is not
///   compared
/// - Recipes without ingredients and recipes with a 0% match are left out
/// - Best match first; equal percentages keep the input recipe order
pub fn rank_matches<'a>(recipes: &'a [Recipe], pantry_items: &[PantryItem]) -> Vec<RecipeMatch<'a>> {
    let pantry = PantryIndex::new(pantry_items);

    let mut matches: Vec<_> = recipes
        .iter()
        .filter_map(|recipe| match_recipe(recipe, &pantry))
        .filter(|m| m.match_percentage > 0)
        .collect();

    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    tracing::debug!(
        recipes = recipes.len(),
        pantry_items = pantry_items.len(),
        matches = matches.len(),
        "recipe matches ranked"
    );

    matches
}
