use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use serde::{Deserialize, Serialize};
use skafferi_pantry::{RecipeMatch, missing_ingredients, rank_matches};
use skafferi_shared::{mealplan::PlannedMeal, pantry::PantryItem, recipe::Recipe};
use skafferi_shopping::{IngredientAggregationService, ShoppingListEntry};

use crate::{AppError, Result, catalog};

/// Current pantry and planner state, as handed over by the UI layer.
///
/// Shopping lists and matches are derived from it on every call and never
/// stored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub planned_meals: Vec<PlannedMeal>,
    #[serde(default)]
    pub pantry: Vec<PantryItem>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut snapshot: Snapshot = serde_json::from_str(json)?;

        if snapshot.recipes.is_empty() {
            tracing::debug!("snapshot has no recipes, using demo catalog");
            snapshot.recipes = catalog::demo_recipes()?;
        }

        snapshot.check()?;

        Ok(snapshot)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            recipes = snapshot.recipes.len(),
            planned_meals = snapshot.planned_meals.len(),
            pantry_items = snapshot.pantry.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Reject records the engine must never see, like zero servings or two
    /// recipes sharing an id.
    pub fn check(&self) -> Result<()> {
        let mut ids = HashSet::new();

        for recipe in &self.recipes {
            recipe.check()?;

            if !ids.insert(recipe.id.as_str()) {
                return Err(AppError::DuplicateRecipe(recipe.id.to_owned()));
            }
        }

        for planned_meal in &self.planned_meals {
            planned_meal.check()?;
        }

        Ok(())
    }

    pub fn recipes_by_id(&self) -> HashMap<String, Recipe> {
        self.recipes
            .iter()
            .map(|recipe| (recipe.id.to_owned(), recipe.clone()))
            .collect()
    }

    pub fn recipe(&self, id: &str) -> Result<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| AppError::RecipeNotFound(id.to_owned()))
    }

    pub fn shopping_list(&self) -> Result<Vec<ShoppingListEntry>> {
        let list =
            IngredientAggregationService::aggregate(&self.planned_meals, &self.recipes_by_id())?;

        Ok(list)
    }

    pub fn matches(&self) -> Vec<RecipeMatch<'_>> {
        rank_matches(&self.recipes, &self.pantry)
    }

    pub fn missing(&self, recipe_id: &str, servings: u32) -> Result<Vec<ShoppingListEntry>> {
        let recipe = self.recipe(recipe_id)?;

        Ok(missing_ingredients(recipe, &self.pantry, servings)?)
    }
}
