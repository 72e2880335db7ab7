use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skafferi_shared::{mealplan::PlannedMeal, normalize_name, recipe::Recipe};

use crate::{Result, ShoppingError, scale};

/// One line of the shopping list, derived from the current plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    /// Display name of the first occurrence
    pub name: String,
    pub amount: f64,
    /// Unit of the first occurrence
    pub unit: String,
    /// Other units summed into `amount` without conversion
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixed_units: Vec<String>,
}

impl ShoppingListEntry {
    pub fn has_mixed_units(&self) -> bool {
        !self.mixed_units.is_empty()
    }
}

/// Merges ingredient amounts by normalized name, keeping first-appearance order.
#[derive(Debug, Default)]
pub struct ShoppingListAccumulator {
    entries: Vec<ShoppingListEntry>,
    index: HashMap<String, usize>,
}

impl ShoppingListAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, amount: f64, unit: &str) {
        let key = normalize_name(name);

        let Some(position) = self.index.get(&key).copied() else {
            self.index.insert(key, self.entries.len());
            self.entries.push(ShoppingListEntry {
                name: name.trim().to_owned(),
                amount,
                unit: unit.to_owned(),
                mixed_units: vec![],
            });
            return;
        };

        let entry = &mut self.entries[position];
        entry.amount += amount;

        if entry.unit != unit && !entry.mixed_units.iter().any(|u| u == unit) {
            tracing::warn!(
                ingredient = %entry.name,
                unit = %entry.unit,
                other_unit = %unit,
                "summing amounts with different units"
            );
            entry.mixed_units.push(unit.to_owned());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ShoppingListEntry> {
        self.entries
    }
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that turns the planned meals of a week into a
/// shopping list:
/// - every recipe is scaled by `planned servings / recipe servings`
/// - ingredients are merged by lower-cased, trimmed name
/// - amounts are summed as plain numbers, "1 l" + "500 g" gives 501 l with
///   the second unit recorded in `mixed_units`
///
/// Planned meals pointing at an unknown recipe contribute nothing. A meal
/// planned for zero servings is rejected.
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    pub fn aggregate(
        planned_meals: &[PlannedMeal],
        recipes_by_id: &HashMap<String, Recipe>,
    ) -> Result<Vec<ShoppingListEntry>> {
        let mut accumulator = ShoppingListAccumulator::new();

        for planned_meal in planned_meals {
            if planned_meal.servings == 0 {
                return Err(ShoppingError::InvalidPlannedServings {
                    recipe_id: planned_meal.recipe_id.to_owned(),
                    slot: format!("{} {}", planned_meal.day, planned_meal.meal),
                });
            }

            let Some(recipe) = recipes_by_id.get(&planned_meal.recipe_id) else {
                tracing::debug!(
                    recipe_id = %planned_meal.recipe_id,
                    day = %planned_meal.day,
                    meal = %planned_meal.meal,
                    "planned meal references unknown recipe, skipping"
                );
                continue;
            };

            Self::add_recipe(&mut accumulator, recipe, planned_meal.servings)?;
        }

        tracing::debug!(
            planned_meals = planned_meals.len(),
            entries = accumulator.len(),
            "shopping list aggregated"
        );

        Ok(accumulator.into_entries())
    }

    /// Add every ingredient of `recipe`, scaled to `servings`.
    pub fn add_recipe(
        accumulator: &mut ShoppingListAccumulator,
        recipe: &Recipe,
        servings: u32,
    ) -> Result<()> {
        if recipe.servings == 0 {
            return Err(ShoppingError::InvalidRecipeServings {
                recipe_id: recipe.id.to_owned(),
            });
        }

        for ingredient in &recipe.ingredients {
            let amount = scale(ingredient.amount, servings, recipe.servings)?;
            accumulator.add(&ingredient.name, amount, &ingredient.unit);
        }

        Ok(())
    }

    /// Merge already scaled `(name, amount, unit)` tuples.
    pub fn merge<'a>(
        ingredients: impl IntoIterator<Item = (&'a str, f64, &'a str)>,
    ) -> Vec<ShoppingListEntry> {
        let mut accumulator = ShoppingListAccumulator::new();

        for (name, amount, unit) in ingredients {
            accumulator.add(name, amount, unit);
        }

        accumulator.into_entries()
    }
}
