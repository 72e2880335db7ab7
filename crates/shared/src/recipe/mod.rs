use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::{RecordError, normalize_name};

mod filter;

pub use filter::RecipeFilter;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Difficulty {
    #[default]
    #[strum(serialize = "Lätt")]
    #[serde(rename = "Lätt")]
    Easy,
    #[strum(serialize = "Medel")]
    #[serde(rename = "Medel")]
    Medium,
    #[strum(serialize = "Svår")]
    #[serde(rename = "Svår")]
    Hard,
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Ingredient name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Ingredient amount must not be negative"))]
    pub amount: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            amount,
            unit: unit.into(),
            notes: None,
        }
    }

    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub id: String,
    pub instruction: String,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-serving nutrition facts
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

#[derive(Validate, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[validate(length(min = 1, message = "Recipe id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Recipe name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: u16,
    #[serde(default)]
    pub cook_time: u16,
    #[serde(default)]
    pub total_time: u16,
    /// Baseline the ingredient amounts are written for.
    #[validate(range(min = 1, message = "Recipe servings must be at least 1"))]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl Recipe {
    /// Validates the record before it is handed to the engine.
    ///
    /// Amounts must also be finite, which the derive cannot express.
    pub fn check(&self) -> crate::Result<()> {
        self.validate()?;

        if let Some(ingredient) = self.ingredients.iter().find(|i| !i.amount.is_finite()) {
            return Err(RecordError::InvalidAmount {
                name: ingredient.name.to_owned(),
                amount: ingredient.amount,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pannkakor() -> Recipe {
        Recipe {
            id: "2".to_owned(),
            name: "Pannkakor med sylt och grädde".to_owned(),
            servings: 4,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                Ingredient::new("Ägg", 3.0, "st"),
                Ingredient::new("Mjölk", 6.0, "dl"),
                Ingredient::new("Vetemjöl", 3.0, "dl"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_recipe_passes_check() {
        assert!(pannkakor().check().is_ok());
    }

    #[test]
    fn test_zero_servings_rejected() {
        let mut recipe = pannkakor();
        recipe.servings = 0;

        assert!(matches!(recipe.check(), Err(RecordError::Validate(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut recipe = pannkakor();
        recipe.ingredients[1].amount = -1.0;

        assert!(matches!(recipe.check(), Err(RecordError::Validate(_))));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut recipe = pannkakor();
        recipe.ingredients[0].amount = f64::INFINITY;

        let err = recipe.check().unwrap_err();
        assert!(matches!(err, RecordError::InvalidAmount { .. }));
        assert!(err.to_string().contains("Ägg"));
    }

    #[test]
    fn test_difficulty_uses_swedish_labels() {
        assert_eq!(Difficulty::Medium.to_string(), "Medel");
        assert_eq!("Svår".parse::<Difficulty>().unwrap(), Difficulty::Hard);

        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"Lätt\"");
    }

    #[test]
    fn test_recipe_deserializes_with_defaults() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": "9",
                "name": "Gröt",
                "servings": 2,
                "ingredients": [{ "name": "Havregryn", "amount": 2, "unit": "dl" }]
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.ingredients[0].amount, 2.0);
        assert!(recipe.steps.is_empty());
        assert!(recipe.check().is_ok());
    }
}
