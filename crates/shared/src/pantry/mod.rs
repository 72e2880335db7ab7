use serde::{Deserialize, Serialize};

use crate::normalize_name;

/// Ingredient on hand, matched against recipe ingredients by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            ..Default::default()
        }
    }

    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Only presence counts, not whether the quantity covers a recipe.
    pub fn is_available(&self) -> bool {
        self.quantity > 0.0
    }
}
