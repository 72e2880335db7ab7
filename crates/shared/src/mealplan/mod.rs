use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

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
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

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
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
}

/// A recipe assigned to a day and meal slot of the weekly plan.
///
/// `servings` is the target count for this meal and is independent of the
/// recipe's own baseline.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1))]
    pub recipe_id: String,
    #[serde(default)]
    pub day: Weekday,
    #[serde(default)]
    pub meal: MealSlot,
    #[validate(range(min = 1, message = "Planned servings must be at least 1"))]
    pub servings: u32,
}

impl PlannedMeal {
    pub fn new(recipe_id: impl Into<String>, day: Weekday, meal: MealSlot, servings: u32) -> Self {
        let recipe_id = recipe_id.into();

        Self {
            id: format!("{day}-{meal}"),
            recipe_id,
            day,
            meal,
            servings,
        }
    }

    pub fn check(&self) -> crate::Result<()> {
        self.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_meal_id_from_slot() {
        let meal = PlannedMeal::new("1", Weekday::Tuesday, MealSlot::Lunch, 2);

        assert_eq!(meal.id, "tuesday-lunch");
        assert!(meal.check().is_ok());
    }

    #[test]
    fn test_zero_planned_servings_rejected() {
        let meal = PlannedMeal::new("1", Weekday::Monday, MealSlot::Dinner, 0);

        assert!(meal.check().is_err());
    }

    #[test]
    fn test_week_order() {
        assert_eq!(Weekday::VARIANTS.len(), 7);
        assert!(Weekday::Monday < Weekday::Sunday);
        assert_eq!("friday".parse::<Weekday>().unwrap(), Weekday::Friday);
    }

    #[test]
    fn test_slot_deserializes_snake_case() {
        let meal: PlannedMeal = serde_json::from_str(
            r#"{ "recipe_id": "3", "day": "sunday", "meal": "breakfast", "servings": 6 }"#,
        )
        .unwrap();

        assert_eq!(meal.day, Weekday::Sunday);
        assert_eq!(meal.meal, MealSlot::Breakfast);
        assert_eq!(meal.servings, 6);
    }
}
