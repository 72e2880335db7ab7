use skafferi_shared::recipe::{Recipe, RecipeFilter};

use crate::Result;

const DEMO_CATALOG: &str = include_str!("../data/catalog.json");

/// Recipes bundled with the binary, used when a snapshot brings none.
pub fn demo_recipes() -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(DEMO_CATALOG)?;

    for recipe in &recipes {
        recipe.check()?;
    }

    Ok(recipes)
}

/// Demo recipes passing `filter`, in catalog order.
pub fn browse(filter: &RecipeFilter) -> Result<Vec<Recipe>> {
    let recipes = demo_recipes()?;
    let found: Vec<Recipe> = filter.apply(&recipes).into_iter().cloned().collect();

    tracing::debug!(
        recipes = recipes.len(),
        matches = found.len(),
        "catalog filtered"
    );

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_loads() {
        let recipes = demo_recipes().unwrap();

        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[1].name, "Pannkakor med sylt och grädde");
        assert_eq!(recipes[1].servings, 4);
        assert_eq!(recipes[0].ingredients.len(), 8);
        assert_eq!(recipes[2].steps.len(), 7);
        assert_eq!(recipes[2].ingredients[7].amount, 0.5);
    }

    #[test]
    fn test_browse_main_courses_with_fish() {
        use skafferi_shared::recipe::Difficulty;

        let filter = RecipeFilter {
            categories: vec!["Huvudrätt".to_owned()],
            difficulties: vec![Difficulty::Medium],
            search: Some("dill".to_owned()),
            ..Default::default()
        };

        let found = browse(&filter).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }

    #[test]
    fn test_browse_quick_recipes() {
        let filter = RecipeFilter {
            max_time: Some(40),
            tags: vec!["klassiker".to_owned()],
            ..Default::default()
        };

        let ids: Vec<_> = browse(&filter).unwrap().into_iter().map(|r| r.id).collect();

        assert_eq!(ids, vec!["2"]);
    }
}
