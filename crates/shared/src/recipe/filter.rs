use serde::{Deserialize, Serialize};

use super::{Difficulty, Recipe};
use crate::normalize_name;

/// Catalog browse filter. Empty fields do not restrict.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Matched against name, description, ingredient names and tags
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
    /// Upper bound on total time in minutes
    #[serde(default)]
    pub max_time: Option<u16>,
    /// A recipe passes when it carries any of these tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe)
            && (self.categories.is_empty()
                || self
                    .categories
                    .iter()
                    .any(|c| normalize_name(c) == normalize_name(&recipe.category)))
            && (self.difficulties.is_empty() || self.difficulties.contains(&recipe.difficulty))
            && self.max_time.is_none_or(|max| recipe.total_time <= max)
            && (self.tags.is_empty()
                || recipe.tags.iter().any(|tag| {
                    let tag = normalize_name(tag);
                    self.tags.iter().any(|wanted| normalize_name(wanted) == tag)
                }))
    }

    /// Matching recipes in catalog order.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let Some(query) = self.search.as_deref().map(normalize_name) else {
            return true;
        };

        if query.is_empty() {
            return true;
        }

        normalize_name(&recipe.name).contains(&query)
            || normalize_name(&recipe.description).contains(&query)
            || recipe.ingredients.iter().any(|i| i.key().contains(&query))
            || recipe.tags.iter().any(|t| normalize_name(t).contains(&query))
    }
}
