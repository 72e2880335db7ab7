use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::ShoppingListEntry;

/// Grocery store section, in the order a store is usually walked
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
)]
pub enum Category {
    #[strum(serialize = "Grönsaker")]
    #[serde(rename = "Grönsaker")]
    Produce,
    #[strum(serialize = "Kött")]
    #[serde(rename = "Kött")]
    Meat,
    #[strum(serialize = "Fisk")]
    #[serde(rename = "Fisk")]
    Fish,
    #[strum(serialize = "Mejeri")]
    #[serde(rename = "Mejeri")]
    Dairy,
    #[strum(serialize = "Bakverk")]
    #[serde(rename = "Bakverk")]
    Bakery,
    #[strum(serialize = "Skafferi")]
    #[serde(rename = "Skafferi")]
    Pantry,
    #[strum(serialize = "Övrigt")]
    #[serde(rename = "Övrigt")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub entries: Vec<ShoppingListEntry>,
}

const PANTRY: &[&str] = &[
    "mjöl", "socker", "salt", "peppar", "soja", "sylt", "ströbröd", "fond", "buljong", "olja",
    "vinäger", "pasta", "spaghetti", "makaroner", "risgryn", "ris", "havregryn", "bakpulver",
    "jäst", "honung", "senap", "ketchup", "krossade tomater", "kokosmjölk",
];
const PRODUCE: &[&str] = &[
    "lök", "vitlök", "potatis", "morot", "morötter", "dill", "persilja", "gräslök", "citron",
    "lime", "tomat", "tomater", "gurka", "sallad", "paprika", "spenat", "broccoli", "kål",
    "purjolök", "svamp", "champinjoner", "äpple", "äpplen", "banan", "bananer", "jordgubbar",
    "ingefära", "basilika", "avokado",
];
const MEAT: &[&str] = &[
    "kött", "färs", "kyckling", "kycklingfilé", "fläsk", "fläskfilé", "bacon", "korv", "skinka",
    "biff", "entrecote", "lammkött",
];
const FISH: &[&str] = &[
    "lax", "laxfilé", "torsk", "torskfilé", "räkor", "sill", "tonfisk", "fisk", "fiskfilé",
];
const DAIRY: &[&str] = &[
    "mjölk", "grädde", "smör", "ost", "yoghurt", "filmjölk", "kvarg", "crème fraiche",
    "gräddfil", "ägg",
];
const BAKERY: &[&str] = &["bröd", "limpa", "baguette", "tunnbröd", "knäckebröd", "bullar"];

/// Categorization Service
///
/// Stateless domain service that maps ingredient names to store sections.
///
/// Swedish ingredient names are mostly compounds whose last part is the
/// head noun ("vispgrädde", "blandfärs"), so a keyword matches the whole
/// name or the end of its last word. Pantry goods are checked first so
/// "ströbröd" and "fiskfond" are not sent to the bakery and fish counters.
pub struct CategorizationService;

impl CategorizationService {
    pub fn categorize(ingredient_name: &str) -> Category {
        let normalized = ingredient_name.trim().to_lowercase();
        let head = normalized
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .last()
            .unwrap_or_default();

        let sections = [
            (Category::Pantry, PANTRY),
            (Category::Produce, PRODUCE),
            (Category::Meat, MEAT),
            (Category::Fish, FISH),
            (Category::Dairy, DAIRY),
            (Category::Bakery, BAKERY),
        ];

        sections
            .into_iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|k| normalized == *k || head == *k || head.ends_with(k))
            })
            .map(|(category, _)| category)
            .unwrap_or(Category::Other)
    }

    /// Group shopping list entries by section.
    ///
    /// Sections follow `Category` order, entries keep their list order and
    /// empty sections are left out.
    pub fn group(entries: &[ShoppingListEntry]) -> Vec<CategoryGroup> {
        Category::VARIANTS
            .iter()
            .filter_map(|category| {
                let entries: Vec<_> = entries
                    .iter()
                    .filter(|e| Self::categorize(&e.name) == *category)
                    .cloned()
                    .collect();

                (!entries.is_empty()).then_some(CategoryGroup {
                    category: *category,
                    entries,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IngredientAggregationService;

    #[test]
    fn test_categorize_catalog_ingredients() {
        assert_eq!(CategorizationService::categorize("Köttfärs (blandfärs)"), Category::Meat);
        assert_eq!(CategorizationService::categorize("Laxfilé"), Category::Fish);
        assert_eq!(CategorizationService::categorize("Mjölk"), Category::Dairy);
        assert_eq!(CategorizationService::categorize("Vispgrädde"), Category::Dairy);
        assert_eq!(CategorizationService::categorize("Ägg"), Category::Dairy);
        assert_eq!(CategorizationService::categorize("Gul lök"), Category::Produce);
        assert_eq!(CategorizationService::categorize("Färsk dill"), Category::Produce);
        assert_eq!(CategorizationService::categorize("Vetemjöl"), Category::Pantry);
        assert_eq!(CategorizationService::categorize("Ströbröd"), Category::Pantry);
        assert_eq!(CategorizationService::categorize("Fiskfond"), Category::Pantry);
        assert_eq!(CategorizationService::categorize("Jordgubbssylt"), Category::Pantry);
        assert_eq!(CategorizationService::categorize("Bröd"), Category::Bakery);
    }

    #[test]
    fn test_unknown_goes_to_other() {
        assert_eq!(CategorizationService::categorize("Diskmedel"), Category::Other);
        assert_eq!(CategorizationService::categorize(""), Category::Other);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Produce.to_string(), "Grönsaker");
        assert_eq!(Category::Other.as_ref(), "Övrigt");
    }

    #[test]
    fn test_group_in_store_order() {
        let entries = IngredientAggregationService::merge([
            ("Mjölk", 1.0, "l"),
            ("Köttfärs", 500.0, "g"),
            ("Potatis", 1.0, "kg"),
            ("Smör", 50.0, "g"),
            ("Diskmedel", 1.0, "st"),
        ]);

        let groups = CategorizationService::group(&entries);

        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![Category::Produce, Category::Meat, Category::Dairy, Category::Other]
        );

        let dairy: Vec<_> = groups[2].entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(dairy, vec!["Mjölk", "Smör"]);
    }

    #[test]
    fn test_group_empty_list() {
        assert!(CategorizationService::group(&[]).is_empty());
    }
}
