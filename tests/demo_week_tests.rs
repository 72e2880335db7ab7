//! Derived views over the bundled demo week snapshot

use skafferi::{AppError, Snapshot};
use skafferi_shopping::{CategorizationService, Category, format_amount};
use temp_dir::TempDir;

fn demo_week() -> Snapshot {
    Snapshot::load("data/demo-week.json").expect("Failed to load demo week")
}

#[test]
fn test_demo_week_uses_bundled_catalog() {
    let snapshot = demo_week();

    assert_eq!(snapshot.recipes.len(), 3);
    assert_eq!(snapshot.planned_meals.len(), 2);
    assert_eq!(snapshot.pantry.len(), 6);
}

#[test]
fn test_demo_week_shopping_list() {
    let list = demo_week().shopping_list().unwrap();

    let names: Vec<_> = list.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Köttfärs (blandfärs)",
            "Ägg",
            "Ströbröd",
            "Mjölk",
            "Gul lök",
            "Smör",
            "Vispgrädde",
            "Soja",
            "Vetemjöl",
            "Salt",
            "Jordgubbssylt",
        ]
    );

    // Köttbullar for 4, Pannkakor halved
    assert_eq!(list[1].amount, 2.5);
    assert_eq!(list[3].amount, 4.0);
    assert_eq!(list[6].amount, 4.0);

    let butter = &list[5];
    assert_eq!(butter.amount, 27.0);
    assert_eq!(butter.unit, "msk");
    assert_eq!(butter.mixed_units, vec!["g".to_owned()]);

    assert_eq!(format_amount(list[10].amount, &list[10].unit).to_string(), "50 ml");
}

#[test]
fn test_demo_week_grouped_by_section() {
    let list = demo_week().shopping_list().unwrap();
    let groups = CategorizationService::group(&list);

    let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
    assert_eq!(
        categories,
        vec![Category::Produce, Category::Meat, Category::Dairy, Category::Pantry]
    );

    let entries: usize = groups.iter().map(|g| g.entries.len()).sum();
    assert_eq!(entries, list.len());
}

#[test]
fn test_demo_week_matches() {
    let snapshot = demo_week();
    let matches = snapshot.matches();

    let ranked: Vec<_> = matches
        .iter()
        .map(|m| (m.recipe.id.as_str(), m.match_percentage, m.missing_count))
        .collect();

    // Gul lök has quantity 0 and does not count
    assert_eq!(ranked, vec![("2", 71, 2), ("1", 38, 5), ("3", 13, 7)]);
}

#[test]
fn test_demo_week_missing_for_pannkakor() {
    let missing = demo_week().missing("2", 8).unwrap();

    let missing: Vec<_> = missing
        .iter()
        .map(|e| (e.name.as_str(), e.amount, e.unit.as_str()))
        .collect();
    assert_eq!(
        missing,
        vec![("Jordgubbssylt", 2.0, "dl"), ("Vispgrädde", 4.0, "dl")]
    );
}

#[test]
fn test_missing_snapshot_file() {
    let dir = TempDir::new().unwrap();

    let result = Snapshot::load(dir.child("nope.json"));

    assert!(matches!(result, Err(AppError::Io { .. })));
}

#[test]
fn test_snapshot_with_own_recipes() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("week.json");
    std::fs::write(
        &path,
        r#"{
            "recipes": [{
                "id": "gröt",
                "name": "Havregrynsgröt",
                "servings": 1,
                "ingredients": [
                    { "name": "Havregryn", "amount": 1, "unit": "dl" },
                    { "name": "Vatten", "amount": 2, "unit": "dl" }
                ]
            }],
            "planned_meals": [
                { "recipe_id": "gröt", "day": "monday", "meal": "breakfast", "servings": 2 },
                { "recipe_id": "gröt", "day": "tuesday", "meal": "breakfast", "servings": 3 },
                { "recipe_id": "borttagen", "day": "friday", "meal": "dinner", "servings": 4 }
            ],
            "pantry": [{ "name": "vatten", "quantity": 10 }]
        }"#,
    )
    .unwrap();

    let snapshot = Snapshot::load(&path).unwrap();

    assert_eq!(snapshot.recipes.len(), 1);

    let list = snapshot.shopping_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].amount, 5.0);
    assert_eq!(list[1].amount, 10.0);

    let matches = snapshot.matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_percentage, 50);
}
