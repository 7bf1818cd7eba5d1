use goaltrack_core::db::open_db_in_memory;
use goaltrack_core::{default_categories, GoalCategory, GoalStore, SqliteGoalStore};

#[test]
fn first_access_seeds_and_returns_the_six_defaults() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteGoalStore::new(&conn);

    let categories = store.get_categories().unwrap();
    assert_eq!(categories, default_categories());
    assert_eq!(categories.len(), 6);

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Health & Fitness",
            "Career",
            "Education",
            "Personal",
            "Financial",
            "Relationships",
        ]
    );
}

#[test]
fn seeding_happens_exactly_once() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteGoalStore::new(&conn);

    store.get_categories().unwrap();

    // A later edit must survive subsequent reads; a re-seed would clobber it.
    let mut edited = store.get_categories().unwrap();
    edited.push(GoalCategory::new("7", "Travel", "#00BCD4", "\u{2708}"));
    store.save_categories(&edited).unwrap();

    let reread = store.get_categories().unwrap();
    assert_eq!(reread.len(), 7);
    assert_eq!(reread.last().unwrap().name, "Travel");
}

#[test]
fn save_categories_is_a_whole_collection_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteGoalStore::new(&conn);

    store.get_categories().unwrap();
    let only = vec![GoalCategory::new("9", "Minimal", "#000000", "\u{25AA}")];
    store.save_categories(&only).unwrap();

    assert_eq!(store.get_categories().unwrap(), only);
}
