use chrono::{Duration, Utc};
use goaltrack_core::db::open_db_in_memory;
use goaltrack_core::{
    achievements, GoalService, GoalStatus, Milestone, NewGoalRequest, Priority, SqliteGoalStore,
    StatusFilter, StoreError,
};
use uuid::Uuid;

fn request(title: &str, milestones: &[&str]) -> NewGoalRequest {
    NewGoalRequest {
        title: title.to_string(),
        description: "why this matters".to_string(),
        category: "Career".to_string(),
        target_date: Utc::now() + Duration::days(120),
        priority: Priority::Medium,
        milestone_titles: milestones.iter().map(|m| m.to_string()).collect(),
    }
}

#[test]
fn create_goal_persists_milestones_in_order() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));

    let id = service
        .create_goal(&request("ship the app", &["prototype", "beta", "launch"]))
        .unwrap();

    let goal = service.get_goal(id).unwrap().unwrap();
    assert_eq!(goal.title, "ship the app");
    assert_eq!(goal.progress, 0);
    assert_eq!(goal.status, GoalStatus::Active);
    let titles: Vec<&str> = goal.milestones.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["prototype", "beta", "launch"]);
    assert!(goal.milestones.iter().all(|m| !m.completed));
}

#[test]
fn list_goals_filters_by_status() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));

    let done = service.create_goal(&request("done", &[])).unwrap();
    service.create_goal(&request("ongoing", &[])).unwrap();
    service.update_progress(done, 100).unwrap();

    assert_eq!(service.list_goals(StatusFilter::All).unwrap().len(), 2);

    let completed = service
        .list_goals(StatusFilter::Only(GoalStatus::Completed))
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done);

    let active = service
        .list_goals(StatusFilter::Only(GoalStatus::Active))
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "ongoing");
}

#[test]
fn update_progress_clamps_and_completes_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));
    let id = service.create_goal(&request("clamp me", &[])).unwrap();

    let goal = service.update_progress(id, 180).unwrap();
    assert_eq!(goal.progress, 100);
    assert_eq!(goal.status, GoalStatus::Completed);

    let goal = service.update_progress(id, -40).unwrap();
    assert_eq!(goal.progress, 0);
    assert_eq!(goal.status, GoalStatus::Active);

    let stored = service.get_goal(id).unwrap().unwrap();
    assert_eq!(stored.progress, 0);
}

#[test]
fn toggle_milestone_round_trips_through_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));
    let id = service
        .create_goal(&request("two steps", &["one", "two"]))
        .unwrap();

    let milestone = service.get_goal(id).unwrap().unwrap().milestones[0].id;
    let goal = service.toggle_milestone(id, milestone).unwrap();
    assert!(goal.milestones[0].completed);
    assert!(goal.milestones[0].completed_at.is_some());
    assert_eq!(goal.progress, 50);

    let goal = service.toggle_milestone(id, milestone).unwrap();
    assert!(!goal.milestones[0].completed);
    assert!(goal.milestones[0].completed_at.is_none());
    // Progress stays; milestone toggles never lower it.
    assert_eq!(goal.progress, 50);

    let err = service.toggle_milestone(id, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, StoreError::MilestoneNotFound(_)));
}

#[test]
fn set_status_persists_and_bumps_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));
    let id = service.create_goal(&request("pause me", &[])).unwrap();

    let before = service.get_goal(id).unwrap().unwrap();
    let paused = service.set_status(id, GoalStatus::Paused).unwrap();
    assert_eq!(paused.status, GoalStatus::Paused);
    assert!(paused.updated_at > before.updated_at);

    let stored = service.get_goal(id).unwrap().unwrap();
    assert_eq!(stored.status, GoalStatus::Paused);
    assert_eq!(stored.updated_at, paused.updated_at);

    // A direct status change does not touch progress.
    assert_eq!(stored.progress, before.progress);

    let err = service
        .set_status(Uuid::new_v4(), GoalStatus::Cancelled)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn add_milestone_appends_after_existing_ones() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));
    let id = service
        .create_goal(&request("grows later", &["first", "second"]))
        .unwrap();

    let before = service.get_goal(id).unwrap().unwrap();
    let goal = service.add_milestone(id, Milestone::new("third")).unwrap();

    let titles: Vec<&str> = goal.milestones.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
    let appended = goal.milestones.last().unwrap();
    assert!(!appended.completed);
    assert!(appended.completed_at.is_none());
    assert!(goal.updated_at > before.updated_at);

    let stored = service.get_goal(id).unwrap().unwrap();
    assert_eq!(stored.milestones, goal.milestones);
}

#[test]
fn unknown_goal_ids_surface_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));

    let missing = Uuid::new_v4();
    assert!(service.get_goal(missing).unwrap().is_none());
    let err = service.update_progress(missing, 10).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
    assert!(!service.delete_goal(missing).unwrap());
}

#[test]
fn statistics_reflect_the_full_flow() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));

    let a = service.create_goal(&request("a", &[])).unwrap();
    let b = service.create_goal(&request("b", &[])).unwrap();
    service.create_goal(&request("c", &[])).unwrap();
    service.update_progress(a, 100).unwrap();
    service.update_progress(b, 100).unwrap();

    let stats = service.statistics().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.average_progress, 67);
    assert_eq!(stats.completion_rate, 67);
    assert_eq!(stats.category_counts["Career"], 3);

    let badges = achievements(&stats);
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].title, "First Goal Completed");
}

#[test]
fn categories_seed_through_the_service_too() {
    let conn = open_db_in_memory().unwrap();
    let service = GoalService::new(SqliteGoalStore::new(&conn));

    assert_eq!(service.categories().unwrap().len(), 6);
}
