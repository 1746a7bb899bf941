use crate::helpers::TestDb;
use team_seeder::{
    domain::{CandidateMember, SeedError, SeedStore, SeedStoreError},
    seed_and_disconnect,
    services::{
        assignments::AssignmentPlan,
        reporter::report_lines,
        seeder::{ProjectSeed, Seeder},
    },
    utils::constants::seed,
};
use test_context::test_context;

#[test_context(TestDb)]
#[tokio::test]
async fn should_seed_fixture_data(db: &mut TestDb) {
    let mut store = db.new_store().await;
    let seeder = Seeder::from_fixtures().expect("Failed to load fixtures");

    let report = seed_and_disconnect(&seeder, &mut store)
        .await
        .expect("Seed run failed");

    assert_eq!(report.members.len(), 2, "Only valid members are created");
    assert_eq!(report.rejected_members, 2);
    assert_eq!(db.count("member").await, 2);
    assert_eq!(db.count("project").await, 2);
    assert_eq!(db.count("member_projects").await, 3);
    assert_eq!(
        report_lines(&report.assignments),
        vec![
            "John Doe (backend) -> Health App [Assigned: 2025-01-01T10:00:00.000Z]",
            "John Doe (backend) -> E-commerce Platform [Assigned: 2025-01-01T10:00:00.000Z]",
            "Jane Smith (UI/UX) -> Health App [Assigned: 2025-01-02T15:30:00.000Z]",
        ]
    );
}

#[test_context(TestDb)]
#[tokio::test]
async fn should_never_insert_invalid_members(db: &mut TestDb) {
    let mut store = db.new_store().await;
    let seeder = Seeder::from_fixtures().expect("Failed to load fixtures");

    seed_and_disconnect(&seeder, &mut store)
        .await
        .expect("Seed run failed");

    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM member ORDER BY id")
        .fetch_all(&db.pool)
        .await
        .expect("Failed to read members");
    assert_eq!(names, vec!["John Doe", "Jane Smith"]);

    let roles: Vec<String> = sqlx::query_scalar("SELECT role FROM member ORDER BY id")
        .fetch_all(&db.pool)
        .await
        .expect("Failed to read roles");
    assert_eq!(roles, vec!["backend", "UI/UX"]);
}

#[test_context(TestDb)]
#[tokio::test]
async fn should_replace_assignments_on_every_run(db: &mut TestDb) {
    db.insert_stale_assignment().await;
    let seeder = Seeder::from_fixtures().expect("Failed to load fixtures");

    for run in 0..2 {
        let mut store = db.new_store().await;
        let report = seed_and_disconnect(&seeder, &mut store)
            .await
            .expect("Seed run failed");

        assert_eq!(report.assignments_removed, if run == 0 { 1 } else { 3 });
        assert_eq!(
            db.count("member_projects").await,
            3,
            "Assignment table should hold exactly three rows after run {run}"
        );
    }

    // Members and projects are only ever appended
    assert_eq!(db.count("member").await, 5);
    assert_eq!(db.count("project").await, 5);
}

#[test_context(TestDb)]
#[tokio::test]
async fn should_abort_without_touching_assignments(db: &mut TestDb) {
    db.insert_stale_assignment().await;
    let mut store = db.new_store().await;
    let seeder = Seeder::new(
        vec![
            CandidateMember::new("John Doe", "backend"),
            CandidateMember::new("", "backend"),
        ],
        seed::PROJECTS
            .iter()
            .map(|(name, description)| ProjectSeed::new(name, description))
            .collect(),
        AssignmentPlan::parse(seed::ASSIGNMENTS).expect("Invalid plan"),
    );

    let result = seed_and_disconnect(&seeder, &mut store).await;

    assert!(
        matches!(
            result,
            Err(SeedError::InsufficientData {
                members: 1,
                projects: 2,
                ..
            })
        ),
        "Expected InsufficientData, got {result:?}"
    );
    assert_eq!(
        db.count("member_projects").await,
        1,
        "Existing assignments must survive an aborted run"
    );

    // The store's pool was released even though the run failed
    assert_eq!(
        store.get_assignments().await,
        Err(SeedStoreError::Disconnected)
    );
}
