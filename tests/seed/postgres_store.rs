use crate::helpers::TestDb;
use chrono::{TimeZone, Utc};
use team_seeder::domain::{
    MemberId, MemberName, NewMember, NewMemberProject, NewProject, ProjectId,
    Role, SeedStore, SeedStoreError,
};
use test_context::test_context;

fn new_member(name: &str, role: Role) -> NewMember {
    NewMember::new(MemberName::parse(name).expect(name), role)
}

#[test_context(TestDb)]
#[tokio::test]
async fn should_assign_ids_on_insert(db: &mut TestDb) {
    let mut store = db.new_store().await;

    let ted = store
        .add_member(new_member("Ted", Role::Backend))
        .await
        .expect("Failed to add member");
    let dougal = store
        .add_member(new_member("Dougal", Role::UiUx))
        .await
        .expect("Failed to add member");

    assert_ne!(ted.id, dougal.id);
    assert_eq!(dougal.role, Role::UiUx);
    assert_eq!(db.count("member").await, 2);
}

#[test_context(TestDb)]
#[tokio::test]
async fn should_reject_assignments_to_unknown_rows(db: &mut TestDb) {
    let mut store = db.new_store().await;
    let assigned_at = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();

    let result = store
        .add_assignments(&[NewMemberProject::new(
            MemberId::new(1000),
            ProjectId::new(1000),
            assigned_at,
        )])
        .await;

    assert_eq!(result, Err(SeedStoreError::UnknownReference));
}

#[test_context(TestDb)]
#[tokio::test]
async fn should_insert_assignments_in_one_statement(db: &mut TestDb) {
    let mut store = db.new_store().await;
    let member = store
        .add_member(new_member("Ted", Role::Frontend))
        .await
        .expect("Failed to add member");
    let project = store
        .add_project(NewProject::parse("Parish", "Craggy Island").unwrap())
        .await
        .expect("Failed to add project");
    let assigned_at = Utc.with_ymd_and_hms(2025, 1, 2, 15, 30, 0).unwrap();
    let row = NewMemberProject::new(member.id, project.id, assigned_at);

    // A duplicate key fails the whole batch
    let result = store.add_assignments(&[row.clone(), row.clone()]).await;
    assert_eq!(result, Err(SeedStoreError::DuplicateAssignment));
    assert_eq!(db.count("member_projects").await, 0);

    assert_eq!(store.add_assignments(&[row]).await, Ok(1));

    let assignments = store
        .get_assignments()
        .await
        .expect("Failed to read assignments");
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].member, member);
    assert_eq!(assignments[0].project, project);
    assert_eq!(assignments[0].assigned_at, assigned_at);

    assert_eq!(store.delete_assignments().await, Ok(1));
    assert_eq!(db.count("member_projects").await, 0);
}
