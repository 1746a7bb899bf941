use chrono::{DateTime, Utc};
use color_eyre::eyre::eyre;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{
    Member, MemberAssignment, MemberId, MemberName, NewMember,
    NewMemberProject, NewProject, Project, ProjectId, ProjectName, Role,
    SeedStore, SeedStoreError, ValidationError,
};

pub struct PostgresSeedStore {
    pool: PgPool,
}

impl PostgresSeedStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    member_id: i32,
    member_name: String,
    member_role: String,
    project_id: i32,
    project_name: String,
    project_description: String,
    assigned_at: DateTime<Utc>,
}

impl TryFrom<AssignmentRow> for MemberAssignment {
    type Error = SeedStoreError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        let unexpected = |e: ValidationError| SeedStoreError::UnexpectedError(eyre!(e));
        Ok(Self {
            member: Member {
                id: MemberId::new(row.member_id),
                name: MemberName::parse(&row.member_name).map_err(unexpected)?,
                role: row.member_role.parse::<Role>().map_err(unexpected)?,
            },
            project: Project {
                id: ProjectId::new(row.project_id),
                name: ProjectName::parse(&row.project_name)
                    .map_err(unexpected)?,
                description: row.project_description,
            },
            assigned_at: row.assigned_at,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> SeedStoreError {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            SeedStoreError::UnknownReference
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            SeedStoreError::DuplicateAssignment
        }
        sqlx::Error::PoolClosed => SeedStoreError::Disconnected,
        e => SeedStoreError::UnexpectedError(eyre!(e)),
    }
}

#[async_trait::async_trait]
impl SeedStore for PostgresSeedStore {
    #[tracing::instrument(name = "Adding member to PostgreSQL", skip_all)]
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, SeedStoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO member (name, role) VALUES ($1, $2) RETURNING id
            "#,
        )
        .bind(member.name.as_ref())
        .bind(member.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Member::new(MemberId::new(id), member))
    }

    #[tracing::instrument(name = "Adding project to PostgreSQL", skip_all)]
    async fn add_project(
        &mut self,
        project: NewProject,
    ) -> Result<Project, SeedStoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO project (name, description) VALUES ($1, $2) RETURNING id
            "#,
        )
        .bind(project.name.as_ref())
        .bind(&project.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Project::new(ProjectId::new(id), project))
    }

    #[tracing::instrument(name = "Deleting all member assignments", skip_all)]
    async fn delete_assignments(&mut self) -> Result<u64, SeedStoreError> {
        let result = sqlx::query("DELETE FROM member_projects")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(
        name = "Adding member assignments to PostgreSQL",
        skip_all,
        fields(count = assignments.len())
    )]
    async fn add_assignments(
        &mut self,
        assignments: &[NewMemberProject],
    ) -> Result<u64, SeedStoreError> {
        if assignments.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO member_projects (member_id, project_id, assigned_at) ",
        );
        builder.push_values(assignments, |mut row, assignment| {
            row.push_bind(*assignment.member_id.as_ref())
                .push_bind(*assignment.project_id.as_ref())
                .push_bind(assignment.assigned_at);
        });

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(
        name = "Getting member assignments from PostgreSQL",
        skip_all
    )]
    async fn get_assignments(
        &self,
    ) -> Result<Vec<MemberAssignment>, SeedStoreError> {
        let rows: Vec<AssignmentRow> = sqlx::query_as(
            r#"
            SELECT member.id AS member_id,
                   member.name AS member_name,
                   member.role AS member_role,
                   project.id AS project_id,
                   project.name AS project_name,
                   project.description AS project_description,
                   member_projects.assigned_at
            FROM member_projects
            INNER JOIN member ON member.id = member_projects.member_id
            INNER JOIN project ON project.id = member_projects.project_id
            ORDER BY member_projects.assigned_at, member.id, project.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(MemberAssignment::try_from).collect()
    }

    #[tracing::instrument(name = "Closing PostgreSQL pool", skip_all)]
    async fn disconnect(&mut self) {
        self.pool.close().await;
    }
}
