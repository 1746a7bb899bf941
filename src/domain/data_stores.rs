use super::{
    Member, MemberAssignment, NewMember, NewMemberProject, NewProject, Project,
};
use color_eyre::eyre::Report;
use thiserror::Error;

/// The database client the seeder talks to.
#[async_trait::async_trait]
pub trait SeedStore {
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, SeedStoreError>;
    async fn add_project(
        &mut self,
        project: NewProject,
    ) -> Result<Project, SeedStoreError>;
    /// Removes every assignment and returns how many rows went away.
    async fn delete_assignments(&mut self) -> Result<u64, SeedStoreError>;
    /// Inserts all rows in a single statement; nothing is written on error.
    async fn add_assignments(
        &mut self,
        assignments: &[NewMemberProject],
    ) -> Result<u64, SeedStoreError>;
    async fn get_assignments(
        &self,
    ) -> Result<Vec<MemberAssignment>, SeedStoreError>;
    async fn disconnect(&mut self);
}

#[derive(Debug, Error)]
pub enum SeedStoreError {
    #[error("Assignment references a member or project that does not exist")]
    UnknownReference,
    #[error("Member is already assigned to this project")]
    DuplicateAssignment,
    #[error("Store connection is closed")]
    Disconnected,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for SeedStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnknownReference, Self::UnknownReference)
                | (Self::DuplicateAssignment, Self::DuplicateAssignment)
                | (Self::Disconnected, Self::Disconnected)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
