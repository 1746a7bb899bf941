use chrono::{DateTime, Utc};
use color_eyre::eyre::eyre;
use tracing::info;

use crate::domain::{
    Member, NewMemberProject, Project, SeedError, SeedStore,
};

/// An assignment expressed by position in the lists of created records.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedAssignment {
    pub member_index: usize,
    pub project_index: usize,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentPlan {
    entries: Vec<PlannedAssignment>,
}

impl AssignmentPlan {
    pub fn new(entries: Vec<PlannedAssignment>) -> Self {
        Self { entries }
    }

    /// Builds a plan from `(member index, project index, RFC 3339 time)`.
    pub fn parse(entries: &[(usize, usize, &str)]) -> Result<Self, SeedError> {
        entries
            .iter()
            .map(|(member_index, project_index, assigned_at)| {
                let assigned_at = assigned_at
                    .parse::<DateTime<Utc>>()
                    .map_err(|e| SeedError::UnexpectedError(eyre!(e)))?;
                Ok(PlannedAssignment {
                    member_index: *member_index,
                    project_index: *project_index,
                    assigned_at,
                })
            })
            .collect::<Result<Vec<_>, SeedError>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn required_members(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.member_index + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn required_projects(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.project_index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Maps positions to store ids, refusing to run when a referenced
    /// position was never created.
    pub fn resolve(
        &self,
        members: &[Member],
        projects: &[Project],
    ) -> Result<Vec<NewMemberProject>, SeedError> {
        let required_members = self.required_members();
        let required_projects = self.required_projects();
        if members.len() < required_members || projects.len() < required_projects
        {
            return Err(SeedError::InsufficientData {
                members: members.len(),
                projects: projects.len(),
                required_members,
                required_projects,
            });
        }

        Ok(self
            .entries
            .iter()
            .map(|entry| {
                NewMemberProject::new(
                    members[entry.member_index].id,
                    projects[entry.project_index].id,
                    entry.assigned_at,
                )
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replaced {
    pub removed: u64,
    pub inserted: u64,
}

/// Full replace of the assignment table: delete everything, then insert
/// `rows` in one statement.
#[tracing::instrument(name = "Replacing member assignments", skip_all)]
pub async fn replace_assignments<S: SeedStore + ?Sized>(
    store: &mut S,
    rows: &[NewMemberProject],
) -> Result<Replaced, SeedError> {
    let removed = store.delete_assignments().await?;
    info!(removed, "Cleared existing assignments");

    info!("Assigning members to projects...");
    let inserted = store.add_assignments(rows).await?;
    info!(inserted, "Assignments created");

    Ok(Replaced { removed, inserted })
}
