use chrono::{DateTime, Utc};

use super::{Member, MemberId, Project, ProjectId};

/// A row of the `member_projects` join table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMemberProject {
    pub member_id: MemberId,
    pub project_id: ProjectId,
    pub assigned_at: DateTime<Utc>,
}

impl NewMemberProject {
    pub fn new(
        member_id: MemberId,
        project_id: ProjectId,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            member_id,
            project_id,
            assigned_at,
        }
    }
}

/// An assignment read back together with its member and project.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAssignment {
    pub member: Member,
    pub project: Project,
    pub assigned_at: DateTime<Utc>,
}
