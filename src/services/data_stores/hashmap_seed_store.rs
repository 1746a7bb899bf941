use std::collections::BTreeMap;

use crate::domain::{
    Member, MemberAssignment, MemberId, NewMember, NewMemberProject,
    NewProject, Project, ProjectId, SeedStore, SeedStoreError,
};

/// In-memory store with the same referential rules as the SQL schema.
#[derive(Default)]
pub struct HashmapSeedStore {
    members: BTreeMap<MemberId, Member>,
    projects: BTreeMap<ProjectId, Project>,
    assignments: Vec<NewMemberProject>,
    next_member_id: i32,
    next_project_id: i32,
    disconnect_count: usize,
}

impl HashmapSeedStore {
    pub fn members(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    pub fn projects(&self) -> Vec<&Project> {
        self.projects.values().collect()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnect_count > 0
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnect_count
    }

    fn ensure_connected(&self) -> Result<(), SeedStoreError> {
        if self.is_disconnected() {
            return Err(SeedStoreError::Disconnected);
        }
        Ok(())
    }

    fn check_assignment(
        &self,
        assignment: &NewMemberProject,
        pending: &[NewMemberProject],
    ) -> Result<(), SeedStoreError> {
        if !self.members.contains_key(&assignment.member_id)
            || !self.projects.contains_key(&assignment.project_id)
        {
            return Err(SeedStoreError::UnknownReference);
        }
        let same_key = |other: &NewMemberProject| {
            other.member_id == assignment.member_id
                && other.project_id == assignment.project_id
        };
        if self.assignments.iter().any(same_key) || pending.iter().any(same_key)
        {
            return Err(SeedStoreError::DuplicateAssignment);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeedStore for HashmapSeedStore {
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, SeedStoreError> {
        self.ensure_connected()?;
        self.next_member_id += 1;
        let member = Member::new(MemberId::new(self.next_member_id), member);
        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn add_project(
        &mut self,
        project: NewProject,
    ) -> Result<Project, SeedStoreError> {
        self.ensure_connected()?;
        self.next_project_id += 1;
        let project =
            Project::new(ProjectId::new(self.next_project_id), project);
        self.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete_assignments(&mut self) -> Result<u64, SeedStoreError> {
        self.ensure_connected()?;
        let removed = self.assignments.len() as u64;
        self.assignments.clear();
        Ok(removed)
    }

    async fn add_assignments(
        &mut self,
        assignments: &[NewMemberProject],
    ) -> Result<u64, SeedStoreError> {
        self.ensure_connected()?;
        for (i, assignment) in assignments.iter().enumerate() {
            self.check_assignment(assignment, &assignments[..i])?;
        }
        self.assignments.extend_from_slice(assignments);
        Ok(assignments.len() as u64)
    }

    async fn get_assignments(
        &self,
    ) -> Result<Vec<MemberAssignment>, SeedStoreError> {
        self.ensure_connected()?;
        let mut joined = self
            .assignments
            .iter()
            .map(|assignment| {
                let member = self.members.get(&assignment.member_id);
                let project = self.projects.get(&assignment.project_id);
                match (member, project) {
                    (Some(member), Some(project)) => Ok(MemberAssignment {
                        member: member.clone(),
                        project: project.clone(),
                        assigned_at: assignment.assigned_at,
                    }),
                    _ => Err(SeedStoreError::UnknownReference),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        joined.sort_by_key(|a| (a.assigned_at, a.member.id, a.project.id));
        Ok(joined)
    }

    async fn disconnect(&mut self) {
        self.disconnect_count += 1;
    }
}
