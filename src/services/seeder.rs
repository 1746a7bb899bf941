use tracing::{info, warn};

use crate::domain::{
    CandidateMember, Member, MemberAssignment, NewProject, Project, SeedError,
    SeedStore,
};
use crate::services::assignments::{replace_assignments, AssignmentPlan};
use crate::utils::constants::seed;
use crate::utils::tracing::as_json;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSeed {
    pub name: String,
    pub description: String,
}

impl ProjectSeed {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Everything a seed run created or read back.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub members: Vec<Member>,
    pub rejected_members: usize,
    pub projects: Vec<Project>,
    pub assignments_removed: u64,
    pub assignments_inserted: u64,
    pub assignments: Vec<MemberAssignment>,
}

#[derive(Debug, Clone)]
pub struct Seeder {
    candidates: Vec<CandidateMember>,
    projects: Vec<ProjectSeed>,
    plan: AssignmentPlan,
}

impl Seeder {
    pub fn new(
        candidates: Vec<CandidateMember>,
        projects: Vec<ProjectSeed>,
        plan: AssignmentPlan,
    ) -> Self {
        Self {
            candidates,
            projects,
            plan,
        }
    }

    /// The fixed members, projects and assignments this tool ships with.
    pub fn from_fixtures() -> Result<Self, SeedError> {
        let candidates = seed::MEMBERS
            .iter()
            .map(|(name, role)| CandidateMember::new(name, role))
            .collect();
        let projects = seed::PROJECTS
            .iter()
            .map(|(name, description)| ProjectSeed::new(name, description))
            .collect();
        let plan = AssignmentPlan::parse(seed::ASSIGNMENTS)?;

        Ok(Self::new(candidates, projects, plan))
    }

    #[tracing::instrument(name = "Seeding", skip_all)]
    pub async fn run<S: SeedStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<SeedReport, SeedError> {
        let (members, rejected_members) = self.seed_members(store).await?;
        let projects = self.seed_projects(store).await?;

        let rows = self.plan.resolve(&members, &projects)?;
        let replaced = replace_assignments(store, &rows).await?;

        let assignments = store.get_assignments().await?;

        Ok(SeedReport {
            members,
            rejected_members,
            projects,
            assignments_removed: replaced.removed,
            assignments_inserted: replaced.inserted,
            assignments,
        })
    }

    /// Inserts candidates that pass validation, one at a time. Returns the
    /// created members and the number of rejected candidates.
    #[tracing::instrument(name = "Seeding members", skip_all)]
    pub async fn seed_members<S: SeedStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<(Vec<Member>, usize), SeedError> {
        let mut created = Vec::with_capacity(self.candidates.len());
        let mut rejected = 0;

        for candidate in &self.candidates {
            let new_member = match candidate.parse() {
                Ok(new_member) => new_member,
                Err(e) => {
                    warn!(
                        candidate = %as_json(candidate),
                        violations = %as_json(&e.violations),
                        "Validation error, skipping member"
                    );
                    rejected += 1;
                    continue;
                }
            };

            let member = store.add_member(new_member).await?;
            info!(member = %as_json(&member), "Member added successfully");
            created.push(member);
        }

        Ok((created, rejected))
    }

    #[tracing::instrument(name = "Seeding projects", skip_all)]
    pub async fn seed_projects<S: SeedStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<Vec<Project>, SeedError> {
        let mut created = Vec::with_capacity(self.projects.len());

        for seed in &self.projects {
            let new_project = NewProject::parse(&seed.name, &seed.description)?;
            let project = store.add_project(new_project).await?;
            info!(project = %as_json(&project), "Created project");
            created.push(project);
        }

        Ok(created)
    }
}
