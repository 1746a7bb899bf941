use serde::Serialize;

use super::{ProjectName, ValidationError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct ProjectId(i32);

impl ProjectId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl AsRef<i32> for ProjectId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub name: ProjectName,
    pub description: String,
}

impl NewProject {
    pub fn parse(name: &str, description: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ProjectName::parse(name)?,
            description: description.to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub description: String,
}

impl Project {
    pub fn new(id: ProjectId, project: NewProject) -> Self {
        Self {
            id,
            name: project.name,
            description: project.description,
        }
    }
}
