//! Project fixture schema

use eschool_core::{Project, ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// A project as written in a fixture file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub max_team_size: Option<u32>,
    #[serde(default)]
    pub team_size: u32,
    /// Owner's user ID
    #[serde(default)]
    pub owner: Option<u64>,
    #[serde(default)]
    pub featured: bool,
}

impl From<ProjectDef> for Project {
    fn from(def: ProjectDef) -> Self {
        Project {
            id: ProjectId::new(def.id),
            name: def.name,
            description: def.description,
            category: def.category,
            stage: def.stage,
            max_team_size: def.max_team_size,
            team_size: def.team_size,
            created_by: def.owner.map(UserId::new),
            is_featured: def.featured,
        }
    }
}

/// A collection of project fixtures
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectDefs {
    pub projects: Vec<ProjectDef>,
}
