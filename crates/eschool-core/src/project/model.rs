//! Project records as served by the REST backend

use crate::identity::{ProjectId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A project row
///
/// Only the fields the listing views read are modelled. Text fields that are
/// missing from a payload decode as empty strings; categorical fields as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
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
    #[serde(default)]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Project {
    /// Create a project with only an ID and a name
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(id),
            name: name.into(),
            description: String::new(),
            category: None,
            stage: None,
            max_team_size: None,
            team_size: 0,
            created_by: None,
            is_featured: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the stage
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Set the current team size and its maximum
    pub fn with_team(mut self, team_size: u32, max_team_size: u32) -> Self {
        self.team_size = team_size;
        self.max_team_size = Some(max_team_size);
        self
    }

    /// Set the owner
    pub fn created_by(mut self, owner: UserId) -> Self {
        self.created_by = Some(owner);
        self
    }

    /// Mark the project as featured
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Bucket for `max_team_size`, if the record has one
    pub fn team_size_bucket(&self) -> Option<TeamSizeBucket> {
        self.max_team_size.map(TeamSizeBucket::of)
    }

    /// Seats still open on the team
    pub fn open_slots(&self) -> u32 {
        self.max_team_size
            .unwrap_or(0)
            .saturating_sub(self.team_size)
    }
}

/// Largest `max_team_size` that still counts as small
pub const SMALL_TEAM_MAX: u32 = 5;
/// Largest `max_team_size` that still counts as medium
pub const MEDIUM_TEAM_MAX: u32 = 10;

/// Coarse grouping of a project's maximum team size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSizeBucket {
    /// 5 or fewer
    Small,
    /// 6 to 10
    Medium,
    /// More than 10
    Large,
}

impl TeamSizeBucket {
    pub const ALL: [TeamSizeBucket; 3] =
        [TeamSizeBucket::Small, TeamSizeBucket::Medium, TeamSizeBucket::Large];

    /// Bucket for a maximum team size
    pub fn of(max_team_size: u32) -> Self {
        if max_team_size <= SMALL_TEAM_MAX {
            TeamSizeBucket::Small
        } else if max_team_size <= MEDIUM_TEAM_MAX {
            TeamSizeBucket::Medium
        } else {
            TeamSizeBucket::Large
        }
    }

    /// Get the filter value for this bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSizeBucket::Small => "small",
            TeamSizeBucket::Medium => "medium",
            TeamSizeBucket::Large => "large",
        }
    }
}

impl fmt::Display for TeamSizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamSizeBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(TeamSizeBucket::Small),
            "medium" => Ok(TeamSizeBucket::Medium),
            "large" => Ok(TeamSizeBucket::Large),
            other => Err(Error::InvalidValue {
                field: "teamSize",
                value: other.to_string(),
            }),
        }
    }
}
