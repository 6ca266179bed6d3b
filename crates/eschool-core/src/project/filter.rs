//! Search and categorical filtering over a project list

use crate::error::{Error, Result};
use crate::identity::UserId;
use crate::project::{Project, TeamSizeBucket};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Value a listing page uses for "no restriction"
pub const ANY: &str = "all";

/// Team-size filter as chosen in the listing toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TeamSizeFilter {
    #[default]
    Any,
    Bucket(TeamSizeBucket),
}

impl TeamSizeFilter {
    /// Check whether a project passes this team-size filter
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            TeamSizeFilter::Any => true,
            TeamSizeFilter::Bucket(bucket) => project.team_size_bucket() == Some(*bucket),
        }
    }

    /// Get the filter value as it appears in a query
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSizeFilter::Any => ANY,
            TeamSizeFilter::Bucket(bucket) => bucket.as_str(),
        }
    }
}

impl FromStr for TeamSizeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | ANY => Ok(TeamSizeFilter::Any),
            other => other.parse().map(TeamSizeFilter::Bucket),
        }
    }
}

impl TryFrom<String> for TeamSizeFilter {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TeamSizeFilter> for String {
    fn from(f: TeamSizeFilter) -> Self {
        f.as_str().to_string()
    }
}

impl From<TeamSizeBucket> for TeamSizeFilter {
    fn from(bucket: TeamSizeBucket) -> Self {
        TeamSizeFilter::Bucket(bucket)
    }
}

/// Categorical filters; an empty string or `"all"` accepts everything
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFilters {
    pub category: String,
    pub stage: String,
    pub team_size: TeamSizeFilter,
}

impl ProjectFilters {
    /// Create filters that match every project
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on a category; empty or `all` matches any
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Filter on a stage; empty or `all` matches any
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Filter on a team-size bucket
    pub fn team_size(mut self, team_size: impl Into<TeamSizeFilter>) -> Self {
        self.team_size = team_size.into();
        self
    }

    /// Check whether a project passes
    pub fn matches(&self, project: &Project) -> bool {
        field_matches(&self.category, project.category.as_deref())
            && field_matches(&self.stage, project.stage.as_deref())
            && self.team_size.matches(project)
    }
}

fn is_any(wanted: &str) -> bool {
    wanted.is_empty() || wanted == ANY
}

fn field_matches(wanted: &str, actual: Option<&str>) -> bool {
    is_any(wanted) || actual == Some(wanted)
}

/// Case-insensitive substring match on name or description
pub fn matches_search(project: &Project, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    project.name.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

/// Projects passing the search term and every filter, in input order
pub fn filter_projects<'a>(
    all: &'a [Project],
    search: &str,
    filters: &ProjectFilters,
) -> Vec<&'a Project> {
    all.iter()
        .filter(|p| matches_search(p, search) && filters.matches(p))
        .collect()
}

/// Projects created by `owner`; nobody signed in means no projects
pub fn my_projects(all: &[Project], owner: Option<UserId>) -> Vec<&Project> {
    let Some(owner) = owner else {
        return Vec::new();
    };
    all.iter().filter(|p| p.created_by == Some(owner)).collect()
}

/// Projects flagged for the featured carousel, in input order
pub fn featured_projects(all: &[Project]) -> Vec<&Project> {
    all.iter().filter(|p| p.is_featured).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new(1, "TutorBot").with_category("AI").with_team(1, 4),
            Project::new(2, "Vision Lab").with_category("AI").with_team(3, 12),
            Project::new(3, "Ledger").with_category("FinTech").with_team(2, 8),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<u64> {
        projects.iter().map(|p| p.id.raw()).collect()
    }

    #[test]
    fn test_category_filter_keeps_order() {
        let all = sample();
        let filters = ProjectFilters::new().category("AI").stage(ANY).team_size(TeamSizeFilter::Any);
        assert_eq!(ids(&filter_projects(&all, "", &filters)), vec![1, 2]);
    }

    #[test]
    fn test_team_size_filter() {
        let all = sample();
        let filters = ProjectFilters::new().team_size(TeamSizeBucket::Large);
        assert_eq!(ids(&filter_projects(&all, "", &filters)), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        let all = vec![
            Project::new(1, "Campus Market").with_description("Buy and sell textbooks"),
            Project::new(2, "Study Group Finder"),
            Project::new(3, "Notes").with_description("Shared STUDY notes"),
        ];
        let filters = ProjectFilters::default();
        assert_eq!(ids(&filter_projects(&all, "study", &filters)), vec![2, 3]);
        assert_eq!(ids(&filter_projects(&all, "TEXTBOOK", &filters)), vec![1]);
        assert_eq!(ids(&filter_projects(&all, "", &filters)), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_fields_never_match_specific_filters() {
        let all = vec![Project::new(1, "Bare")];
        assert_eq!(filter_projects(&all, "", &ProjectFilters::new().category("AI")).len(), 0);
        assert_eq!(filter_projects(&all, "", &ProjectFilters::new().stage("Idea")).len(), 0);
        assert_eq!(
            filter_projects(&all, "", &ProjectFilters::new().team_size(TeamSizeBucket::Small)).len(),
            0
        );
        assert_eq!(filter_projects(&all, "", &ProjectFilters::new()).len(), 1);
    }

    #[test]
    fn test_team_size_filter_parse() {
        assert_eq!("".parse::<TeamSizeFilter>().unwrap(), TeamSizeFilter::Any);
        assert_eq!("all".parse::<TeamSizeFilter>().unwrap(), TeamSizeFilter::Any);
        assert_eq!(
            "medium".parse::<TeamSizeFilter>().unwrap(),
            TeamSizeFilter::Bucket(TeamSizeBucket::Medium)
        );
        assert!("huge".parse::<TeamSizeFilter>().is_err());
    }

    #[test]
    fn test_filters_from_query_json() {
        let filters: ProjectFilters =
            serde_json::from_str(r#"{"category": "AI", "teamSize": "small"}"#).unwrap();
        assert_eq!(filters.stage, "");
        assert_eq!(filters.team_size, TeamSizeFilter::Bucket(TeamSizeBucket::Small));
    }

    #[test]
    fn test_my_projects() {
        let all = vec![
            Project::new(1, "a").created_by(UserId::new(7)),
            Project::new(2, "b").created_by(UserId::new(8)),
            Project::new(3, "c"),
            Project::new(4, "d").created_by(UserId::new(7)),
        ];
        assert_eq!(ids(&my_projects(&all, Some(UserId::new(7)))), vec![1, 4]);
        assert!(my_projects(&all, None).is_empty());
    }

    #[test]
    fn test_featured_projects() {
        let all = vec![
            Project::new(1, "a").featured(),
            Project::new(2, "b"),
            Project::new(3, "c").featured(),
        ];
        assert_eq!(ids(&featured_projects(&all)), vec![1, 3]);
    }

    const CATEGORIES: [&str; 3] = ["AI", "FinTech", "EdTech"];
    const STAGES: [&str; 3] = ["Idea", "MVP", "Growth"];
    const WORDS: [&str; 4] = ["tutor", "Market", "lab", "ai"];

    prop_compose! {
        fn arbitrary_project()
            (id in 0u64..1000,
             name in prop::sample::select(WORDS.to_vec()),
             description in prop::sample::select(WORDS.to_vec()),
             category in prop::option::of(prop::sample::select(CATEGORIES.to_vec())),
             stage in prop::option::of(prop::sample::select(STAGES.to_vec())),
             max in prop::option::of(1u32..16))
            -> Project
        {
            Project {
                id: crate::identity::ProjectId::new(id),
                name: format!("{} project", name),
                description: description.to_string(),
                category: category.map(str::to_string),
                stage: stage.map(str::to_string),
                max_team_size: max,
                team_size: 0,
                created_by: None,
                is_featured: false,
            }
        }
    }

    fn arbitrary_choice(options: &'static [&'static str]) -> impl Strategy<Value = String> {
        let mut all: Vec<&'static str> = vec!["", ANY];
        all.extend_from_slice(options);
        prop::sample::select(all).prop_map(str::to_string)
    }

    /// Straight transcription of the listing rules, for comparison
    fn reference_filter(project: &Project, search: &str, category: &str, stage: &str, size: &str) -> bool {
        let search_ok = search.is_empty()
            || project.name.to_lowercase().contains(&search.to_lowercase())
            || project.description.to_lowercase().contains(&search.to_lowercase());
        let category_ok = category.is_empty()
            || category == "all"
            || project.category.as_deref() == Some(category);
        let stage_ok = stage.is_empty() || stage == "all" || project.stage.as_deref() == Some(stage);
        let size_ok = match (size, project.max_team_size) {
            ("" | "all", _) => true,
            ("small", Some(m)) => m <= 5,
            ("medium", Some(m)) => m > 5 && m <= 10,
            ("large", Some(m)) => m > 10,
            _ => false,
        };
        search_ok && category_ok && stage_ok && size_ok
    }

    proptest! {
        #[test]
        fn prop_filter_is_conjunction_of_predicates(
            projects in prop::collection::vec(arbitrary_project(), 0..30),
            search in prop::sample::select(vec!["", "tutor", "MARKET", "proj", "zzz"]),
            category in arbitrary_choice(&CATEGORIES),
            stage in arbitrary_choice(&STAGES),
            size in arbitrary_choice(&["small", "medium", "large"]),
        ) {
            let filters = ProjectFilters::new()
                .category(category.clone())
                .stage(stage.clone())
                .team_size(size.parse::<TeamSizeFilter>().unwrap());

            let got: Vec<*const Project> = filter_projects(&projects, search, &filters)
                .into_iter()
                .map(|p| p as *const Project)
                .collect();
            let expected: Vec<*const Project> = projects
                .iter()
                .filter(|p| reference_filter(p, search, &category, &stage, &size))
                .map(|p| p as *const Project)
                .collect();

            prop_assert_eq!(got, expected);
        }
    }
}
