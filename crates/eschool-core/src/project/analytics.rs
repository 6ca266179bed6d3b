//! Grouping for the dashboard distribution bars

use crate::project::{Project, TeamSizeBucket};
use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Projects grouped by category, keyed in order of first appearance
///
/// Projects without a category are grouped under the empty string, together
/// with projects whose category is literally empty.
pub fn group_by_category(all: &[Project]) -> IndexMap<String, Vec<&Project>> {
    group_by(all, |p| Some(p.category.clone().unwrap_or_default()))
}

/// Projects grouped by stage, same rules as [`group_by_category`]
pub fn group_by_stage(all: &[Project]) -> IndexMap<String, Vec<&Project>> {
    group_by(all, |p| Some(p.stage.clone().unwrap_or_default()))
}

/// Projects grouped by team-size bucket
///
/// Projects without a `max_team_size` have no bucket and are left out.
pub fn group_by_team_size(all: &[Project]) -> IndexMap<TeamSizeBucket, Vec<&Project>> {
    group_by(all, Project::team_size_bucket)
}

fn group_by<K, F>(all: &[Project], key: F) -> IndexMap<K, Vec<&Project>>
where
    K: Hash + Eq,
    F: Fn(&Project) -> Option<K>,
{
    let mut groups: IndexMap<K, Vec<&Project>> = IndexMap::new();
    for project in all {
        if let Some(k) = key(project) {
            groups.entry(k).or_default().push(project);
        }
    }
    groups
}

/// One bar of a distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBar<K> {
    pub label: K,
    pub count: usize,
    /// Share of all grouped projects, 0.0 to 100.0
    pub percent: f64,
}

/// Bars for a grouping, in the grouping's key order
pub fn distribution<K: Clone>(groups: &IndexMap<K, Vec<&Project>>) -> Vec<DistributionBar<K>> {
    let total: usize = groups.values().map(Vec::len).sum();
    if total == 0 {
        return Vec::new();
    }
    groups
        .iter()
        .map(|(label, projects)| DistributionBar {
            label: label.clone(),
            count: projects.len(),
            percent: projects.len() as f64 * 100.0 / total as f64,
        })
        .collect()
}
