//! Set of tooltips the user has already encountered

use crate::error::Result;
use crate::identity::TooltipId;
use indexmap::IndexSet;

/// Tooltip ids marked as seen, in the order they were first seen
///
/// Persisted as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenTooltips {
    ids: IndexSet<TooltipId>,
}

impl SeenTooltips {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id; returns `false` if it was already present
    pub fn insert(&mut self, id: TooltipId) -> bool {
        self.ids.insert(id)
    }

    /// Check whether a tooltip has been seen
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TooltipId> {
        self.ids.iter()
    }

    /// Encode as a JSON array of IDs
    pub fn to_json(&self) -> Result<String> {
        let ids: Vec<&str> = self.ids.iter().map(TooltipId::as_str).collect();
        Ok(serde_json::to_string(&ids)?)
    }

    /// Decode a persisted array; duplicate entries collapse
    pub fn from_json(raw: &str) -> Result<Self> {
        let ids: Vec<TooltipId> = serde_json::from_str(raw)?;
        Ok(Self {
            ids: ids.into_iter().collect(),
        })
    }
}

impl FromIterator<TooltipId> for SeenTooltips {
    fn from_iter<I: IntoIterator<Item = TooltipId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
