//! Tooltip metadata and the session registry

use crate::identity::TooltipId;
use crate::persona::Persona;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tip content: one string, or several pages shown in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TooltipText {
    Single(String),
    Pages(Vec<String>),
}

impl TooltipText {
    /// Number of pages
    pub fn page_count(&self) -> usize {
        match self {
            TooltipText::Single(_) => 1,
            TooltipText::Pages(pages) => pages.len(),
        }
    }

    /// Content of page `index` (zero-based)
    pub fn page(&self, index: usize) -> Option<&str> {
        match self {
            TooltipText::Single(text) if index == 0 => Some(text),
            TooltipText::Single(_) => None,
            TooltipText::Pages(pages) => pages.get(index).map(String::as_str),
        }
    }

    /// Check whether the text has more than one page
    pub fn is_multi_page(&self) -> bool {
        self.page_count() > 1
    }
}

impl From<&str> for TooltipText {
    fn from(s: &str) -> Self {
        TooltipText::Single(s.to_string())
    }
}

impl From<String> for TooltipText {
    fn from(s: String) -> Self {
        TooltipText::Single(s)
    }
}

impl From<Vec<String>> for TooltipText {
    fn from(pages: Vec<String>) -> Self {
        TooltipText::Pages(pages)
    }
}

/// Classification carried by a tooltip.
///
/// Stored with the record but no visibility or ordering rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPriority {
    Low,
    Medium,
    High,
}

/// Everything a UI element registers about its tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRecord {
    pub text: TooltipText,
    #[serde(default)]
    pub character: Option<Persona>,
    /// Shown even when visibility is `essential`
    #[serde(default)]
    pub is_essential: bool,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub priority: Option<TooltipPriority>,
}

impl TooltipRecord {
    /// Create a tooltip with default metadata
    pub fn new(text: impl Into<TooltipText>) -> Self {
        Self {
            text: text.into(),
            character: None,
            is_essential: false,
            section: None,
            context: None,
            priority: None,
        }
    }

    /// Mark the tooltip as essential
    pub fn essential(mut self) -> Self {
        self.is_essential = true;
        self
    }

    /// Present the tooltip with a fixed persona
    pub fn with_character(mut self, persona: Persona) -> Self {
        self.character = Some(persona);
        self
    }

    /// Set the UI section the tooltip belongs to
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the context used to pick a persona
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TooltipPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Session-wide tooltip registry
///
/// Records are kept in registration order. `version` advances only when a
/// registration actually changes the stored data, so callers can use it to
/// skip redundant recomputation.
#[derive(Debug, Clone, Default)]
pub struct TooltipRegistry {
    records: IndexMap<TooltipId, TooltipRecord>,
    version: u64,
}

impl TooltipRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record; returns `false` when an identical one is already there
    pub fn register(&mut self, id: TooltipId, record: TooltipRecord) -> bool {
        if self.records.get(&id) == Some(&record) {
            return false;
        }
        self.records.insert(id, record);
        self.version += 1;
        true
    }

    /// Get a tooltip by ID
    pub fn get(&self, id: &str) -> Option<&TooltipRecord> {
        self.records.get(id)
    }

    /// The stored id alongside its record
    pub fn get_entry(&self, id: &str) -> Option<(&TooltipId, &TooltipRecord)> {
        self.records.get_key_value(id)
    }

    /// Check whether a tooltip is registered
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Get the version; bumps on every change to the registry
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TooltipId, &TooltipRecord)> {
        self.records.iter()
    }
}
