//! Helper personas shown in tooltip headers

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A themed helper identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Tutor,
    Mentor,
    Coach,
    Guide,
    Buddy,
    Guru,
    Expert,
    Wizard,
}

impl Persona {
    /// Every persona, in a fixed order
    pub const ALL: [Persona; 8] = [
        Persona::Tutor,
        Persona::Mentor,
        Persona::Coach,
        Persona::Guide,
        Persona::Buddy,
        Persona::Guru,
        Persona::Expert,
        Persona::Wizard,
    ];

    /// The persisted tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Tutor => "tutor",
            Persona::Mentor => "mentor",
            Persona::Coach => "coach",
            Persona::Guide => "guide",
            Persona::Buddy => "buddy",
            Persona::Guru => "guru",
            Persona::Expert => "expert",
            Persona::Wizard => "wizard",
        }
    }

    /// Header title shown next to the persona icon
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Tutor => "Tutor",
            Persona::Mentor => "Mentor",
            Persona::Coach => "Coach",
            Persona::Guide => "Guide",
            Persona::Buddy => "Study Buddy",
            Persona::Guru => "Guru",
            Persona::Expert => "Expert",
            Persona::Wizard => "Wizard",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Persona::Tutor => "📚",
            Persona::Mentor => "🧭",
            Persona::Coach => "🏆",
            Persona::Guide => "🗺️",
            Persona::Buddy => "🤝",
            Persona::Guru => "🧘",
            Persona::Expert => "🎓",
            Persona::Wizard => "🧙",
        }
    }

    /// Accent colour (hex) for the tooltip header
    pub fn accent_color(&self) -> &'static str {
        match self {
            Persona::Tutor => "#3b82f6",
            Persona::Mentor => "#8b5cf6",
            Persona::Coach => "#f59e0b",
            Persona::Guide => "#10b981",
            Persona::Buddy => "#ec4899",
            Persona::Guru => "#6366f1",
            Persona::Expert => "#0ea5e9",
            Persona::Wizard => "#a855f7",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::InvalidValue {
                field: "persona",
                value: s.to_string(),
            })
    }
}

/// Lookup table from a tooltip's context string to a suggested persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextPersonas {
    /// Persona per context
    #[serde(default)]
    pub table: IndexMap<String, Persona>,
    /// Used for contexts missing from the table
    #[serde(default = "default_fallback")]
    pub fallback: Persona,
}

fn default_fallback() -> Persona {
    Persona::Guide
}

impl ContextPersonas {
    /// Create an empty table with the given fallback
    pub fn new(fallback: Persona) -> Self {
        Self {
            table: IndexMap::new(),
            fallback,
        }
    }

    /// Add or replace a mapping
    pub fn with(mut self, context: impl Into<String>, persona: Persona) -> Self {
        self.table.insert(context.into(), persona);
        self
    }

    /// Persona for a context; unknown or absent contexts get the fallback
    pub fn lookup(&self, context: Option<&str>) -> Persona {
        context
            .and_then(|c| self.table.get(c))
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for ContextPersonas {
    fn default() -> Self {
        Self::new(default_fallback())
            .with("projects", Persona::Mentor)
            .with("learning", Persona::Tutor)
            .with("courses", Persona::Tutor)
            .with("competitions", Persona::Coach)
            .with("schools", Persona::Guide)
            .with("funding", Persona::Expert)
            .with("team", Persona::Buddy)
            .with("community", Persona::Buddy)
            .with("analytics", Persona::Guru)
            .with("ai", Persona::Wizard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for persona in Persona::ALL {
            assert_eq!(persona.as_str().parse::<Persona>().unwrap(), persona);
        }
        assert!("sensei".parse::<Persona>().is_err());
    }

    #[test]
    fn test_default_context_table() {
        let table = ContextPersonas::default();
        assert_eq!(table.lookup(Some("projects")), Persona::Mentor);
        assert_eq!(table.lookup(Some("learning")), Persona::Tutor);
        assert_eq!(table.lookup(Some("unknown-page")), Persona::Guide);
        assert_eq!(table.lookup(None), Persona::Guide);
    }

    #[test]
    fn test_context_table_ron() {
        let ron_str = r#"
        (
            table: { "projects": coach },
            fallback: wizard,
        )
        "#;

        let table: ContextPersonas = ron::from_str(ron_str).unwrap();
        assert_eq!(table.lookup(Some("projects")), Persona::Coach);
        assert_eq!(table.lookup(Some("learning")), Persona::Wizard);
    }
}
