//! Engine configuration
//!
//! Both structs deserialize with every field optional, so a partial RON file
//! only overrides what it names.

use crate::help::{HelpPreferences, TooltipPosition};
use crate::persona::ContextPersonas;
use serde::{Deserialize, Serialize};

/// Default prefix for every persisted help slot
pub const DEFAULT_KEY_PREFIX: &str = "eschool.help.";

/// Configuration for the help engine
///
/// # Example
///
/// ```
/// use eschool_core::{HelpConfig, TooltipPosition};
///
/// let config = HelpConfig::default();
/// assert_eq!(config.auto_position(), TooltipPosition::Top);
/// assert_eq!(config.key("tooltipVisibility"), "eschool.help.tooltipVisibility");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Preferences used when nothing is persisted for a slot
    pub defaults: HelpPreferences,
    /// Context-to-persona suggestions used when no persona is chosen
    pub context_personas: ContextPersonas,
    /// What `auto` positioning resolves to
    auto_position: TooltipPosition,
    /// Prepended to every persistence key
    pub key_prefix: String,
}

impl HelpConfig {
    /// Set the position `auto` resolves to
    ///
    /// `Auto` itself is not a concrete position and is replaced by `Top`.
    pub fn with_auto_position(mut self, position: TooltipPosition) -> Self {
        self.auto_position = position;
        self
    }

    /// Set the default preferences
    pub fn with_defaults(mut self, defaults: HelpPreferences) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the prefix for persisted keys
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Concrete position used for `auto`
    pub fn auto_position(&self) -> TooltipPosition {
        match self.auto_position {
            TooltipPosition::Auto => TooltipPosition::Top,
            other => other,
        }
    }

    /// Full persistence key for a slot name
    pub fn key(&self, slot: &str) -> String {
        format!("{}{}", self.key_prefix, slot)
    }
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            defaults: HelpPreferences::default(),
            context_personas: ContextPersonas::default(),
            auto_position: TooltipPosition::Top,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

/// Page sizes used by the project listing views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Cards per page in the featured carousel
    pub featured_page_size: usize,
    /// Cards per page in the browse grid
    pub browse_page_size: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            featured_page_size: 3,
            browse_page_size: 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::TooltipVisibility;
    use crate::persona::Persona;

    #[test]
    fn test_auto_never_resolves_to_auto() {
        let config = HelpConfig::default().with_auto_position(TooltipPosition::Auto);
        assert_eq!(config.auto_position(), TooltipPosition::Top);

        let config = HelpConfig::default().with_auto_position(TooltipPosition::Left);
        assert_eq!(config.auto_position(), TooltipPosition::Left);
    }

    #[test]
    fn test_partial_ron() {
        let ron_str = r#"
        (
            defaults: (tooltip_visibility: "essential"),
            context_personas: (table: { "funding": guru }),
            key_prefix: "test.",
        )
        "#;

        let config: HelpConfig = ron::from_str(ron_str).unwrap();
        assert_eq!(config.defaults.tooltip_visibility, TooltipVisibility::Essential);
        assert_eq!(config.context_personas.lookup(Some("funding")), Persona::Guru);
        assert_eq!(config.context_personas.lookup(Some("projects")), Persona::Guide);
        assert_eq!(config.auto_position(), TooltipPosition::Top);
        assert_eq!(config.key("seenTooltips"), "test.seenTooltips");
    }

    #[test]
    fn test_filter_config_defaults() {
        let config: FilterConfig = ron::from_str("(browse_page_size: 12)").unwrap();
        assert_eq!(config.featured_page_size, 3);
        assert_eq!(config.browse_page_size, 12);
    }
}
