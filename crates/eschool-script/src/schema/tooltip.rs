//! Tooltip catalog schema

use eschool_core::{Persona, TooltipId, TooltipPriority, TooltipRecord, TooltipText};
use serde::{Deserialize, Serialize};

/// A tooltip as written in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipDef {
    /// Identifier the UI element registers under
    pub id: TooltipId,
    /// One string, or a list of pages
    pub text: TooltipText,
    /// Persona suggested for this tooltip
    #[serde(default)]
    pub character: Option<Persona>,
    /// Shown under `essential` visibility
    #[serde(default)]
    pub essential: bool,
    /// Page section the anchor lives in
    #[serde(default)]
    pub section: Option<String>,
    /// Context used for persona suggestions
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub priority: Option<TooltipPriority>,
}

impl TooltipDef {
    /// Create a tooltip definition
    pub fn new(id: impl Into<TooltipId>, text: impl Into<TooltipText>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            character: None,
            essential: false,
            section: None,
            context: None,
            priority: None,
        }
    }

    /// Split into the registry key and the record the engine stores
    pub fn into_parts(self) -> (TooltipId, TooltipRecord) {
        let record = TooltipRecord {
            text: self.text,
            character: self.character,
            is_essential: self.essential,
            section: self.section,
            context: self.context,
            priority: self.priority,
        };
        (self.id, record)
    }
}

/// A collection of tooltip definitions
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TooltipDefs {
    pub tooltips: Vec<TooltipDef>,
}
