//! Schema definitions for catalog files

pub mod project;
pub mod tooltip;

pub use project::ProjectDef;
pub use tooltip::TooltipDef;

use eschool_core::{FilterConfig, HelpConfig};
use serde::{Deserialize, Serialize};

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub help: HelpConfig,
    pub filters: FilterConfig,
}
