//! eSchool Core - contextual help and project discovery
//!
//! This crate holds the logic behind two parts of the eSchool UI:
//! - The help engine: tooltip preferences, the seen set, and the rules that
//!   decide whether a tooltip renders and which persona presents it
//! - Project discovery: search and categorical filtering, carousel paging,
//!   and grouping for the dashboard charts
//!
//! ## Persistence
//!
//! The help engine reads and writes through [`KeyValueStore`]. Use
//! [`MemoryStore`] in tests; `eschool-store` provides a durable one.
//!
//! ```
//! use eschool_core::{HelpConfig, HelpEngine, MemoryStore, TooltipRecord, TooltipVisibility};
//!
//! let mut help = HelpEngine::load(MemoryStore::new(), HelpConfig::default());
//! help.register_tooltip("search", TooltipRecord::new("Search by name").essential());
//! help.set_visibility(TooltipVisibility::Essential);
//! assert!(help.should_show("search"));
//!
//! help.mark_seen("search");
//! assert!(!help.should_show("search"));
//! ```

mod config;
mod error;
pub mod help;
mod identity;
mod persona;
pub mod project;
mod rng;
mod storage;

pub use config::{FilterConfig, HelpConfig, DEFAULT_KEY_PREFIX};
pub use error::{Error, Result};
pub use help::{
    CharacterPreference, HelpEngine, HelpPreferences, ResolvedTooltip, SeenTooltips,
    TooltipPosition, TooltipPriority, TooltipRecord, TooltipRegistry, TooltipText,
    TooltipVisibility,
};
pub use identity::{ProjectId, TooltipId, UserId};
pub use persona::{ContextPersonas, Persona};
pub use project::{
    distribution, featured_projects, filter_projects, group_by_category, group_by_stage,
    group_by_team_size, my_projects, paginate, DistributionBar, Paginator, Project,
    ProjectFilters, TeamSizeBucket, TeamSizeFilter,
};
pub use rng::{HelpRng, RandomSource};
pub use storage::{KeyValueStore, MemoryStore};
