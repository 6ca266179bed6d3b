//! Contextual help: preferences, tooltip registry and visibility rules

mod engine;
mod preferences;
mod seen;
mod tooltip;

pub use engine::{slots, HelpEngine, ResolvedTooltip};
pub use preferences::{CharacterPreference, HelpPreferences, TooltipPosition, TooltipVisibility};
pub use seen::SeenTooltips;
pub use tooltip::{TooltipPriority, TooltipRecord, TooltipRegistry, TooltipText};
