//! eSchool Script - catalog loader
//!
//! Loads help content and fixtures from files:
//! - Help and listing configuration (RON)
//! - Tooltip catalogs (RON)
//! - Project fixtures (RON, or JSON in the REST response shape)

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::{decode_projects_json, HelpCatalog, Loader};
pub use schema::project::ProjectDefs;
pub use schema::tooltip::TooltipDefs;
pub use schema::{ConfigFile, ProjectDef, TooltipDef};
