//! Project listing logic: filtering, paging and dashboard grouping
//!
//! Everything here is a pure function of its inputs. The project list itself
//! comes from the REST backend and is only read.

mod analytics;
mod filter;
mod model;
mod paging;

pub use analytics::{
    distribution, group_by_category, group_by_stage, group_by_team_size, DistributionBar,
};
pub use filter::{
    featured_projects, filter_projects, matches_search, my_projects, ProjectFilters,
    TeamSizeFilter, ANY,
};
pub use model::{Project, TeamSizeBucket, MEDIUM_TEAM_MAX, SMALL_TEAM_MAX};
pub use paging::{paginate, Paginator};
