//! Help Tour Example
//!
//! Walks a new user through the dashboard tooltips, then browses the project
//! listing the way the UI does: search, filters, carousel paging and the
//! category chart.
//!
//! Pass a database path to keep help state between runs:
//! `cargo run -p help_tour -- /tmp/eschool-help.db`
//! Set `RUST_LOG=debug` to see engine logging.

use eschool_core::{
    distribution, featured_projects, filter_projects, group_by_category, my_projects, HelpEngine,
    HelpRng, Paginator, ProjectFilters, TeamSizeBucket, TooltipPosition, TooltipVisibility, UserId,
};
use eschool_script::Loader;
use eschool_store::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = include_str!("../catalog/config.ron");
const TOOLTIPS: &str = include_str!("../catalog/tooltips.ron");
const PROJECTS: &str = include_str!("../catalog/projects.ron");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== eSchool Help Tour ===\n");

    let mut loader = Loader::new();
    loader.load_config_str(CONFIG)?;
    loader.load_tooltips_str(TOOLTIPS)?;
    loader.load_projects_str(PROJECTS)?;
    let catalog = loader.finish();

    let store = match std::env::args().nth(1) {
        Some(path) => Store::open(path)?,
        None => Store::in_memory()?,
    };
    let mut help = HelpEngine::load(store, catalog.help.clone());
    let registered = catalog.register_all(&mut help);
    info!(registered, persistent = help.is_persistent(), "help engine ready");
    println!("Registered {} tooltips ({} already seen)\n", registered, help.seen().len());

    let mut rng = HelpRng::from_entropy();

    // First visit: everything unseen shows
    println!("Tooltips on this visit:");
    let visible: Vec<String> = help.visible_tooltips().map(|id| id.to_string()).collect();
    for id in &visible {
        if let Some(tip) = help.resolve_tooltip(&mut rng, id, None) {
            println!(
                "  [{} {} | {}] {}",
                tip.persona.emoji(),
                tip.persona.display_name(),
                tip.position,
                tip.text.page(0).unwrap_or_default()
            );
            for page in 1..tip.text.page_count() {
                println!("      page {}: {}", page + 1, tip.text.page(page).unwrap_or_default());
            }
        }
    }

    // Dismissing a tooltip marks it as seen
    for id in &visible {
        help.mark_seen(id.as_str());
    }
    println!("\nAfter dismissing: {} visible", help.visible_tooltips().count());

    // User narrows help down to essentials and resets the tour
    help.set_visibility(TooltipVisibility::Essential);
    help.set_position(TooltipPosition::Right);
    help.reset_seen();
    let essentials: Vec<String> = help.visible_tooltips().map(|id| id.to_string()).collect();
    println!("Essential tooltips after reset: {:?}\n", essentials);

    // Project listing
    let projects = catalog.project_list();
    println!("Browsing {} projects", projects.len());

    let ai = filter_projects(&projects, "", &ProjectFilters::new().category("AI"));
    println!("  category AI: {:?}", ai.iter().map(|p| p.name.as_str()).collect::<Vec<_>>());

    let small = filter_projects(
        &projects,
        "study",
        &ProjectFilters::new().team_size(TeamSizeBucket::Small),
    );
    println!("  \"study\" in small teams: {:?}", small.iter().map(|p| p.name.as_str()).collect::<Vec<_>>());

    let mine = my_projects(&projects, Some(UserId::new(1)));
    println!("  my projects: {:?}", mine.iter().map(|p| p.name.as_str()).collect::<Vec<_>>());

    let listing = filter_projects(&projects, "", &ProjectFilters::new());
    let mut grid = Paginator::new(catalog.filters.browse_page_size, listing.len());
    println!("\nBrowse grid ({} per page):", grid.page_size());
    for _ in 0..grid.total_pages() {
        let names: Vec<&str> = grid.slice(&listing).iter().map(|p| p.name.as_str()).collect();
        println!("  page {}: {:?}", grid.page() + 1, names);
        grid.next_page();
    }

    let featured = featured_projects(&projects);
    let mut carousel = Paginator::new(catalog.filters.featured_page_size, featured.len());
    println!("\nFeatured carousel ({} pages):", carousel.total_pages());
    for _ in 0..=carousel.total_pages() {
        let names: Vec<&str> = carousel.slice(&featured).iter().map(|p| p.name.as_str()).collect();
        println!("  page {}: {:?}", carousel.page() + 1, names);
        carousel.next_page();
    }

    println!("\nCategory distribution:");
    for bar in distribution(&group_by_category(&projects)) {
        println!(
            "  {:<12} {:<10} {:>5.1}%",
            bar.label,
            "#".repeat(bar.count * 2),
            bar.percent
        );
    }

    println!("\n=== Tour complete ===");
    Ok(())
}
