//! Catalog loader for RON and JSON files

use crate::error::{Error, Result};
use crate::schema::project::ProjectDefs;
use crate::schema::tooltip::TooltipDefs;
use crate::schema::{ConfigFile, ProjectDef, TooltipDef};
use eschool_core::{
    FilterConfig, HelpConfig, HelpEngine, KeyValueStore, Project, ProjectId, TooltipId,
    TooltipRecord,
};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Everything loaded from catalog files
#[derive(Debug, Default)]
pub struct HelpCatalog {
    /// Help engine configuration
    pub help: HelpConfig,
    /// Listing page configuration
    pub filters: FilterConfig,
    /// Tooltips by ID, in file order
    pub tooltips: IndexMap<TooltipId, TooltipRecord>,
    /// Project fixtures by ID, in file order
    pub projects: IndexMap<ProjectId, Project>,
}

impl HelpCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a tooltip definition
    pub fn get_tooltip(&self, id: &str) -> Option<&TooltipRecord> {
        self.tooltips.get(id)
    }

    /// Get a project fixture
    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Project fixtures as a list, in file order
    pub fn project_list(&self) -> Vec<Project> {
        self.projects.values().cloned().collect()
    }

    /// Register every tooltip with the engine
    ///
    /// Returns how many registrations changed the engine's registry.
    pub fn register_all<S: KeyValueStore>(&self, engine: &mut HelpEngine<S>) -> usize {
        self.tooltips
            .iter()
            .filter(|(id, record)| engine.register_tooltip((*id).clone(), (*record).clone()))
            .count()
    }
}

/// Decode a REST response body holding an array of projects
pub fn decode_projects_json(body: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(body)?)
}

/// What a RON catalog file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogKind {
    Tooltips,
    Projects,
    Config,
}

/// Loader for catalog files
pub struct Loader {
    catalog: HelpCatalog,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            catalog: HelpCatalog::new(),
        }
    }

    /// Load a single file
    ///
    /// `.json` files are read as REST project payloads. RON files are
    /// dispatched on their file name, then on their top-level key.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading catalog file");

        if path.extension().is_some_and(|e| e == "json") {
            return self.load_projects_json(&content);
        }

        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        match Self::kind_by_name(filename).or_else(|| Self::kind_by_content(&content)) {
            Some(CatalogKind::Tooltips) => self.load_tooltips_str(&content),
            Some(CatalogKind::Projects) => self.load_projects_str(&content),
            Some(CatalogKind::Config) => self.load_config_str(&content),
            None => Err(Error::InvalidSchema(format!(
                "could not tell what {} contains",
                path.display()
            ))),
        }
    }

    fn kind_by_name(filename: &str) -> Option<CatalogKind> {
        if filename.contains("tooltip") {
            Some(CatalogKind::Tooltips)
        } else if filename.contains("project") {
            Some(CatalogKind::Projects)
        } else if filename.contains("config") {
            Some(CatalogKind::Config)
        } else {
            None
        }
    }

    fn kind_by_content(content: &str) -> Option<CatalogKind> {
        if content.contains("tooltips:") {
            Some(CatalogKind::Tooltips)
        } else if content.contains("projects:") {
            Some(CatalogKind::Projects)
        } else if content.contains("help:") {
            Some(CatalogKind::Config)
        } else {
            None
        }
    }

    /// Load configuration from a RON string
    pub fn load_config_str(&mut self, content: &str) -> Result<()> {
        let file: ConfigFile = ron::from_str(content)?;
        self.catalog.help = file.help;
        self.catalog.filters = file.filters;
        Ok(())
    }

    /// Load tooltips from a RON string
    pub fn load_tooltips_str(&mut self, content: &str) -> Result<()> {
        let file: TooltipDefs = ron::from_str(content)?;
        for def in file.tooltips {
            self.add_tooltip(def)?;
        }
        Ok(())
    }

    /// Load project fixtures from a RON string
    pub fn load_projects_str(&mut self, content: &str) -> Result<()> {
        let file: ProjectDefs = ron::from_str(content)?;
        for def in file.projects {
            self.add_project(def.into())?;
        }
        Ok(())
    }

    /// Load projects from a REST JSON array
    pub fn load_projects_json(&mut self, content: &str) -> Result<()> {
        for project in decode_projects_json(content)? {
            self.add_project(project)?;
        }
        Ok(())
    }

    /// Add one tooltip definition
    pub fn add_tooltip(&mut self, def: TooltipDef) -> Result<()> {
        let (id, record) = def.into_parts();
        if self.catalog.tooltips.contains_key(&id) {
            return Err(Error::DuplicateDefinition(id.to_string()));
        }
        self.catalog.tooltips.insert(id, record);
        Ok(())
    }

    /// Add one project fixture
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        if self.catalog.projects.contains_key(&project.id) {
            return Err(Error::DuplicateDefinition(project.id.to_string()));
        }
        self.catalog.projects.insert(project.id, project);
        Ok(())
    }

    /// Load all `.ron` and `.json` files from a directory
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries: Vec<_> = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        // directory order is platform dependent
        entries.sort();

        for file_path in entries {
            let loadable = file_path
                .extension()
                .is_some_and(|e| e == "ron" || e == "json");
            if loadable {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the catalog
    pub fn finish(self) -> HelpCatalog {
        self.catalog
    }

    /// Get the current catalog (for inspection during loading)
    pub fn catalog(&self) -> &HelpCatalog {
        &self.catalog
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eschool_core::{MemoryStore, Persona, TooltipVisibility};
    use pretty_assertions::assert_eq;

    const TOOLTIPS: &str = r#"
    (
        tooltips: [
            (
                id: "project-search",
                text: "Search by project name or description",
                context: Some("projects"),
                essential: true,
            ),
            (
                id: "stage-filter",
                text: ["Stages go from Idea to Growth", "Pick one to narrow the list"],
                context: Some("projects"),
            ),
        ]
    )
    "#;

    #[test]
    fn test_load_tooltips() {
        let mut loader = Loader::new();
        loader.load_tooltips_str(TOOLTIPS).unwrap();

        let catalog = loader.finish();
        assert!(catalog.get_tooltip("project-search").unwrap().is_essential);
        assert_eq!(catalog.get_tooltip("stage-filter").unwrap().text.page_count(), 2);
    }

    #[test]
    fn test_duplicate_tooltip_is_rejected() {
        let mut loader = Loader::new();
        loader.load_tooltips_str(TOOLTIPS).unwrap();
        let err = loader.load_tooltips_str(TOOLTIPS).unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition(id) if id == "project-search"));
    }

    #[test]
    fn test_load_config() {
        let content = r#"
        (
            help: (
                defaults: (tooltip_visibility: "essential", character_preference: "coach"),
            ),
            filters: (featured_page_size: 4),
        )
        "#;

        let mut loader = Loader::new();
        loader.load_config_str(content).unwrap();
        let catalog = loader.finish();
        assert_eq!(catalog.help.defaults.tooltip_visibility, TooltipVisibility::Essential);
        assert_eq!(catalog.filters.featured_page_size, 4);
        assert_eq!(catalog.filters.browse_page_size, 9);
    }

    #[test]
    fn test_register_all_is_idempotent() {
        let mut loader = Loader::new();
        loader.load_tooltips_str(TOOLTIPS).unwrap();
        let catalog = loader.finish();

        let mut engine = HelpEngine::load(MemoryStore::new(), catalog.help.clone());
        assert_eq!(catalog.register_all(&mut engine), 2);
        assert_eq!(catalog.register_all(&mut engine), 0);

        engine.set_visibility(TooltipVisibility::Essential);
        assert!(engine.should_show("project-search"));
        assert!(!engine.should_show("stage-filter"));
    }

    #[test]
    fn test_load_projects_ron_and_json() {
        let mut loader = Loader::new();
        loader
            .load_projects_str(
                r#"(projects: [(id: 1, name: "TutorBot", category: Some("AI"), max_team_size: Some(4))])"#,
            )
            .unwrap();
        loader
            .load_projects_json(r#"[{"id": 2, "name": "Ledger", "maxTeamSize": 8, "createdBy": 5}]"#)
            .unwrap();
        assert!(loader.load_projects_json(r#"[{"id": 1, "name": "Again"}]"#).is_err());

        let catalog = loader.finish();
        let names: Vec<String> = catalog.project_list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["TutorBot".to_string(), "Ledger".to_string()]);
        assert_eq!(
            catalog.get_project(ProjectId::new(2)).unwrap().max_team_size,
            Some(8)
        );
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tooltips.ron"), TOOLTIPS).unwrap();
        fs::write(
            dir.path().join("config.ron"),
            r#"(help: (context_personas: (table: { "projects": wizard })))"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("fixtures")).unwrap();
        fs::write(
            dir.path().join("fixtures").join("projects.json"),
            r#"[{"id": 9, "name": "Campus Market", "isFeatured": true}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let mut loader = Loader::new();
        loader.load_directory(dir.path()).unwrap();
        let catalog = loader.finish();

        assert_eq!(catalog.tooltips.len(), 2);
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(
            catalog.help.context_personas.lookup(Some("projects")),
            Persona::Wizard
        );
    }

    #[test]
    fn test_file_name_wins_over_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.ron");
        fs::write(
            &path,
            r#"(projects: [(id: 4, name: "Hint Library", description: "A library of tooltips: hints for UIs")])"#,
        )
        .unwrap();

        let mut loader = Loader::new();
        loader.load_file(&path).unwrap();
        let catalog = loader.finish();
        assert_eq!(catalog.projects.len(), 1);
        assert!(catalog.tooltips.is_empty());
    }

    #[test]
    fn test_content_decides_for_unnamed_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onboarding.ron");
        fs::write(&path, TOOLTIPS).unwrap();

        let mut loader = Loader::new();
        loader.load_file(&path).unwrap();
        assert_eq!(loader.catalog().tooltips.len(), 2);
    }

    #[test]
    fn test_unknown_file_is_invalid_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misc.ron");
        fs::write(&path, "(colour: \"blue\")").unwrap();

        let mut loader = Loader::new();
        assert!(matches!(loader.load_file(&path), Err(Error::InvalidSchema(_))));
    }
}
