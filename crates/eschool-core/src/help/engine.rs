//! The help-preference engine
//!
//! Owns the preferences, the seen set and the tooltip registry for one
//! session, and decides whether a given tooltip should render.

use crate::config::HelpConfig;
use crate::help::preferences::{decode_flag, encode_flag};
use crate::help::{
    CharacterPreference, HelpPreferences, SeenTooltips, TooltipPosition, TooltipRecord,
    TooltipRegistry, TooltipText, TooltipVisibility,
};
use crate::identity::TooltipId;
use crate::persona::Persona;
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;
use tracing::{debug, warn};

/// Persisted slot names, appended to the configured key prefix
pub mod slots {
    pub const VISIBILITY: &str = "tooltipVisibility";
    pub const CHARACTER: &str = "characterPreference";
    pub const POSITION: &str = "tooltipPosition";
    pub const INTERACTIVE_MODE: &str = "interactiveMode";
    pub const SEEN: &str = "seenTooltips";
}

/// A tooltip that should render now, with its presentation resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTooltip<'a> {
    pub id: &'a TooltipId,
    pub text: &'a TooltipText,
    pub persona: Persona,
    pub position: TooltipPosition,
    pub interactive: bool,
}

/// Help state for one session
///
/// Every mutation is applied in memory first and then written through to the
/// store. If the store fails, the engine logs a warning and keeps working in
/// memory for the rest of the session.
pub struct HelpEngine<S: KeyValueStore> {
    store: S,
    config: HelpConfig,
    preferences: HelpPreferences,
    seen: SeenTooltips,
    registry: TooltipRegistry,
    persistent: bool,
}

impl<S: KeyValueStore> HelpEngine<S> {
    /// Build an engine from whatever the store holds
    ///
    /// Missing slots take the configured defaults. Unreadable values are
    /// logged and replaced by defaults; this never fails.
    pub fn load(store: S, config: HelpConfig) -> Self {
        let mut engine = Self {
            store,
            preferences: config.defaults.clone(),
            config,
            seen: SeenTooltips::new(),
            registry: TooltipRegistry::new(),
            persistent: true,
        };

        if let Some(raw) = engine.read_slot(slots::VISIBILITY) {
            let visibility = TooltipVisibility::parse(&raw);
            if !visibility.is_recognized() {
                warn!(value = %raw, "unrecognized tooltip visibility, no tooltips will show");
            }
            engine.preferences.tooltip_visibility = visibility;
        }

        if let Some(raw) = engine.read_slot(slots::CHARACTER) {
            match raw.parse::<CharacterPreference>() {
                Ok(pref) => engine.preferences.character_preference = pref,
                Err(e) => warn!(error = %e, "ignoring persisted character preference"),
            }
        }

        if let Some(raw) = engine.read_slot(slots::POSITION) {
            match raw.parse::<TooltipPosition>() {
                Ok(pos) => engine.preferences.tooltip_position = pos,
                Err(e) => warn!(error = %e, "ignoring persisted tooltip position"),
            }
        }

        if let Some(raw) = engine.read_slot(slots::INTERACTIVE_MODE) {
            match decode_flag(&raw) {
                Ok(flag) => engine.preferences.interactive_mode = flag,
                Err(e) => warn!(error = %e, "ignoring persisted interactive mode"),
            }
        }

        if let Some(raw) = engine.read_slot(slots::SEEN) {
            match SeenTooltips::from_json(&raw) {
                Ok(seen) => engine.seen = seen,
                Err(e) => warn!(error = %e, "seen tooltips are corrupted, starting empty"),
            }
        }

        debug!(
            seen = engine.seen.len(),
            persistent = engine.persistent,
            "help preferences loaded"
        );
        engine
    }

    /// Register or update a tooltip's metadata
    ///
    /// Re-registering identical data changes nothing and returns `false`.
    /// For `essential` visibility a tooltip must be registered before (or in
    /// the same pass as) it is queried with [`should_show`](Self::should_show).
    pub fn register_tooltip(&mut self, id: impl Into<TooltipId>, record: TooltipRecord) -> bool {
        let id = id.into();
        let changed = self.registry.register(id.clone(), record);
        if changed {
            debug!(tooltip = %id, version = self.registry.version(), "tooltip registered");
        }
        changed
    }

    /// Record that the user has encountered a tooltip
    pub fn mark_seen(&mut self, id: impl Into<TooltipId>) {
        if self.seen.insert(id.into()) {
            self.persist_seen();
        }
    }

    /// Forget every seen tooltip
    pub fn reset_seen(&mut self) {
        self.seen.clear();
        self.persist_seen();
    }

    /// Whether a tooltip should render right now
    pub fn should_show(&self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        match &self.preferences.tooltip_visibility {
            TooltipVisibility::All => true,
            TooltipVisibility::Essential => {
                self.registry.get(id).is_some_and(|record| record.is_essential)
            }
            TooltipVisibility::None => false,
            TooltipVisibility::Unrecognized(_) => false,
        }
    }

    /// Pick the persona that presents a tooltip
    ///
    /// A `random` preference draws from `rng` on every call. A fixed persona
    /// preference wins over anything per-tooltip. With no preference set, the
    /// tooltip's own character is used, then its context.
    pub fn resolve_character<R: RandomSource>(
        &self,
        rng: &mut R,
        explicit: Option<Persona>,
        context: Option<&str>,
    ) -> Persona {
        match self.preferences.character_preference {
            CharacterPreference::Random => rng
                .pick(&Persona::ALL)
                .copied()
                .unwrap_or(self.config.context_personas.fallback),
            CharacterPreference::Persona(persona) => persona,
            CharacterPreference::Unset => {
                explicit.unwrap_or_else(|| self.config.context_personas.lookup(context))
            }
        }
    }

    /// Concrete position for a tooltip; never returns `Auto`
    pub fn resolve_position(&self, explicit: Option<TooltipPosition>) -> TooltipPosition {
        match explicit.unwrap_or(self.preferences.tooltip_position) {
            TooltipPosition::Auto => self.config.auto_position(),
            position => position,
        }
    }

    /// Resolve everything needed to render a registered tooltip
    ///
    /// Returns `None` if the tooltip is unknown or should not show.
    pub fn resolve_tooltip<R: RandomSource>(
        &self,
        rng: &mut R,
        id: &str,
        explicit_position: Option<TooltipPosition>,
    ) -> Option<ResolvedTooltip<'_>> {
        if !self.should_show(id) {
            return None;
        }
        let (id, record) = self.registry.get_entry(id)?;
        Some(ResolvedTooltip {
            id,
            text: &record.text,
            persona: self.resolve_character(rng, record.character, record.context.as_deref()),
            position: self.resolve_position(explicit_position),
            interactive: self.preferences.interactive_mode,
        })
    }

    /// Registered tooltips that would show now, in registration order
    pub fn visible_tooltips(&self) -> impl Iterator<Item = &TooltipId> {
        self.registry
            .iter()
            .map(|(id, _)| id)
            .filter(move |id| self.should_show(id.as_str()))
    }

    /// Set which tooltips may show and persist the choice
    pub fn set_visibility(&mut self, visibility: TooltipVisibility) {
        let raw = visibility.as_str().to_string();
        self.preferences.tooltip_visibility = visibility;
        self.write_slot(slots::VISIBILITY, &raw);
    }

    /// Set the persona preference and persist it
    pub fn set_character_preference(&mut self, preference: impl Into<CharacterPreference>) {
        let preference = preference.into();
        self.preferences.character_preference = preference;
        self.write_slot(slots::CHARACTER, preference.as_str());
    }

    /// Set the global tooltip position and persist it
    pub fn set_position(&mut self, position: TooltipPosition) {
        self.preferences.tooltip_position = position;
        self.write_slot(slots::POSITION, position.as_str());
    }

    /// Turn interactive tooltips on or off and persist the flag
    pub fn set_interactive_mode(&mut self, enabled: bool) {
        self.preferences.interactive_mode = enabled;
        self.write_slot(slots::INTERACTIVE_MODE, encode_flag(enabled));
    }

    /// Get the current preferences
    pub fn preferences(&self) -> &HelpPreferences {
        &self.preferences
    }

    /// Get the engine configuration
    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    /// Get a registered tooltip
    pub fn tooltip(&self, id: &str) -> Option<&TooltipRecord> {
        self.registry.get(id)
    }

    /// Get the tooltip registry
    pub fn registry(&self) -> &TooltipRegistry {
        &self.registry
    }

    /// Check whether the user has already seen a tooltip
    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Get the seen set
    pub fn seen(&self) -> &SeenTooltips {
        &self.seen
    }

    /// `false` once a store failure has switched the session to memory only
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Get the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and return its store
    pub fn into_store(self) -> S {
        self.store
    }

    fn read_slot(&mut self, slot: &str) -> Option<String> {
        if !self.persistent {
            return None;
        }
        let key = self.config.key(slot);
        match self.store.get(&key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "help store unavailable, continuing in memory");
                self.persistent = false;
                None
            }
        }
    }

    fn write_slot(&mut self, slot: &str, value: &str) {
        if !self.persistent {
            debug!(slot, "skipping write, help store is in memory-only mode");
            return;
        }
        let key = self.config.key(slot);
        if let Err(e) = self.store.set(&key, value) {
            warn!(key = %key, error = %e, "help store write failed, continuing in memory");
            self.persistent = false;
        }
    }

    fn persist_seen(&mut self) {
        match self.seen.to_json() {
            Ok(json) => self.write_slot(slots::SEEN, &json),
            Err(e) => warn!(error = %e, "could not encode seen tooltips"),
        }
    }
}
