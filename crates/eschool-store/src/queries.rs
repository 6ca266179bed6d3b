//! Common query patterns for the database.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;

impl Store {
    /// Get all slots whose key starts with `prefix`.
    pub fn settings_with_prefix(&self, prefix: &str) -> Result<Vec<StoredSetting>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredSetting>()?;
        let iter = scan.start_with(prefix.to_string())?;
        let settings: std::result::Result<Vec<StoredSetting>, _> = iter.collect();
        settings.map_err(|e| Error::Database(e.to_string()))
    }

    /// Count slots whose key starts with `prefix`.
    pub fn count_with_prefix(&self, prefix: &str) -> Result<usize> {
        Ok(self.settings_with_prefix(prefix)?.len())
    }

    /// Delete every slot under `prefix`, e.g. one user's help state.
    pub fn clear_prefix(&self, prefix: &str) -> Result<usize> {
        let settings = self.settings_with_prefix(prefix)?;
        let removed = settings.len();

        let rw = self.db.rw_transaction()?;
        for setting in settings {
            rw.remove(setting)?;
        }
        rw.commit()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::Store;
    use eschool_core::{HelpConfig, HelpEngine, TooltipVisibility};

    #[test]
    fn test_prefix_queries_isolate_users() {
        let store = Store::in_memory().unwrap();

        let alice = HelpConfig::default().with_key_prefix("user.1.help.");
        let mut help = HelpEngine::load(store, alice);
        help.set_visibility(TooltipVisibility::Essential);
        help.mark_seen("intro");
        let store = help.into_store();

        let bob = HelpConfig::default().with_key_prefix("user.2.help.");
        let mut help = HelpEngine::load(store, bob);
        assert!(!help.is_seen("intro"));
        help.set_interactive_mode(false);
        let store = help.into_store();

        assert_eq!(store.count_with_prefix("user.1.").unwrap(), 2);
        assert_eq!(store.count_with_prefix("user.2.").unwrap(), 1);

        assert_eq!(store.clear_prefix("user.1.").unwrap(), 2);
        assert_eq!(store.count_with_prefix("user.").unwrap(), 1);
    }
}
