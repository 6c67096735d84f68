//! In-memory preference repository.

use std::{
    path::PathBuf,
    sync::{Arc, PoisonError, RwLock},
};

use fxforge_core::{
    application::ports::PreferencesRepository, domain::Preferences, error::ForgeResult,
};

/// Thread-safe in-memory repository; clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    inner: Arc<RwLock<InMemoryPreferencesInner>>,
}

#[derive(Debug, Default)]
struct InMemoryPreferencesInner {
    stored: Option<Preferences>,
    saves: usize,
}

impl InMemoryPreferences {
    /// Create an empty repository (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `preferences`.
    pub fn with(preferences: Preferences) -> Self {
        let repo = Self::new();
        repo.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .stored = Some(preferences);
        repo
    }

    /// Last saved record, if any.
    pub fn stored(&self) -> Option<Preferences> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .stored
            .clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).saves
    }
}

impl PreferencesRepository for InMemoryPreferences {
    fn load(&self) -> Preferences {
        self.stored().unwrap_or_default()
    }

    fn save(&self, preferences: &Preferences) -> ForgeResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.stored = Some(preferences.clone());
        inner.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}
