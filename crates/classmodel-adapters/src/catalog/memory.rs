//! In-memory class catalog with the built-in walkthrough classes.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use classmodel_core::{
    application::{ApplicationError, CatalogEntry, ClassCatalog},
    domain::DomainError,
    error::CoreResult,
};

use crate::builtin;

/// Thread-safe in-memory class catalog.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<BTreeMap<String, CatalogEntry>>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a catalog holding every built-in class.
    pub fn with_builtin() -> CoreResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load the built-in classes, replacing entries of the same name.
    pub fn load_builtin(&self) -> CoreResult<()> {
        for entry in builtin::all_entries()? {
            self.insert(entry)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry.
    pub fn clear(&self) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassCatalog for InMemoryCatalog {
    fn list(&self) -> CoreResult<Vec<CatalogEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        let mut entries: Vec<_> = inner.values().cloned().collect();
        entries.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name().cmp(b.name())));
        Ok(entries)
    }

    fn get(&self, name: &str) -> CoreResult<CatalogEntry> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        inner
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::UnknownClass(name.to_owned()).into())
    }

    fn insert(&self, entry: CatalogEntry) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        debug!(class = entry.name(), position = entry.position, "catalog insert");
        inner.insert(entry.name().to_owned(), entry);
        Ok(())
    }
}
