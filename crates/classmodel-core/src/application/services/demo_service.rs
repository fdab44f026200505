//! Demo Service - replays the scripted walkthroughs of catalog classes.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CatalogEntry, ClassCatalog},
        services::ObjectSession,
    },
    domain::{DEFAULT_SEPARATOR, Transcript},
    error::CoreResult,
};

/// Result of running one walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoRun {
    pub name: String,
    pub title: Option<String>,
    pub transcript: Transcript,
}

/// Service for walkthrough execution.
pub struct DemoService {
    catalog: Arc<dyn ClassCatalog>,
    separator: String,
}

impl DemoService {
    pub fn new(catalog: Arc<dyn ClassCatalog>) -> Self {
        Self {
            catalog,
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }

    /// Override the section separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Names of classes that have a walkthrough, in walkthrough order.
    pub fn names(&self) -> CoreResult<Vec<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|e| e.name().to_owned())
            .collect())
    }

    /// Run the walkthrough of one class in a fresh session.
    #[instrument(skip(self))]
    pub fn run(&self, name: &str) -> CoreResult<DemoRun> {
        let entry = self
            .entries()?
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ApplicationError::DemoNotFound {
                name: name.to_owned(),
            })?;
        self.run_entry(entry)
    }

    /// Run every walkthrough in order, each in its own session.
    pub fn run_all(&self) -> CoreResult<Vec<DemoRun>> {
        self.entries()?
            .into_iter()
            .map(|entry| self.run_entry(entry))
            .collect()
    }

    fn entries(&self) -> CoreResult<Vec<CatalogEntry>> {
        Ok(self
            .catalog
            .list()?
            .into_iter()
            .filter(|e| e.demo.is_some())
            .collect())
    }

    fn run_entry(&self, entry: CatalogEntry) -> CoreResult<DemoRun> {
        let Some(script) = entry.demo else {
            return Err(ApplicationError::DemoNotFound {
                name: entry.class.name().to_owned(),
            }
            .into());
        };

        let mut session = ObjectSession::with_catalog(Arc::clone(&self.catalog));
        let mut transcript = Transcript::with_separator(self.separator.clone());
        script(&mut session, &mut transcript)?;

        info!(demo = entry.class.name(), lines = transcript.lines().len(), "demo finished");
        Ok(DemoRun {
            name: entry.class.name().to_owned(),
            title: entry.class.doc().map(str::to_owned),
            transcript,
        })
    }
}
