//! TOML scenario loader.
//!
//! Reads scenario documents from disk and turns them into domain
//! [`Scenario`] values. The document layout is described on
//! [`classmodel_core::domain::scenario`].
//!
//! ```toml
//! name = "restaurant"
//!
//! [[instance]]
//! name = "kebab"
//! class = "Restaurant"
//!
//! [[step]]
//! op = "set"
//! target = "kebab"
//! attribute = "open"
//! value = false
//! ```

use std::{fs, path::Path};

use tracing::{debug, instrument};

use classmodel_core::{
    application::{ApplicationError, ScenarioLoader},
    domain::Scenario,
    error::CoreResult,
};

/// Loads scenarios written in TOML.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlScenarioLoader;

impl TomlScenarioLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ScenarioLoader for TomlScenarioLoader {
    fn parse(&self, source_name: &str, text: &str) -> CoreResult<Scenario> {
        let scenario: Scenario =
            toml::from_str(text).map_err(|e| ApplicationError::ScenarioLoad {
                source_name: source_name.to_owned(),
                reason: e.message().to_owned(),
            })?;

        debug!(
            source = source_name,
            classes = scenario.classes.len(),
            instances = scenario.instances.len(),
            steps = scenario.steps.len(),
            "scenario parsed"
        );
        Ok(scenario)
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> CoreResult<Scenario> {
        let source_name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::ScenarioLoad {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;

        let mut scenario = self.parse(&source_name, &text)?;
        if scenario.name.is_none() {
            scenario.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(scenario)
    }
}
