//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `classmodel-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ClassDescriptor, InstanceId, Scenario, Transcript, Value};
use crate::error::CoreResult;

/// Named-object operations available to a walkthrough script.
///
/// Instances are addressed by binding name, classes by class name.
///
/// Implemented by:
/// - `ObjectSession` (application services)
pub trait Stage {
    /// Construct `class` with `args` and bind the instance to `binding`.
    fn create(&mut self, binding: &str, class: &str, args: &[Value]) -> CoreResult<InstanceId>;

    /// Drop a binding; the instance goes with its last name.
    fn unbind(&mut self, binding: &str) -> CoreResult<()>;

    fn get(&self, binding: &str, attribute: &str) -> CoreResult<Value>;

    fn has(&self, binding: &str, attribute: &str) -> bool;

    fn set(&mut self, binding: &str, attribute: &str, value: Value) -> CoreResult<()>;

    fn delete(&mut self, binding: &str, attribute: &str) -> CoreResult<Value>;

    fn get_class_attribute(&mut self, class: &str, attribute: &str) -> CoreResult<Value>;

    fn set_class_attribute(&mut self, class: &str, attribute: &str, value: Value) -> CoreResult<()>;

    fn call(&mut self, binding: &str, method: &str, args: &[Value]) -> CoreResult<Value>;

    fn call_class(&mut self, class: &str, method: &str, args: &[Value]) -> CoreResult<Value>;

    fn property(&self, binding: &str, name: &str) -> CoreResult<Value>;

    fn set_property(&mut self, binding: &str, name: &str, value: Value) -> CoreResult<()>;
}

/// A scripted walkthrough: drives a stage and narrates into a transcript.
pub type DemoScript = fn(&mut dyn Stage, &mut Transcript) -> CoreResult<()>;

/// A class definition as served by a catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub class: ClassDescriptor,
    /// Walkthrough exercising the class, if it has one.
    pub demo: Option<DemoScript>,
    /// Position in walkthrough order.
    pub position: usize,
}

impl CatalogEntry {
    pub fn new(class: ClassDescriptor, position: usize) -> Self {
        Self {
            class,
            demo: None,
            position,
        }
    }

    pub fn with_demo(mut self, demo: DemoScript) -> Self {
        self.demo = Some(demo);
        self
    }

    pub fn name(&self) -> &str {
        self.class.name()
    }
}

/// Port for class definition lookup.
///
/// Implemented by:
/// - `classmodel_adapters::InMemoryCatalog` (built-in walkthrough classes)
pub trait ClassCatalog: Send + Sync {
    /// All entries, in walkthrough order.
    fn list(&self) -> CoreResult<Vec<CatalogEntry>>;

    /// Entry by class name.
    fn get(&self, name: &str) -> CoreResult<CatalogEntry>;

    /// Insert or replace an entry.
    fn insert(&self, entry: CatalogEntry) -> CoreResult<()>;
}

/// Port for reading scenario documents.
///
/// Implemented by:
/// - `classmodel_adapters::TomlScenarioLoader`
pub trait ScenarioLoader: Send + Sync {
    /// Parse a scenario from text; `source_name` is used in error messages.
    fn parse(&self, source_name: &str, text: &str) -> CoreResult<Scenario>;

    /// Read and parse a scenario file.
    fn load(&self, path: &Path) -> CoreResult<Scenario>;
}
