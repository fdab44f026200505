//! Infrastructure adapters for classmodel.
//!
//! This crate implements the ports defined in `classmodel-core::application::ports`:
//! the built-in walkthrough classes behind an in-memory catalog, and a TOML
//! loader for scenario documents.

pub mod builtin;
pub mod catalog;
pub mod scenario_loader;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use scenario_loader::TomlScenarioLoader;
