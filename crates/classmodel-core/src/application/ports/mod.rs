//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `classmodel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ClassCatalog`: named class definitions and their demonstrations
//!   - `ScenarioLoader`: scenario documents from files or text
//!   - `Stage`: the named-object operations a walkthrough script drives

pub mod output;

pub use output::{CatalogEntry, ClassCatalog, DemoScript, ScenarioLoader, Stage};
