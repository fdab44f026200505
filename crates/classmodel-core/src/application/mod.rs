//! Application layer for classmodel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ObjectSession, DemoService,
//!   ScenarioService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! object-model rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    ClassSummary, // DTO for class metadata
    DemoRun,
    DemoService,
    Failure,
    ObjectSession,
    ScenarioReport,
    ScenarioService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CatalogEntry, ClassCatalog, DemoScript, ScenarioLoader, Stage};

pub use error::ApplicationError;
