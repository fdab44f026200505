//! classmodel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for classmodel:
//! a small object model where instances carry their own attribute mapping
//! and fall back to the mapping of the class they were created from.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         classmodel-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ObjectSession, Demo/Scenario/Catalog) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (ClassCatalog, ScenarioLoader)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    classmodel-adapters (Infrastructure) │
//! │  (InMemoryCatalog, TomlScenarioLoader)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ObjectSpace, AttributeResolver, Value) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use classmodel_core::domain::{AttributeResolver, ClassDescriptor, ObjectSpace, Value};
//!
//! let mut space = ObjectSpace::new();
//! let robot = space
//!     .define_class(
//!         ClassDescriptor::builder("Robot")
//!             .attribute("obeys_owner", true)
//!             .param("name")
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//! let r2d2 = space.instantiate(robot, &["R2D2".into()]).unwrap();
//!
//! AttributeResolver::set(&mut space, r2d2, "obeys_owner", false.into()).unwrap();
//! assert_eq!(
//!     AttributeResolver::get(&space, r2d2, "obeys_owner").unwrap(),
//!     Value::from(false)
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogEntry, CatalogService, ClassCatalog, ClassSummary, DemoRun, DemoService,
        ObjectSession, ScenarioLoader, ScenarioReport, ScenarioService, Stage,
    };
    pub use crate::domain::{
        AttrName, AttributeResolver, ClassDescriptor, ClassId, DomainError, InstanceId,
        ObjectSpace, Origin, Resolved, Scenario, Step, Transcript, Value,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
