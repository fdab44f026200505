//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "run a walkthrough" or "check a scenario".

pub mod catalog_service;
pub mod demo_service;
pub mod scenario_service;
pub mod session;

pub use catalog_service::{CatalogService, ClassSummary, ParamSummary, PropertySummary};
pub use demo_service::{DemoRun, DemoService};
pub use scenario_service::{Failure, ScenarioReport, ScenarioService};
pub use session::ObjectSession;
