//! Command handlers. Each module translates parsed arguments into calls on
//! the core services and renders the result; no object-model logic lives
//! here.

use std::sync::Arc;

use classmodel_adapters::InMemoryCatalog;
use classmodel_core::application::ClassCatalog;

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod demo;
pub mod inspect;
pub mod list;
pub mod run;

/// The built-in class catalog every command works against.
pub(crate) fn builtin_catalog() -> CliResult<Arc<dyn ClassCatalog>> {
    Ok(Arc::new(InMemoryCatalog::with_builtin()?))
}
