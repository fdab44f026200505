//! Catalog Service - class listing and inspection.
//!
//! Separated from the demo and scenario services for single responsibility.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    application::ports::{CatalogEntry, ClassCatalog},
    domain::{ClassDescriptor, Value},
    error::CoreResult,
};

/// DTO for one constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSummary {
    pub name: String,
    pub default: Option<Value>,
    /// Storage key of the own attribute the argument lands in.
    pub stored_as: Option<String>,
}

/// DTO for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
    pub name: String,
    pub writable: bool,
}

/// DTO describing a class for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub doc: Option<String>,
    pub attributes: BTreeMap<String, Value>,
    pub params: Vec<ParamSummary>,
    pub methods: Vec<String>,
    pub class_methods: Vec<String>,
    pub properties: Vec<PropertySummary>,
    pub has_demo: bool,
}

impl ClassSummary {
    pub fn from_descriptor(class: &ClassDescriptor) -> Self {
        Self {
            name: class.name().to_owned(),
            doc: class.doc().map(str::to_owned),
            attributes: class.attributes().clone(),
            params: class
                .constructor()
                .params()
                .iter()
                .map(|p| ParamSummary {
                    name: p.name.clone(),
                    default: p.default.clone(),
                    stored_as: p.target.as_ref().map(|t| t.storage_key(class.name())),
                })
                .collect(),
            methods: class.method_names().map(str::to_owned).collect(),
            class_methods: class.class_method_names().map(str::to_owned).collect(),
            properties: class
                .property_names()
                .filter_map(|name| {
                    class.property(name).map(|p| PropertySummary {
                        name: name.to_owned(),
                        writable: p.setter.is_some(),
                    })
                })
                .collect(),
            has_demo: false,
        }
    }

    /// Constructor signature as written in code: `Bicycle(owner, color, radius=2)`.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| match &p.default {
                Some(d) => format!("{}={d}", p.name),
                None => p.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({params})", self.name)
    }
}

impl From<&CatalogEntry> for ClassSummary {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            has_demo: entry.demo.is_some(),
            ..Self::from_descriptor(&entry.class)
        }
    }
}

/// Service for catalog queries.
pub struct CatalogService {
    catalog: Arc<dyn ClassCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn ClassCatalog>) -> Self {
        Self { catalog }
    }

    /// All classes in walkthrough order.
    pub fn list(&self) -> CoreResult<Vec<ClassSummary>> {
        Ok(self.catalog.list()?.iter().map(ClassSummary::from).collect())
    }

    /// One class by name. An exact match wins; otherwise the name is
    /// compared case-insensitively.
    pub fn inspect(&self, name: &str) -> CoreResult<ClassSummary> {
        match self.catalog.get(name) {
            Ok(entry) => Ok(ClassSummary::from(&entry)),
            Err(err) => self
                .catalog
                .list()?
                .iter()
                .find(|e| e.name().eq_ignore_ascii_case(name))
                .map(ClassSummary::from)
                .ok_or(err),
        }
    }
}
