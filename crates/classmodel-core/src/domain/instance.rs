//! Instances: an open own-attribute mapping plus a non-owning handle to the
//! class they were created from.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{class::ClassId, value::Value};

/// Handle to an instance stored in an [`ObjectSpace`](super::ObjectSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub(crate) usize);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A concrete object.
///
/// The own mapping is open: keys that were never declared by the class can
/// be added at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: ClassId,
    attributes: BTreeMap<String, Value>,
}

impl Instance {
    pub(crate) fn new(class: ClassId) -> Self {
        Self {
            class,
            attributes: BTreeMap::new(),
        }
    }

    /// Back-reference to the originating class. The class may have been
    /// removed from the space since.
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Own attributes keyed by storage key.
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn own(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub(crate) fn own_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.attributes.get_mut(key)
    }

    pub(crate) fn set_own(&mut self, key: String, value: Value) -> Option<Value> {
        self.attributes.insert(key, value)
    }

    pub(crate) fn remove_own(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }
}
