//! Object Session - named instances over an object space.
//!
//! A session binds instances to names (`r2d2`, `pizzeria`) the way script
//! variables do, resolves classes by name and loads missing classes from an
//! optional catalog on first use.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::{ClassCatalog, Stage},
    domain::{
        AttributeResolver, ClassDescriptor, ClassId, DomainError, InstanceId, ObjectSpace,
        Resolved, Value,
    },
    error::CoreResult,
};

/// A working set of classes and named instances.
pub struct ObjectSession {
    space: ObjectSpace,
    bindings: BTreeMap<String, InstanceId>,
    catalog: Option<Arc<dyn ClassCatalog>>,
}

impl ObjectSession {
    /// Session without a catalog; every class must be defined explicitly.
    pub fn new() -> Self {
        Self {
            space: ObjectSpace::new(),
            bindings: BTreeMap::new(),
            catalog: None,
        }
    }

    /// Session that loads unknown class names from `catalog`.
    pub fn with_catalog(catalog: Arc<dyn ClassCatalog>) -> Self {
        Self {
            catalog: Some(catalog),
            ..Self::new()
        }
    }

    pub fn space(&self) -> &ObjectSpace {
        &self.space
    }

    pub fn space_mut(&mut self) -> &mut ObjectSpace {
        &mut self.space
    }

    // ── Classes ───────────────────────────────────────────────────────────

    pub fn define_class(&mut self, class: ClassDescriptor) -> CoreResult<ClassId> {
        Ok(self.space.define_class(class)?)
    }

    /// Resolve a class by name, loading it from the catalog if needed.
    pub fn class(&mut self, name: &str) -> CoreResult<ClassId> {
        if let Ok(id) = self.space.class_id(name) {
            return Ok(id);
        }
        let Some(catalog) = &self.catalog else {
            return Err(DomainError::UnknownClass(name.to_owned()).into());
        };
        let entry = catalog.get(name)?;
        debug!(class = name, "loaded class from catalog");
        Ok(self.space.define_class(entry.class)?)
    }

    // ── Instances ─────────────────────────────────────────────────────────

    /// Construct an instance of `class` and bind it to `binding`.
    ///
    /// Rebinding a name releases the previous instance unless another name
    /// still refers to it.
    #[instrument(skip(self, args))]
    pub fn create(&mut self, binding: &str, class: &str, args: &[Value]) -> CoreResult<InstanceId> {
        let class_id = self.class(class)?;
        let id = self.space.instantiate(class_id, args)?;
        if let Some(previous) = self.bindings.insert(binding.to_owned(), id) {
            self.release_if_unbound(previous);
        }
        Ok(id)
    }

    /// Bind an additional name to an existing instance.
    pub fn alias(&mut self, binding: &str, existing: &str) -> CoreResult<InstanceId> {
        let id = self.instance(existing)?;
        if let Some(previous) = self.bindings.insert(binding.to_owned(), id) {
            self.release_if_unbound(previous);
        }
        Ok(id)
    }

    /// Instance currently bound to `binding`.
    pub fn instance(&self, binding: &str) -> CoreResult<InstanceId> {
        self.bindings
            .get(binding)
            .copied()
            .ok_or_else(|| DomainError::UnknownInstance(binding.to_owned()).into())
    }

    /// Remove a binding; the instance goes away with its last name.
    pub fn unbind(&mut self, binding: &str) -> CoreResult<()> {
        let id = self
            .bindings
            .remove(binding)
            .ok_or_else(|| DomainError::UnknownInstance(binding.to_owned()))?;
        self.release_if_unbound(id);
        Ok(())
    }

    fn release_if_unbound(&mut self, id: InstanceId) {
        if !self.bindings.values().any(|bound| *bound == id) {
            self.space.drop_instance(id);
        }
    }

    /// Bound names in order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, InstanceId)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    // ── Attributes ────────────────────────────────────────────────────────

    pub fn get(&self, binding: &str, attribute: &str) -> CoreResult<Value> {
        let id = self.instance(binding)?;
        Ok(AttributeResolver::get(&self.space, id, attribute)?)
    }

    pub fn lookup(&self, binding: &str, attribute: &str) -> CoreResult<Resolved> {
        let id = self.instance(binding)?;
        Ok(AttributeResolver::lookup(&self.space, id, attribute)?)
    }

    pub fn has(&self, binding: &str, attribute: &str) -> bool {
        self.instance(binding)
            .map(|id| AttributeResolver::has(&self.space, id, attribute))
            .unwrap_or(false)
    }

    pub fn set(
        &mut self,
        binding: &str,
        attribute: &str,
        value: impl Into<Value>,
    ) -> CoreResult<()> {
        let id = self.instance(binding)?;
        AttributeResolver::set(&mut self.space, id, attribute, value.into())?;
        Ok(())
    }

    pub fn delete(&mut self, binding: &str, attribute: &str) -> CoreResult<Value> {
        let id = self.instance(binding)?;
        Ok(AttributeResolver::delete(&mut self.space, id, attribute)?)
    }

    pub fn get_class_attribute(&mut self, class: &str, attribute: &str) -> CoreResult<Value> {
        let id = self.class(class)?;
        Ok(AttributeResolver::get_class_attribute(&self.space, id, attribute)?)
    }

    pub fn set_class_attribute(
        &mut self,
        class: &str,
        attribute: &str,
        value: impl Into<Value>,
    ) -> CoreResult<()> {
        let id = self.class(class)?;
        AttributeResolver::set_class_attribute(&mut self.space, id, attribute, value.into())?;
        Ok(())
    }

    pub fn delete_class_attribute(&mut self, class: &str, attribute: &str) -> CoreResult<Value> {
        let id = self.class(class)?;
        Ok(AttributeResolver::delete_class_attribute(&mut self.space, id, attribute)?)
    }

    // ── Behaviour ─────────────────────────────────────────────────────────

    pub fn call(&mut self, binding: &str, method: &str, args: &[Value]) -> CoreResult<Value> {
        let id = self.instance(binding)?;
        Ok(self.space.call_method(id, method, args)?)
    }

    pub fn call_class(&mut self, class: &str, method: &str, args: &[Value]) -> CoreResult<Value> {
        let id = self.class(class)?;
        Ok(self.space.call_class_method(id, method, args)?)
    }

    pub fn property(&self, binding: &str, name: &str) -> CoreResult<Value> {
        let id = self.instance(binding)?;
        Ok(self.space.get_property(id, name)?)
    }

    pub fn set_property(
        &mut self,
        binding: &str,
        name: &str,
        value: impl Into<Value>,
    ) -> CoreResult<()> {
        let id = self.instance(binding)?;
        self.space.set_property(id, name, value.into())?;
        Ok(())
    }
}

impl Stage for ObjectSession {
    fn create(&mut self, binding: &str, class: &str, args: &[Value]) -> CoreResult<InstanceId> {
        ObjectSession::create(self, binding, class, args)
    }

    fn unbind(&mut self, binding: &str) -> CoreResult<()> {
        ObjectSession::unbind(self, binding)
    }

    fn get(&self, binding: &str, attribute: &str) -> CoreResult<Value> {
        ObjectSession::get(self, binding, attribute)
    }

    fn has(&self, binding: &str, attribute: &str) -> bool {
        ObjectSession::has(self, binding, attribute)
    }

    fn set(&mut self, binding: &str, attribute: &str, value: Value) -> CoreResult<()> {
        ObjectSession::set(self, binding, attribute, value)
    }

    fn delete(&mut self, binding: &str, attribute: &str) -> CoreResult<Value> {
        ObjectSession::delete(self, binding, attribute)
    }

    fn get_class_attribute(&mut self, class: &str, attribute: &str) -> CoreResult<Value> {
        ObjectSession::get_class_attribute(self, class, attribute)
    }

    fn set_class_attribute(
        &mut self,
        class: &str,
        attribute: &str,
        value: Value,
    ) -> CoreResult<()> {
        ObjectSession::set_class_attribute(self, class, attribute, value)
    }

    fn call(&mut self, binding: &str, method: &str, args: &[Value]) -> CoreResult<Value> {
        ObjectSession::call(self, binding, method, args)
    }

    fn call_class(&mut self, class: &str, method: &str, args: &[Value]) -> CoreResult<Value> {
        ObjectSession::call_class(self, class, method, args)
    }

    fn property(&self, binding: &str, name: &str) -> CoreResult<Value> {
        ObjectSession::property(self, binding, name)
    }

    fn set_property(&mut self, binding: &str, name: &str, value: Value) -> CoreResult<()> {
        ObjectSession::set_property(self, binding, name, value)
    }
}

impl Default for ObjectSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSession")
            .field("space", &self.space)
            .field("bindings", &self.bindings)
            .field("has_catalog", &self.catalog.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn car_session() -> ObjectSession {
        let mut session = ObjectSession::new();
        session
            .define_class(
                ClassDescriptor::builder("Car")
                    .attribute("wheels", 4)
                    .param("model")
                    .param("color")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        session
    }

    #[test]
    fn unknown_class_without_catalog() {
        let mut session = ObjectSession::new();
        let err = session.create("x", "Nope", &[]).unwrap_err();
        assert_eq!(err, CoreError::Domain(DomainError::UnknownClass("Nope".into())));
    }

    #[test]
    fn named_instances_resolve_through_class() {
        let mut session = car_session();
        session
            .create("peugeot", "Car", &["Peugeot 205".into(), "white".into()])
            .unwrap();
        session
            .create("seat", "Car", &["Seat Ibiza".into(), "yellow".into()])
            .unwrap();

        session.set("peugeot", "wheels", 3).unwrap();
        assert_eq!(session.get("peugeot", "wheels").unwrap(), Value::from(3));
        assert_eq!(session.get("seat", "wheels").unwrap(), Value::from(4));

        // New instances still see the class default.
        session
            .create("ford", "Car", &["Ford Mondeo".into(), "red".into()])
            .unwrap();
        assert_eq!(session.get("ford", "wheels").unwrap(), Value::from(4));
    }

    #[test]
    fn unbinding_last_name_drops_instance() {
        let mut session = car_session();
        session.create("a", "Car", &["A".into(), "red".into()]).unwrap();
        session.alias("b", "a").unwrap();

        session.unbind("a").unwrap();
        assert_eq!(session.space().instance_count(), 1);
        assert_eq!(session.get("b", "model").unwrap(), Value::from("A"));

        session.unbind("b").unwrap();
        assert_eq!(session.space().instance_count(), 0);
        assert!(session.unbind("b").is_err());
    }

    #[test]
    fn rebinding_releases_previous_instance() {
        let mut session = car_session();
        session.create("car", "Car", &["A".into(), "red".into()]).unwrap();
        session.create("car", "Car", &["B".into(), "blue".into()]).unwrap();
        assert_eq!(session.space().instance_count(), 1);
        assert_eq!(session.get("car", "model").unwrap(), Value::from("B"));
    }

    #[test]
    fn unknown_binding_is_reported() {
        let session = car_session();
        assert!(matches!(
            session.get("ghost", "wheels"),
            Err(CoreError::Domain(DomainError::UnknownInstance(_)))
        ));
        assert!(!session.has("ghost", "wheels"));
    }
}
