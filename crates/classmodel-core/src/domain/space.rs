//! The object space: an arena owning every class and instance.
//!
//! Instances refer to their class through a [`ClassId`] handle, which is the
//! non-owning back-reference of the object model. Removing a class does not
//! touch the instances created from it; they keep their own attributes and
//! simply stop inheriting.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::domain::{
    class::{ClassDescriptor, ClassId},
    error::{DomainError, DomainResult},
    instance::{Instance, InstanceId},
    value::Value,
};

/// Owner name reported for instances whose class has been removed.
pub const REMOVED_CLASS: &str = "<removed class>";

/// Arena of classes and instances.
#[derive(Debug, Default)]
pub struct ObjectSpace {
    classes: HashMap<ClassId, ClassDescriptor>,
    class_names: BTreeMap<String, ClassId>,
    instances: HashMap<InstanceId, Instance>,
    next_class: usize,
    next_instance: usize,
}

impl ObjectSpace {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Classes ───────────────────────────────────────────────────────────

    /// Register a class. Names are unique within a space.
    pub fn define_class(&mut self, class: ClassDescriptor) -> DomainResult<ClassId> {
        if self.class_names.contains_key(class.name()) {
            return Err(DomainError::DuplicateClass(class.name().to_owned()));
        }
        let id = ClassId(self.next_class);
        self.next_class += 1;
        debug!(class = class.name(), %id, "class defined");
        self.class_names.insert(class.name().to_owned(), id);
        self.classes.insert(id, class);
        Ok(id)
    }

    /// Drop a class from the space. Instances created from it survive.
    pub fn remove_class(&mut self, id: ClassId) -> Option<ClassDescriptor> {
        let class = self.classes.remove(&id)?;
        self.class_names.remove(class.name());
        debug!(class = class.name(), %id, "class removed");
        Some(class)
    }

    pub fn class(&self, id: ClassId) -> DomainResult<&ClassDescriptor> {
        self.classes
            .get(&id)
            .ok_or_else(|| DomainError::UnknownClass(id.to_string()))
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> DomainResult<&mut ClassDescriptor> {
        self.classes
            .get_mut(&id)
            .ok_or_else(|| DomainError::UnknownClass(id.to_string()))
    }

    pub fn class_id(&self, name: &str) -> DomainResult<ClassId> {
        self.class_names
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::UnknownClass(name.to_owned()))
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class_names.contains_key(name)
    }

    /// Classes in name order.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDescriptor)> {
        self.class_names
            .values()
            .filter_map(|id| self.classes.get(id).map(|c| (*id, c)))
    }

    // ── Instances ─────────────────────────────────────────────────────────

    /// Construct an instance: bind `args` to the constructor, store the bound
    /// parameters that target an attribute, then run the initializer.
    ///
    /// A failing initializer leaves no half-built instance behind.
    pub fn instantiate(&mut self, class_id: ClassId, args: &[Value]) -> DomainResult<InstanceId> {
        let class = self.class(class_id)?;
        let bound = class.constructor().bind(class.name(), args)?;

        let mut instance = Instance::new(class_id);
        for param in class.constructor().params() {
            if let (Some(target), Some(value)) = (&param.target, bound.get(&param.name)) {
                instance.set_own(target.storage_key(class.name()), value.clone());
            }
        }
        let initializer = class.initializer();
        let class_name = class.name().to_owned();

        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        self.instances.insert(id, instance);

        if let Some(init) = initializer {
            if let Err(e) = init(self, id, &bound) {
                self.instances.remove(&id);
                return Err(e);
            }
        }

        debug!(class = %class_name, instance = %id, "instance created");
        Ok(id)
    }

    /// Release an instance. Returns it if it was live.
    pub fn drop_instance(&mut self, id: InstanceId) -> Option<Instance> {
        trace!(instance = %id, "instance dropped");
        self.instances.remove(&id)
    }

    pub fn instance(&self, id: InstanceId) -> DomainResult<&Instance> {
        self.instances
            .get(&id)
            .ok_or_else(|| DomainError::UnknownInstance(id.to_string()))
    }

    pub(crate) fn instance_mut(&mut self, id: InstanceId) -> DomainResult<&mut Instance> {
        self.instances
            .get_mut(&id)
            .ok_or_else(|| DomainError::UnknownInstance(id.to_string()))
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Class of a live instance; fails if the class was removed.
    pub fn class_of(&self, id: InstanceId) -> DomainResult<&ClassDescriptor> {
        let class = self.instance(id)?.class();
        self.class(class)
    }

    /// Class name for error messages, tolerant of removed classes.
    pub fn owner_name(&self, id: InstanceId) -> String {
        self.class_of(id)
            .map(|c| c.name().to_owned())
            .unwrap_or_else(|_| REMOVED_CLASS.to_owned())
    }

    // ── Behaviour dispatch ────────────────────────────────────────────────

    /// Call an instance method with the instance as explicit receiver.
    pub fn call_method(
        &mut self,
        instance: InstanceId,
        method: &str,
        args: &[Value],
    ) -> DomainResult<Value> {
        let class = self.class_of(instance)?;
        let f = class
            .method(method)
            .ok_or_else(|| DomainError::MethodNotFound {
                owner: class.name().to_owned(),
                method: method.to_owned(),
            })?;
        trace!(instance = %instance, method, "calling method");
        f(self, instance, args)
    }

    /// Call a class method with the class as explicit receiver.
    pub fn call_class_method(
        &mut self,
        class_id: ClassId,
        method: &str,
        args: &[Value],
    ) -> DomainResult<Value> {
        let class = self.class(class_id)?;
        let f = class
            .class_method(method)
            .ok_or_else(|| DomainError::MethodNotFound {
                owner: class.name().to_owned(),
                method: method.to_owned(),
            })?;
        trace!(class = %class_id, method, "calling class method");
        f(self, class_id, args)
    }

    /// Evaluate a computed property.
    pub fn get_property(&self, instance: InstanceId, name: &str) -> DomainResult<Value> {
        let class = self.class_of(instance)?;
        let property = class
            .property(name)
            .ok_or_else(|| DomainError::attribute_not_found(class.name(), name))?;
        (property.getter)(self, instance)
    }

    /// Assign through a property setter.
    pub fn set_property(
        &mut self,
        instance: InstanceId,
        name: &str,
        value: Value,
    ) -> DomainResult<()> {
        let class = self.class_of(instance)?;
        let property = class
            .property(name)
            .ok_or_else(|| DomainError::attribute_not_found(class.name(), name))?;
        let setter = property.setter.ok_or_else(|| DomainError::ReadOnlyProperty {
            owner: class.name().to_owned(),
            property: name.to_owned(),
        })?;
        setter(self, instance, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::class::BoundArgs;

    fn counting_init(space: &mut ObjectSpace, id: InstanceId, _: &BoundArgs) -> DomainResult<()> {
        let class = space.instance(id)?.class();
        let class = space.class_mut(class)?;
        let n = class.attribute("count").and_then(Value::as_int).unwrap_or(0);
        class.set_attribute("count".into(), Value::from(n + 1));
        Ok(())
    }

    fn failing_init(_: &mut ObjectSpace, _: InstanceId, _: &BoundArgs) -> DomainResult<()> {
        Err(DomainError::InvalidArgument {
            operation: "init".into(),
            reason: "nope".into(),
        })
    }

    fn double(space: &mut ObjectSpace, id: InstanceId, _: &[Value]) -> DomainResult<Value> {
        let n = space.instance(id)?.own("n").and_then(Value::as_int).unwrap_or(0);
        Ok(Value::from(n * 2))
    }

    #[test]
    fn duplicate_class_names_are_rejected() {
        let mut space = ObjectSpace::new();
        space
            .define_class(ClassDescriptor::builder("Car").build().unwrap())
            .unwrap();
        let err = space
            .define_class(ClassDescriptor::builder("Car").build().unwrap())
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateClass("Car".into()));
    }

    #[test]
    fn instantiate_stores_params_and_runs_initializer() {
        let mut space = ObjectSpace::new();
        let class = space
            .define_class(
                ClassDescriptor::builder("Sheep")
                    .attribute("count", 0)
                    .param("name")
                    .initializer(counting_init)
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let mindy = space.instantiate(class, &["Mindy".into()]).unwrap();
        space.instantiate(class, &["Teresa".into()]).unwrap();

        assert_eq!(
            space.instance(mindy).unwrap().own("name"),
            Some(&Value::from("Mindy"))
        );
        assert_eq!(
            space.class(class).unwrap().attribute("count"),
            Some(&Value::from(2))
        );
    }

    #[test]
    fn failed_initializer_leaves_no_instance() {
        let mut space = ObjectSpace::new();
        let class = space
            .define_class(
                ClassDescriptor::builder("Broken")
                    .initializer(failing_init)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        assert!(space.instantiate(class, &[]).is_err());
        assert_eq!(space.instance_count(), 0);
    }

    #[test]
    fn method_dispatch_and_missing_method() {
        let mut space = ObjectSpace::new();
        let class = space
            .define_class(
                ClassDescriptor::builder("Num")
                    .param("n")
                    .method("double", double)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let id = space.instantiate(class, &[21.into()]).unwrap();

        assert_eq!(space.call_method(id, "double", &[]).unwrap(), Value::from(42));
        assert!(matches!(
            space.call_method(id, "triple", &[]),
            Err(DomainError::MethodNotFound { .. })
        ));
    }

    #[test]
    fn removed_class_leaves_instances_alive() {
        let mut space = ObjectSpace::new();
        let class = space
            .define_class(ClassDescriptor::builder("Ghost").param("name").build().unwrap())
            .unwrap();
        let id = space.instantiate(class, &["Casper".into()]).unwrap();

        assert!(space.remove_class(class).is_some());
        assert!(!space.has_class("Ghost"));
        assert!(space.instance(id).is_ok());
        assert_eq!(space.owner_name(id), REMOVED_CLASS);
    }
}
