//! Attribute resolution with instance-over-class precedence.
//!
//! # Rules
//!
//! - `get`: own mapping first, then the class mapping, else
//!   [`DomainError::AttributeNotFound`]. Nothing is cached; both mappings
//!   may change between calls.
//! - `set`: always writes the own mapping. A write through an instance never
//!   touches shared class state; this is how shadowing happens.
//! - `set_class_attribute`: writes the class mapping, visible at once to every
//!   instance that does not shadow the name.
//! - `delete`: removes the own entry, so the class value shows through again.
//!
//! The `*_private` variants take the owning class explicitly and operate on
//! the mangled key; they are the class-internal access path for `__name`
//! attributes.

use tracing::trace;

use crate::domain::{
    attribute::{AttrName, Origin, mangle},
    class::ClassId,
    error::{DomainError, DomainResult},
    instance::InstanceId,
    space::ObjectSpace,
    value::Value,
};

/// A value together with the mapping it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: Value,
    pub origin: Origin,
}

/// Stateless resolver over an [`ObjectSpace`].
///
/// Every operation takes the space and the receiver explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeResolver;

impl AttributeResolver {
    /// Resolve `name` on `instance`, reporting where the value came from.
    pub fn lookup(space: &ObjectSpace, instance: InstanceId, name: &str) -> DomainResult<Resolved> {
        let inst = space.instance(instance)?;

        if let Some(value) = inst.own(name) {
            trace!(%instance, name, "resolved on instance");
            return Ok(Resolved {
                value: value.clone(),
                origin: Origin::Instance,
            });
        }

        // A removed class simply contributes nothing.
        if let Ok(class) = space.class(inst.class()) {
            if let Some(value) = class.attribute(name) {
                trace!(%instance, name, class = class.name(), "resolved on class");
                return Ok(Resolved {
                    value: value.clone(),
                    origin: Origin::Class,
                });
            }
        }

        Err(DomainError::attribute_not_found(space.owner_name(instance), name))
    }

    /// Resolve `name` on `instance`.
    pub fn get(space: &ObjectSpace, instance: InstanceId, name: &str) -> DomainResult<Value> {
        Self::lookup(space, instance, name).map(|r| r.value)
    }

    /// Non-failing existence check.
    pub fn has(space: &ObjectSpace, instance: InstanceId, name: &str) -> bool {
        Self::lookup(space, instance, name).is_ok()
    }

    /// Write `value` into the instance's own mapping.
    ///
    /// Returns the previous own value, if any. The class mapping is never
    /// consulted or modified.
    pub fn set(
        space: &mut ObjectSpace,
        instance: InstanceId,
        name: &str,
        value: Value,
    ) -> DomainResult<Option<Value>> {
        let name = AttrName::new(name)?;
        trace!(%instance, name = name.as_str(), %value, "set on instance");
        Ok(space.instance_mut(instance)?.set_own(name.into(), value))
    }

    /// Remove an own entry, unshadowing any class value of the same name.
    pub fn delete(
        space: &mut ObjectSpace,
        instance: InstanceId,
        name: &str,
    ) -> DomainResult<Value> {
        let removed = space.instance_mut(instance)?.remove_own(name);
        removed.ok_or_else(|| DomainError::attribute_not_found(space.owner_name(instance), name))
    }

    /// Read a class-level attribute directly.
    pub fn get_class_attribute(
        space: &ObjectSpace,
        class: ClassId,
        name: &str,
    ) -> DomainResult<Value> {
        let descriptor = space.class(class)?;
        descriptor
            .attribute(name)
            .cloned()
            .ok_or_else(|| DomainError::attribute_not_found(descriptor.name(), name))
    }

    /// Write a class-level attribute; returns the previous value, if any.
    pub fn set_class_attribute(
        space: &mut ObjectSpace,
        class: ClassId,
        name: &str,
        value: Value,
    ) -> DomainResult<Option<Value>> {
        let name = AttrName::new(name)?;
        let descriptor = space.class_mut(class)?;
        trace!(class = descriptor.name(), name = name.as_str(), %value, "set on class");
        Ok(descriptor.set_attribute(name.into(), value))
    }

    /// Remove a class-level attribute.
    pub fn delete_class_attribute(
        space: &mut ObjectSpace,
        class: ClassId,
        name: &str,
    ) -> DomainResult<Value> {
        let descriptor = space.class_mut(class)?;
        match descriptor.remove_attribute(name) {
            Some(value) => Ok(value),
            None => Err(DomainError::attribute_not_found(descriptor.name(), name)),
        }
    }

    // ── Class-internal access to private names ────────────────────────────

    /// Resolve a private `__name` declared by `owner` on `instance`.
    pub fn get_private(
        space: &ObjectSpace,
        owner: ClassId,
        instance: InstanceId,
        name: &str,
    ) -> DomainResult<Value> {
        let key = Self::private_key(space, owner, name)?;
        Self::get(space, instance, &key)
    }

    /// Write a private `__name` declared by `owner` on `instance`.
    pub fn set_private(
        space: &mut ObjectSpace,
        owner: ClassId,
        instance: InstanceId,
        name: &str,
        value: Value,
    ) -> DomainResult<Option<Value>> {
        let key = Self::private_key(space, owner, name)?;
        Self::set(space, instance, &key, value)
    }

    /// Mutable access to a private own value, for in-place updates such as
    /// appending to a list.
    pub fn private_mut<'a>(
        space: &'a mut ObjectSpace,
        owner: ClassId,
        instance: InstanceId,
        name: &str,
    ) -> DomainResult<&'a mut Value> {
        let key = Self::private_key(space, owner, name)?;
        let owner_name = space.owner_name(instance);
        space
            .instance_mut(instance)?
            .own_mut(&key)
            .ok_or_else(|| DomainError::attribute_not_found(owner_name, name))
    }

    /// Read a private class-level `__name` of `owner`.
    pub fn get_private_class(
        space: &ObjectSpace,
        owner: ClassId,
        name: &str,
    ) -> DomainResult<Value> {
        let key = Self::private_key(space, owner, name)?;
        Self::get_class_attribute(space, owner, &key)
    }

    /// Write a private class-level `__name` of `owner`.
    pub fn set_private_class(
        space: &mut ObjectSpace,
        owner: ClassId,
        name: &str,
        value: Value,
    ) -> DomainResult<Option<Value>> {
        let key = Self::private_key(space, owner, name)?;
        Self::set_class_attribute(space, owner, &key, value)
    }

    fn private_key(space: &ObjectSpace, owner: ClassId, name: &str) -> DomainResult<String> {
        let attr = AttrName::new(name)?;
        if !attr.is_private() {
            return Err(DomainError::InvalidAttributeName {
                name: name.to_owned(),
                reason: "private names start with '__' and do not end with '__'".into(),
            });
        }
        Ok(mangle(space.class(owner)?.name(), attr.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::class::ClassDescriptor;

    fn robot_space() -> (ObjectSpace, ClassId, InstanceId, InstanceId) {
        let mut space = ObjectSpace::new();
        let robot = space
            .define_class(
                ClassDescriptor::builder("Robot")
                    .attribute("obeys_owner", true)
                    .param("name")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let r1 = space.instantiate(robot, &["R2D2".into()]).unwrap();
        let r2 = space.instantiate(robot, &["C3PO".into()]).unwrap();
        (space, robot, r1, r2)
    }

    fn get(space: &ObjectSpace, instance: InstanceId, name: &str) -> Value {
        AttributeResolver::get(space, instance, name).unwrap()
    }

    fn set_class(space: &mut ObjectSpace, class: ClassId, name: &str, value: impl Into<Value>) {
        AttributeResolver::set_class_attribute(space, class, name, value.into()).unwrap();
    }

    #[test]
    fn robot_rebellion() {
        let (mut space, robot, r1, r2) = robot_space();

        AttributeResolver::set(&mut space, r1, "obeys_owner", false.into()).unwrap();
        assert_eq!(get(&space, r1, "obeys_owner"), Value::from(false));
        assert_eq!(get(&space, r2, "obeys_owner"), Value::from(true));

        set_class(&mut space, robot, "obeys_owner", false);
        assert_eq!(get(&space, r2, "obeys_owner"), Value::from(false));
        assert_eq!(get(&space, r1, "obeys_owner"), Value::from(false));

        // The rebellion is quelled, but r1 keeps its own value.
        set_class(&mut space, robot, "obeys_owner", true);
        assert_eq!(get(&space, r2, "obeys_owner"), Value::from(true));
        assert_eq!(get(&space, r1, "obeys_owner"), Value::from(false));
    }

    #[test]
    fn missing_attribute_is_not_found() {
        let (space, _, r1, _) = robot_space();
        assert_eq!(
            AttributeResolver::get(&space, r1, "nonexistent").unwrap_err(),
            DomainError::attribute_not_found("Robot", "nonexistent")
        );
        assert!(!AttributeResolver::has(&space, r1, "nonexistent"));
    }

    #[test]
    fn set_never_touches_class() {
        let (mut space, robot, r1, _) = robot_space();
        AttributeResolver::set(&mut space, r1, "obeys_owner", false.into()).unwrap();
        assert_eq!(
            AttributeResolver::get_class_attribute(&space, robot, "obeys_owner").unwrap(),
            Value::from(true)
        );
    }

    #[test]
    fn lookup_reports_origin() {
        let (mut space, _, r1, r2) = robot_space();
        AttributeResolver::set(&mut space, r1, "obeys_owner", false.into()).unwrap();

        assert_eq!(
            AttributeResolver::lookup(&space, r1, "obeys_owner").unwrap().origin,
            Origin::Instance
        );
        assert_eq!(
            AttributeResolver::lookup(&space, r2, "obeys_owner").unwrap().origin,
            Origin::Class
        );
        assert_eq!(
            AttributeResolver::lookup(&space, r2, "name").unwrap().origin,
            Origin::Instance
        );
    }

    #[test]
    fn delete_unshadows() {
        let (mut space, _, r1, _) = robot_space();
        AttributeResolver::set(&mut space, r1, "obeys_owner", false.into()).unwrap();
        let removed = AttributeResolver::delete(&mut space, r1, "obeys_owner").unwrap();
        assert_eq!(removed, Value::from(false));
        assert_eq!(get(&space, r1, "obeys_owner"), Value::from(true));

        // Nothing left to delete on the instance.
        assert!(AttributeResolver::delete(&mut space, r1, "obeys_owner").is_err());
    }

    #[test]
    fn dynamic_attributes_can_be_added_later() {
        let (mut space, _, r1, r2) = robot_space();
        AttributeResolver::set(&mut space, r1, "hair_color", "black".into()).unwrap();
        assert_eq!(get(&space, r1, "hair_color"), Value::from("black"));
        assert!(!AttributeResolver::has(&space, r2, "hair_color"));
    }

    #[test]
    fn invalid_names_are_rejected_on_write() {
        let (mut space, robot, r1, _) = robot_space();
        assert!(AttributeResolver::set(&mut space, r1, "bad name", 1.into()).is_err());
        assert!(AttributeResolver::set_class_attribute(&mut space, robot, "", 1.into()).is_err());
    }

    #[test]
    fn removed_class_stops_inheritance_but_keeps_own() {
        let (mut space, robot, r1, _) = robot_space();
        space.remove_class(robot);
        assert_eq!(get(&space, r1, "name"), Value::from("R2D2"));
        assert!(matches!(
            AttributeResolver::get(&space, r1, "obeys_owner"),
            Err(DomainError::AttributeNotFound { .. })
        ));
    }

    #[test]
    fn private_names_need_the_owning_class() {
        let mut space = ObjectSpace::new();
        let spy = space
            .define_class(
                ClassDescriptor::builder("Spy")
                    .param_into("real_name", "__real_name")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let tango = space.instantiate(spy, &["Pepin".into()]).unwrap();
        let rename = "Manuel".into();

        assert!(AttributeResolver::get(&space, tango, "__real_name").is_err());
        assert_eq!(
            AttributeResolver::get(&space, tango, "_Spy__real_name").unwrap(),
            Value::from("Pepin")
        );
        assert_eq!(
            AttributeResolver::get_private(&space, spy, tango, "__real_name").unwrap(),
            Value::from("Pepin")
        );

        AttributeResolver::set_private(&mut space, spy, tango, "__real_name", rename).unwrap();
        assert_eq!(
            AttributeResolver::get_private(&space, spy, tango, "__real_name").unwrap(),
            Value::from("Manuel")
        );

        // Public names are not valid on the private path.
        assert!(AttributeResolver::get_private(&space, spy, tango, "real_name").is_err());
    }
}
