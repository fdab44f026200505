//! Class descriptors: named templates with class-level attributes, a
//! constructor signature and a behaviour table.
//!
//! Behaviour is plain function pointers that receive their receiver as an
//! explicit argument; there is no implicit `self` binding.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    attribute::AttrName,
    error::{DomainError, DomainResult},
    instance::InstanceId,
    space::ObjectSpace,
    value::Value,
};

/// Handle to a class stored in an [`ObjectSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(pub(crate) usize);

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class#{}", self.0)
    }
}

/// Method acting on one instance.
pub type InstanceMethod = fn(&mut ObjectSpace, InstanceId, &[Value]) -> DomainResult<Value>;

/// Method acting on the class itself.
pub type ClassMethod = fn(&mut ObjectSpace, ClassId, &[Value]) -> DomainResult<Value>;

/// Computed property getter.
pub type Getter = fn(&ObjectSpace, InstanceId) -> DomainResult<Value>;

/// Property setter.
pub type Setter = fn(&mut ObjectSpace, InstanceId, Value) -> DomainResult<()>;

/// Runs after constructor arguments have been bound and stored.
pub type Initializer = fn(&mut ObjectSpace, InstanceId, &BoundArgs) -> DomainResult<()>;

/// Getter plus optional setter, registered under a property name.
#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub getter: Getter,
    pub setter: Option<Setter>,
}

// ── Constructor ──────────────────────────────────────────────────────────────

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub default: Option<Value>,
    /// Own attribute the argument is stored into; `None` keeps it for the
    /// initializer only.
    pub target: Option<AttrName>,
}

/// Constructor arguments bound to parameter names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs(BTreeMap<String, Value>);

impl BoundArgs {
    pub fn get(&self, param: &str) -> Option<&Value> {
        self.0.get(param)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered constructor signature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constructor {
    params: Vec<Param>,
}

impl Constructor {
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of parameters without a default.
    pub fn required(&self) -> usize {
        self.params.iter().filter(|p| p.default.is_none()).count()
    }

    /// Bind positional arguments, filling in defaults.
    pub fn bind(&self, class_name: &str, args: &[Value]) -> DomainResult<BoundArgs> {
        let required = self.required();
        let total = self.params.len();
        if args.len() < required || args.len() > total {
            let expected = if required == total {
                total.to_string()
            } else {
                format!("{required} to {total}")
            };
            return Err(DomainError::ConstructorArity {
                class: class_name.to_owned(),
                expected,
                given: args.len(),
            });
        }

        let mut bound = BTreeMap::new();
        for (i, param) in self.params.iter().enumerate() {
            let value = match args.get(i) {
                Some(v) => v.clone(),
                // Arity check above guarantees a default here.
                None => param.default.clone().unwrap_or(Value::None),
            };
            bound.insert(param.name.clone(), value);
        }
        Ok(BoundArgs(bound))
    }
}

// ── Descriptor ───────────────────────────────────────────────────────────────

/// A named template: class-level attributes plus behaviour.
///
/// Private class attributes are stored under their mangled key, exactly like
/// private instance attributes.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    name: String,
    doc: Option<String>,
    attributes: BTreeMap<String, Value>,
    constructor: Constructor,
    initializer: Option<Initializer>,
    methods: BTreeMap<String, InstanceMethod>,
    class_methods: BTreeMap<String, ClassMethod>,
    properties: BTreeMap<String, Property>,
}

impl ClassDescriptor {
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Class-level attributes keyed by storage key.
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Insert or replace a class-level attribute; returns the previous value.
    pub(crate) fn set_attribute(&mut self, key: String, value: Value) -> Option<Value> {
        self.attributes.insert(key, value)
    }

    pub(crate) fn remove_attribute(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn initializer(&self) -> Option<Initializer> {
        self.initializer
    }

    pub fn method(&self, name: &str) -> Option<InstanceMethod> {
        self.methods.get(name).copied()
    }

    pub fn class_method(&self, name: &str) -> Option<ClassMethod> {
        self.class_methods.get(name).copied()
    }

    pub fn property(&self, name: &str) -> Option<Property> {
        self.properties.get(name).copied()
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn class_method_names(&self) -> impl Iterator<Item = &str> {
        self.class_methods.keys().map(String::as_str)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`ClassDescriptor`].
///
/// Name validation errors are collected and reported by [`ClassBuilder::build`]
/// so declarations can be chained.
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    doc: Option<String>,
    attributes: Vec<(String, Value)>,
    params: Vec<(String, Option<Value>, Option<String>)>,
    initializer: Option<Initializer>,
    methods: BTreeMap<String, InstanceMethod>,
    class_methods: BTreeMap<String, ClassMethod>,
    properties: BTreeMap<String, Property>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attributes: Vec::new(),
            params: Vec::new(),
            initializer: None,
            methods: BTreeMap::new(),
            class_methods: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declare a class-level attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Required parameter stored into the own attribute of the same name.
    pub fn param(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.push_param(name.clone(), None, Some(name))
    }

    /// Parameter with a default, stored into the own attribute of the same name.
    pub fn param_default(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        let name = name.into();
        self.push_param(name.clone(), Some(default.into()), Some(name))
    }

    /// Required parameter stored into a differently named (often private)
    /// attribute.
    pub fn param_into(self, name: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.push_param(name.into(), None, Some(attribute.into()))
    }

    /// Parameter consumed by the initializer only.
    pub fn param_unstored(self, name: impl Into<String>, default: Option<Value>) -> Self {
        self.push_param(name.into(), default, None)
    }

    fn push_param(mut self, name: String, default: Option<Value>, target: Option<String>) -> Self {
        self.params.push((name, default, target));
        self
    }

    pub fn initializer(mut self, init: Initializer) -> Self {
        self.initializer = Some(init);
        self
    }

    pub fn method(mut self, name: impl Into<String>, f: InstanceMethod) -> Self {
        self.methods.insert(name.into(), f);
        self
    }

    pub fn class_method(mut self, name: impl Into<String>, f: ClassMethod) -> Self {
        self.class_methods.insert(name.into(), f);
        self
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        getter: Getter,
        setter: Option<Setter>,
    ) -> Self {
        self.properties.insert(name.into(), Property { getter, setter });
        self
    }

    /// Validate every name and assemble the descriptor.
    pub fn build(self) -> DomainResult<ClassDescriptor> {
        // Class names follow the same identifier rules as attributes.
        AttrName::new(self.name.clone())?;

        let mut attributes = BTreeMap::new();
        for (name, value) in self.attributes {
            let name = AttrName::new(name)?;
            attributes.insert(name.storage_key(&self.name), value);
        }

        let mut params = Vec::with_capacity(self.params.len());
        let mut seen_default = false;
        for (name, default, target) in self.params {
            AttrName::new(name.clone())?;
            if params.iter().any(|p: &Param| p.name == name) {
                return Err(DomainError::InvalidArgument {
                    operation: format!("{}()", self.name),
                    reason: format!("duplicate parameter '{name}'"),
                });
            }
            if default.is_some() {
                seen_default = true;
            } else if seen_default {
                return Err(DomainError::InvalidArgument {
                    operation: format!("{}()", self.name),
                    reason: format!("required parameter '{name}' follows a defaulted one"),
                });
            }
            let target = target.map(AttrName::new).transpose()?;
            params.push(Param {
                name,
                default,
                target,
            });
        }

        for name in self
            .methods
            .keys()
            .chain(self.class_methods.keys())
            .chain(self.properties.keys())
        {
            AttrName::new(name.clone())?;
        }

        Ok(ClassDescriptor {
            name: self.name,
            doc: self.doc,
            attributes,
            constructor: Constructor { params },
            initializer: self.initializer,
            methods: self.methods,
            class_methods: self.class_methods,
            properties: self.properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_class_attributes_are_mangled() {
        let class = ClassDescriptor::builder("Dog")
            .attribute("__order", "Canid")
            .attribute("legs", 4)
            .build()
            .unwrap();
        assert_eq!(class.attribute("_Dog__order"), Some(&Value::from("Canid")));
        assert_eq!(class.attribute("__order"), None);
        assert_eq!(class.attribute("legs"), Some(&Value::from(4)));
    }

    #[test]
    fn underscore_only_class_does_not_mangle() {
        let class = ClassDescriptor::builder("__").attribute("__x", 1).build().unwrap();
        assert_eq!(class.attribute("__x"), Some(&Value::from(1)));
        assert_eq!(class.attribute("___x"), None);
    }

    #[test]
    fn bind_applies_defaults() {
        let class = ClassDescriptor::builder("Bicycle")
            .param("owner")
            .param("color")
            .param_default("radius", 2)
            .build()
            .unwrap();

        let bound = class
            .constructor()
            .bind("Bicycle", &["Dani".into(), "yellow".into()])
            .unwrap();
        assert_eq!(bound.get("radius"), Some(&Value::from(2)));
        assert_eq!(bound.len(), 3);
    }

    #[test]
    fn bind_rejects_wrong_arity() {
        let class = ClassDescriptor::builder("Bicycle")
            .param("owner")
            .param_default("radius", 2)
            .build()
            .unwrap();
        let ctor = class.constructor();

        let too_few = ctor.bind("Bicycle", &[]).unwrap_err();
        assert!(matches!(
            too_few,
            DomainError::ConstructorArity { ref expected, given: 0, .. } if expected == "1 to 2"
        ));
        assert!(ctor.bind("Bicycle", &["a".into(), 1.into(), 2.into()]).is_err());
    }

    #[test]
    fn required_after_default_is_rejected() {
        let err = ClassDescriptor::builder("Broken")
            .param_default("a", 1)
            .param("b")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { .. }));
    }

    #[test]
    fn invalid_class_name_is_rejected() {
        assert!(ClassDescriptor::builder("not a name").build().is_err());
    }
}
