//! Scenario documents: declarative scripts of classes, instances and steps.
//!
//! The types are format-agnostic serde models; the TOML loader lives in the
//! adapters crate.
//!
//! ```toml
//! name = "robot rebellion"
//!
//! [[class]]
//! name = "Robot"
//! attributes = { obeys_owner = true }
//! params = [{ name = "name" }]
//!
//! [[instance]]
//! name = "r2d2"
//! class = "Robot"
//! args = ["R2D2"]
//!
//! [[step]]
//! op = "set"
//! target = "r2d2"
//! attribute = "obeys_owner"
//! value = false
//!
//! [[step]]
//! op = "expect"
//! target = "r2d2"
//! attribute = "obeys_owner"
//! value = false
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    class::{ClassBuilder, ClassDescriptor},
    error::DomainResult,
    value::Value,
};

/// A complete scenario document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDecl>,
    #[serde(default, rename = "instance")]
    pub instances: Vec<InstanceDecl>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// A class declared by the scenario. Declared classes carry data only; no
/// methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(default)]
    pub default: Option<Value>,
}

impl ClassDecl {
    /// Build the descriptor this declaration describes.
    pub fn to_descriptor(&self) -> DomainResult<ClassDescriptor> {
        let mut builder: ClassBuilder = ClassDescriptor::builder(self.name.clone());
        if let Some(doc) = &self.doc {
            builder = builder.doc(doc.clone());
        }
        for (name, value) in &self.attributes {
            builder = builder.attribute(name.clone(), value.clone());
        }
        for param in &self.params {
            builder = match &param.default {
                Some(default) => builder.param_default(param.name.clone(), default.clone()),
                None => builder.param(param.name.clone()),
            };
        }
        builder.build()
    }
}

/// An instance bound to a scenario-local name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDecl {
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub args: Vec<Value>,
    /// Extra own attributes set right after construction.
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

/// One scripted operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Set {
        target: String,
        attribute: String,
        value: Value,
    },
    SetClass {
        class: String,
        attribute: String,
        value: Value,
    },
    Delete {
        target: String,
        attribute: String,
    },
    DeleteClass {
        class: String,
        attribute: String,
    },
    Get {
        target: String,
        attribute: String,
    },
    Expect {
        target: String,
        attribute: String,
        value: Value,
    },
    ExpectMissing {
        target: String,
        attribute: String,
    },
    Call {
        target: String,
        method: String,
        #[serde(default)]
        args: Vec<Value>,
    },
    CallClass {
        class: String,
        method: String,
        #[serde(default)]
        args: Vec<Value>,
    },
}

impl Step {
    /// Whether the step checks something rather than doing something.
    pub const fn is_expectation(&self) -> bool {
        matches!(self, Self::Expect { .. } | Self::ExpectMissing { .. })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { target, attribute, value } => write!(f, "{target}.{attribute} = {value}"),
            Self::SetClass { class, attribute, value } => {
                write!(f, "{class}.{attribute} = {value}")
            }
            Self::Delete { target, attribute } => write!(f, "del {target}.{attribute}"),
            Self::DeleteClass { class, attribute } => write!(f, "del {class}.{attribute}"),
            Self::Get { target, attribute } => write!(f, "{target}.{attribute}"),
            Self::Expect { target, attribute, value } => {
                write!(f, "expect {target}.{attribute} == {value}")
            }
            Self::ExpectMissing { target, attribute } => {
                write!(f, "expect {target}.{attribute} is missing")
            }
            Self::Call { target, method, args } => write!(f, "{target}.{method}({})", join(args)),
            Self::CallClass { class, method, args } => {
                write!(f, "{class}.{method}({})", join(args))
            }
        }
    }
}

fn join(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
