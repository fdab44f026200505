//! Attribute names, visibility and name mangling.
//!
//! A name of the form `__name` (leading double underscore, no trailing one)
//! is private to the class that declares it. Private names are stored under
//! the mangled key `_<Class>__name`, so an outside lookup of `__name` misses
//! and only code that knows the owning class can reach the value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The instance's own mapping (possibly shadowing the class).
    Instance,
    /// The class-level default.
    Class,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Instance => "instance",
            Self::Class => "class",
        })
    }
}

/// Attribute visibility derived from the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// A validated attribute identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttrName(String);

impl AttrName {
    /// Validate and wrap an identifier.
    ///
    /// Letters may be any Unicode alphabetic character (`dueño` is valid).
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidAttributeName {
            name: name.clone(),
            reason: reason.to_owned(),
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(invalid("name is empty")),
            Some(c) if !(c.is_alphabetic() || c == '_') => {
                return Err(invalid("must start with a letter or '_'"));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_alphanumeric() || c == '_') {
            return Err(invalid("only letters, digits and '_' are allowed"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn visibility(&self) -> Visibility {
        if self.0.len() > 2 && self.0.starts_with("__") && !self.0.ends_with("__") {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility() == Visibility::Private
    }

    /// Key this name is stored under when declared inside `class_name`.
    ///
    /// Public names are stored verbatim.
    pub fn storage_key(&self, class_name: &str) -> String {
        match self.visibility() {
            Visibility::Public => self.0.clone(),
            Visibility::Private => mangle(class_name, &self.0),
        }
    }
}

/// `_<Class>__name`, with leading underscores of the class name stripped.
///
/// A class named only with underscores leaves the name as written.
pub fn mangle(class_name: &str, private_name: &str) -> String {
    match class_name.trim_start_matches('_') {
        "" => private_name.to_owned(),
        stripped => format!("_{stripped}{private_name}"),
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AttrName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AttrName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AttrName> for String {
    fn from(name: AttrName) -> Self {
        name.0
    }
}

impl AsRef<str> for AttrName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifiers() {
        for ok in ["color", "_hidden", "n_strings", "dueño", "__real_name", "x1"] {
            assert!(AttrName::new(ok).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for bad in ["", "1st", "has space", "dash-ed", "dot.ted"] {
            assert!(
                matches!(
                    AttrName::new(bad),
                    Err(DomainError::InvalidAttributeName { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn private_detection() {
        assert!(AttrName::new("__real_name").unwrap().is_private());
        assert!(!AttrName::new("__init__").unwrap().is_private());
        assert!(!AttrName::new("_protected").unwrap().is_private());
        assert!(!AttrName::new("__").unwrap().is_private());
    }

    #[test]
    fn private_names_are_mangled_with_class() {
        let name = AttrName::new("__real_name").unwrap();
        assert_eq!(name.storage_key("Spy"), "_Spy__real_name");
        assert_eq!(name.storage_key("_Internal"), "_Internal__real_name");

        assert_eq!(name.storage_key("__"), "__real_name");

        let public = AttrName::new("code_name").unwrap();
        assert_eq!(public.storage_key("Spy"), "code_name");
    }
}
