//! Serialized-name resolution
//!
//! A single pass over an interface's accessor methods resolves every
//! property's externally-visible name and default value from its
//! element/attribute metadata, and records the properties that carry no
//! naming metadata at all ("naked" properties, which later receive
//! synthesized element metadata). Also home of the root-name derivation
//! used for the default serialized root tag.

use std::collections::{BTreeMap, BTreeSet};

use crate::classify::{as_getter, as_setter};
use crate::consts::{DEFAULT_NAME, NO_DEFAULT};
use crate::model::InterfaceDescriptor;

#[derive(Debug, Clone)]
struct ElementData {
    name: String,
    default_value: String,
}

/// Resolved (serialized name, default value) table for one interface
#[derive(Debug, Default)]
pub struct NameTable {
    mapping: BTreeMap<String, ElementData>,
    naked: BTreeSet<String>,
}

impl NameTable {
    /// Build the table with a single pass over the interface's methods.
    ///
    /// Conflicting metadata for the same property resolves first-match
    /// in declaration order; the table never yields two serialized names
    /// for one property.
    pub fn build(interface: &InterfaceDescriptor) -> NameTable {
        let mut mapping: BTreeMap<String, ElementData> = BTreeMap::new();
        let mut unmapped: BTreeSet<String> = BTreeSet::new();

        for method in &interface.methods {
            let property = match as_setter(method).or_else(|| as_getter(method)) {
                Some(p) => p,
                None => continue,
            };

            if let Some(element) = method.element_meta() {
                let name = if element.name == DEFAULT_NAME {
                    property.clone()
                } else {
                    element.name.clone()
                };
                mapping.entry(property).or_insert(ElementData {
                    name,
                    default_value: element.default_value.clone(),
                });
            } else if let Some(attribute) = method.attribute_meta() {
                let name = if attribute.name == DEFAULT_NAME {
                    property.clone()
                } else {
                    attribute.name.clone()
                };
                mapping.entry(property).or_insert(ElementData {
                    name,
                    default_value: NO_DEFAULT.to_string(),
                });
            } else {
                unmapped.insert(property);
            }
        }

        // A property mapped through one accessor and unmapped through the
        // other resolves to the mapped entry
        let naked = unmapped
            .into_iter()
            .filter(|p| !mapping.contains_key(p))
            .collect();

        NameTable { mapping, naked }
    }

    /// The serialized name for `property`; the property name itself when
    /// no metadata named it
    pub fn serialized_name(&self, property: &str) -> String {
        match self.mapping.get(property) {
            Some(data) => data.name.clone(),
            None => property.to_string(),
        }
    }

    /// The default value for `property`, or the no-default sentinel
    pub fn default_value(&self, property: &str) -> String {
        match self.mapping.get(property) {
            Some(data) => data.default_value.clone(),
            None => NO_DEFAULT.to_string(),
        }
    }

    /// True when the property carries no element/attribute metadata at all
    pub fn is_naked(&self, property: &str) -> bool {
        self.naked.contains(property)
    }
}

/// Derive the serialized root name for an interface.
///
/// An explicit declaration wins verbatim; otherwise the simple name is
/// hyphenated char by char: an uppercase char following a non-uppercase
/// output gets a hyphen before it, uppercase runs stay joined.
/// `ServerConfig` -> `server-config`, `MyXMLThing` -> `my-xmlthing`.
pub fn derive_root_name(explicit: &str, simple_name: &str) -> String {
    if explicit != DEFAULT_NAME {
        return explicit.to_string();
    }

    let mut out = String::new();
    let mut last_was_upper = false;
    for (i, ch) in simple_name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 && !last_was_upper {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            last_was_upper = true;
        } else {
            out.push(ch);
            last_was_upper = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenation_of_camel_case() {
        assert_eq!(derive_root_name(DEFAULT_NAME, "ServerConfig"), "server-config");
        assert_eq!(derive_root_name(DEFAULT_NAME, "HttpServerConfig"), "http-server-config");
        assert_eq!(derive_root_name(DEFAULT_NAME, "MyXMLThing"), "my-xmlthing");
        assert_eq!(derive_root_name(DEFAULT_NAME, "XMLName"), "xmlname");
        assert_eq!(derive_root_name(DEFAULT_NAME, "simple"), "simple");
    }

    #[test]
    fn explicit_root_name_wins_verbatim() {
        assert_eq!(derive_root_name("cfg", "ServerConfig"), "cfg");
    }
}
