//! Implementation synthesis
//!
//! Turns an interface descriptor into a `SynthesizedType`: a dispatch
//! table of delegating methods keyed by property name, plus the
//! serialization metadata the binding layer needs. Every method body
//! delegates to the generic property store; each `Delegation` variant is
//! one of the fixed body shapes and also renders as Java source through
//! `Display`.
//!
//! Synthesis is all-or-nothing: any failure propagates before the type
//! value is constructed, so a partial implementation is never observable.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::classify::{setter_name_for, MethodKind};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{
    CustomMeta, ElementMeta, InterfaceDescriptor, MetaValue, Metadata, MethodDescriptor,
    PrimitiveKind, TypeRef,
};
use crate::names::{derive_root_name, NameTable};
use crate::property::{resolve, PropertyDescriptor};

/// Visibility of a synthesized method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Implicit setters are private: reachable by the binding layer,
    /// absent from the interface contract
    Private,
}

/// Which slot of the store's add operation carries the sole value
/// argument; exactly one slot is ever populated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRoute {
    /// No value argument at all
    Nothing,
    /// Interface-typed argument passed as the child instance
    Child,
    /// String argument passed as the literal key value
    Literal,
    /// Non-index primitive argument rides the index slot
    Value,
}

/// How a remove method's parameter is forwarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveArg {
    /// No parameter: remove at the default position
    None,
    /// String parameter forwarded as the lookup key
    Key,
    /// Int parameter forwarded as the index
    Index,
}

/// A delegating method body, one variant per supported shape
#[derive(Debug, Clone, PartialEq)]
pub enum Delegation {
    GetProperty {
        property: String,
        kind: Option<PrimitiveKind>,
        cast: Option<String>,
    },
    SetProperty {
        property: String,
    },
    LookupChild {
        property: String,
        cast: String,
    },
    AddChild {
        property: String,
        route: AddRoute,
        /// Trailing explicit int index parameter present
        indexed: bool,
    },
    RemoveChild {
        property: String,
        arg: RemoveArg,
        /// Boolean-specialized removal path
        by_flag: bool,
        cast: Option<String>,
    },
    InvokeCustom {
        operation: String,
        param_types: Vec<TypeRef>,
        ret_kind: Option<PrimitiveKind>,
        cast: Option<String>,
        is_void: bool,
    },
}

/// One method of the synthesized implementation type
#[derive(Debug, Clone)]
pub struct SynthesizedMethod {
    pub name: String,
    pub visibility: Visibility,
    pub params: Vec<TypeRef>,
    pub ret: Option<TypeRef>,
    pub varargs: bool,
    pub body: Delegation,
    pub metadata: Vec<Metadata>,
}

/// A synthesized implementation of one interface
#[derive(Debug, Clone)]
pub struct SynthesizedType {
    /// Implementation type name (interface name + configured suffix)
    pub name: String,
    pub interface_name: String,
    /// Type-level metadata after copy/rewrite
    pub metadata: Vec<Metadata>,
    pub methods: Vec<SynthesizedMethod>,
    /// Child interfaces registered for recursive synthesis, in
    /// first-encounter order
    pub children: Vec<String>,
}

impl SynthesizedType {
    pub fn method(&self, name: &str) -> Option<&SynthesizedMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Synthesize the implementation type for one interface.
pub fn synthesize(interface: &InterfaceDescriptor, config: &Config) -> Result<SynthesizedType> {
    let names = NameTable::build(interface);

    if config.trace_methods {
        debug!(
            "analyzing {} methods of {}",
            interface.methods.len(),
            interface.name
        );
    }

    let type_metadata = copy_type_metadata(interface)?;

    let mut methods: Vec<SynthesizedMethod> = Vec::new();
    let mut children: Vec<String> = Vec::new();
    let mut setters: BTreeSet<String> = BTreeSet::new();
    // property -> (getter method name, value type, store key)
    let mut getters: BTreeMap<String, (String, TypeRef, String)> = BTreeMap::new();
    let mut already_added_naked: BTreeSet<String> = BTreeSet::new();

    for method in &interface.methods {
        let descriptor = resolve(&interface.name, method, &names)?;

        if config.trace_methods {
            debug!("analyzing method {} of {}: {:?}", method, interface.simple_name(), descriptor.kind);
        }

        let store_key = descriptor
            .serialized_name
            .clone()
            .unwrap_or_else(|| method.name.clone());

        let is_accessor = matches!(descriptor.kind, MethodKind::Getter | MethodKind::Setter);
        if is_accessor {
            let property = descriptor.property.clone().ok_or_else(|| {
                Error::synthesis(format!("accessor {} has no property name", method.name))
            })?;
            let value_type = descriptor.value_type.clone().ok_or_else(|| {
                Error::synthesis(format!("accessor {} has no value type", method.name))
            })?;
            match descriptor.kind {
                MethodKind::Setter => {
                    setters.insert(property.clone());
                }
                MethodKind::Getter => {
                    getters
                        .entry(property.clone())
                        .or_insert((method.name.clone(), value_type, store_key.clone()));
                }
                _ => unreachable!(),
            }

            // First accessor of a nested interface registers the child
            // for recursive synthesis
            if let Some(child) = &descriptor.child_type {
                if !children.contains(&child.name) {
                    children.push(child.name.clone());
                }
            }
        }

        let body = delegation_for(&interface.name, method, &descriptor, &store_key)?;
        let metadata = method_metadata(
            interface,
            method,
            &descriptor,
            &names,
            config,
            &mut already_added_naked,
        )?;

        methods.push(SynthesizedMethod {
            name: method.name.clone(),
            visibility: Visibility::Public,
            params: method.params.clone(),
            ret: method.ret.clone(),
            varargs: method.varargs,
            body,
            metadata,
        });
    }

    // Read-only properties still need a mutator for deserialization
    for (property, (getter_name, value_type, store_key)) in &getters {
        if setters.contains(property) {
            continue;
        }
        methods.push(SynthesizedMethod {
            name: setter_name_for(getter_name),
            visibility: Visibility::Private,
            params: vec![value_type.clone()],
            ret: None,
            varargs: false,
            body: Delegation::SetProperty {
                property: store_key.clone(),
            },
            metadata: Vec::new(),
        });
    }

    Ok(SynthesizedType {
        name: config.impl_name(&interface.name),
        interface_name: interface.name.clone(),
        metadata: type_metadata,
        methods,
        children,
    })
}

/// Build the delegating body for one resolved method
fn delegation_for(
    interface_name: &str,
    method: &MethodDescriptor,
    descriptor: &PropertyDescriptor,
    store_key: &str,
) -> Result<Delegation> {
    let property = store_key.to_string();

    match descriptor.kind {
        MethodKind::Getter => {
            let value_type = descriptor.value_type.as_ref().ok_or_else(|| {
                Error::synthesis(format!("getter {} has no value type", method.name))
            })?;
            let kind = value_type.primitive();
            let cast = if kind.is_none() {
                Some(value_type.compilable_name())
            } else {
                None
            };
            Ok(Delegation::GetProperty { property, kind, cast })
        }
        MethodKind::Setter => Ok(Delegation::SetProperty { property }),
        MethodKind::Lookup => {
            let ret = descriptor.value_type.as_ref().ok_or_else(|| {
                Error::missing_child_type(interface_name, &method.name)
            })?;
            Ok(Delegation::LookupChild {
                property,
                cast: ret.compilable_name(),
            })
        }
        MethodKind::Add => {
            let route = match method.params.first() {
                None => AddRoute::Nothing,
                Some(p) if p.is_interface => AddRoute::Child,
                Some(p) if p.is_string() => AddRoute::Literal,
                Some(_) => AddRoute::Value,
            };
            Ok(Delegation::AddChild {
                property,
                route,
                indexed: method.params.len() == 2,
            })
        }
        MethodKind::Remove => {
            let ret = method.ret.as_ref().ok_or_else(|| {
                Error::synthesis(format!("remove {} has no return type", method.name))
            })?;
            let by_flag = ret.is_boolean();
            let cast = if by_flag {
                None
            } else {
                Some(ret.compilable_name())
            };
            let arg = match method.params.first() {
                None => RemoveArg::None,
                Some(p) if p.is_string() => RemoveArg::Key,
                Some(_) => RemoveArg::Index,
            };
            Ok(Delegation::RemoveChild {
                property,
                arg,
                by_flag,
                cast,
            })
        }
        MethodKind::Custom => {
            let ret_kind = method.ret.as_ref().and_then(|r| r.primitive());
            let cast = match &method.ret {
                Some(r) if ret_kind.is_none() => Some(r.compilable_name()),
                _ => None,
            };
            Ok(Delegation::InvokeCustom {
                operation: method.name.clone(),
                param_types: method.params.clone(),
                ret_kind,
                cast,
                is_void: method.is_void(),
            })
        }
    }
}

/// Copy the source method's metadata onto the synthesized method,
/// rewriting element records for child-typed properties and attaching
/// implicit element metadata for naked properties
fn method_metadata(
    interface: &InterfaceDescriptor,
    method: &MethodDescriptor,
    descriptor: &PropertyDescriptor,
    names: &NameTable,
    config: &Config,
    already_added_naked: &mut BTreeSet<String>,
) -> Result<Vec<Metadata>> {
    let mut out = Vec::new();

    for entry in &method.metadata {
        match entry {
            Metadata::Element(element) => {
                let mut copied = element.clone();
                if let Some(child) = &descriptor.child_type {
                    copied.type_name = Some(config.impl_name(&child.name));
                }
                out.push(Metadata::Element(copied));
            }
            Metadata::Custom(custom) => {
                out.push(Metadata::Custom(check_custom(&interface.name, custom)?));
            }
            other => out.push(other.clone()),
        }
    }

    let is_accessor = matches!(descriptor.kind, MethodKind::Getter | MethodKind::Setter);
    if is_accessor {
        if let Some(property) = &descriptor.property {
            if names.is_naked(property) && !already_added_naked.contains(property) {
                already_added_naked.insert(property.clone());
                let mut implicit = ElementMeta::named(property.clone());
                if let Some(child) = &descriptor.child_type {
                    implicit.type_name = Some(config.impl_name(&child.name));
                }
                out.push(Metadata::Element(implicit));
            }
        }
    }

    Ok(out)
}

/// Copy type-level metadata, suppressing the markers that would hide the
/// implementation type from the binding layer and re-deriving the root
/// name
fn copy_type_metadata(interface: &InterfaceDescriptor) -> Result<Vec<Metadata>> {
    let mut out = Vec::new();
    for entry in &interface.metadata {
        match entry {
            // The implementation type must never register as a contract
            // itself, and must stay visible to the binding layer even
            // when the interface is marked transient
            Metadata::Contract | Metadata::Transient => continue,
            Metadata::Root(root) => {
                out.push(Metadata::Root(crate::model::RootMeta {
                    name: derive_root_name(&root.name, interface.simple_name()),
                    namespace: root.namespace.clone(),
                }));
            }
            Metadata::Custom(custom) => {
                out.push(Metadata::Custom(check_custom(&interface.name, custom)?));
            }
            other => out.push(other.clone()),
        }
    }
    Ok(out)
}

/// Reject custom metadata carrying value shapes the binding layer cannot
/// represent; silent loss here would corrupt serialization
fn check_custom(interface_name: &str, custom: &CustomMeta) -> Result<CustomMeta> {
    for (key, value) in &custom.values {
        if let MetaValue::Unsupported(type_name) = value {
            return Err(Error::unsupported_metadata(
                format!("{} of {} on {}", key, custom.name, interface_name),
                type_name.clone(),
            ));
        }
    }
    Ok(custom.clone())
}
