//! Property store and dispatch runtime
//!
//! A small executable counterpart to the synthesized dispatch table: a
//! name-keyed property store with typed accessors and child-list
//! operations, and a bean instance that interprets a method's
//! `Delegation` against that store. This is what makes a synthesized
//! type behave like a hand-written bean at run time.

use std::collections::BTreeMap;

use crate::emit::{AddRoute, Delegation, RemoveArg, SynthesizedType};
use crate::error::{Error, Result};
use crate::model::PrimitiveKind;

/// A property value held by the store
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Byte(i8),
    Char(char),
    Short(i16),
    Float(f32),
    Double(f64),
    Str(String),
    /// A nested bean's raw property map
    Bean(BTreeMap<String, Value>),
}

impl Value {
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    pub fn as_int(&self) -> i32 {
        match self {
            Value::Int(i) => *i,
            _ => 0,
        }
    }

    pub fn as_long(&self) -> i64 {
        match self {
            Value::Long(l) => *l,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// One entry of a child list; `key` is the lookup key captured when the
/// child was added by literal
#[derive(Debug, Clone, PartialEq)]
pub struct ChildEntry {
    pub key: Option<String>,
    pub value: Value,
}

/// Receiver for custom operations dispatched through the store
pub trait Customizer {
    fn invoke(&mut self, operation: &str, args: &[Value]) -> Value;
}

/// The generic, name-keyed property store backing every synthesized
/// implementation
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: BTreeMap<String, Value>,
    children: BTreeMap<String, Vec<ChildEntry>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(&mut self, property: &str, value: Value) {
        self.values.insert(property.to_string(), value);
    }

    /// Absent properties read as null, like an unset bean field
    pub fn get_property(&self, property: &str) -> Value {
        self.values.get(property).cloned().unwrap_or(Value::Null)
    }

    /// Typed read with the Java primitive default for absent values
    pub fn get_primitive(&self, property: &str, kind: PrimitiveKind) -> Value {
        let value = self.get_property(property);
        if !value.is_null() {
            return value;
        }
        match kind {
            PrimitiveKind::Int => Value::Int(0),
            PrimitiveKind::Long => Value::Long(0),
            PrimitiveKind::Boolean => Value::Bool(false),
            PrimitiveKind::Byte => Value::Byte(0),
            PrimitiveKind::Char => Value::Char('\u{0}'),
            PrimitiveKind::Short => Value::Short(0),
            PrimitiveKind::Float => Value::Float(0.0),
            PrimitiveKind::Double => Value::Double(0.0),
        }
    }

    /// Append or insert a child: a child instance, a keyed literal, or a
    /// bare position marker. Index -1 appends.
    pub fn add_child(
        &mut self,
        property: &str,
        child: Option<Value>,
        literal: Option<&str>,
        index: i32,
    ) {
        let entry = match (child, literal) {
            (Some(value), _) => ChildEntry { key: None, value },
            (None, Some(literal)) => ChildEntry {
                key: Some(literal.to_string()),
                value: Value::Str(literal.to_string()),
            },
            (None, None) => ChildEntry {
                key: None,
                value: Value::Null,
            },
        };
        let list = self.children.entry(property.to_string()).or_default();
        if index < 0 || index as usize >= list.len() {
            list.push(entry);
        } else {
            list.insert(index as usize, entry);
        }
    }

    /// Remove a child by key, by index, or at the default (first)
    /// position; returns the removed value
    pub fn remove_child(&mut self, property: &str, key: Option<&str>, index: i32) -> Option<Value> {
        let list = self.children.get_mut(property)?;
        let position = match key {
            Some(key) => list.iter().position(|e| e.key.as_deref() == Some(key))?,
            None if index >= 0 => {
                if index as usize >= list.len() {
                    return None;
                }
                index as usize
            }
            None => {
                if list.is_empty() {
                    return None;
                }
                0
            }
        };
        Some(list.remove(position).value)
    }

    /// Boolean-specialized removal
    pub fn remove_child_flag(&mut self, property: &str, key: Option<&str>, index: i32) -> bool {
        self.remove_child(property, key, index).is_some()
    }

    /// Find a child by its lookup key
    pub fn lookup_child(&self, property: &str, key: &str) -> Value {
        self.children
            .get(property)
            .and_then(|list| list.iter().find(|e| e.key.as_deref() == Some(key)))
            .map(|e| e.value.clone())
            .unwrap_or(Value::Null)
    }

    pub fn child_count(&self, property: &str) -> usize {
        self.children.get(property).map(|l| l.len()).unwrap_or(0)
    }
}

/// A live instance of a synthesized type: the dispatch table plus its
/// backing store
pub struct BeanInstance {
    ty: SynthesizedType,
    store: PropertyStore,
    customizer: Option<Box<dyn Customizer>>,
}

impl BeanInstance {
    pub fn new(ty: SynthesizedType) -> Self {
        Self {
            ty,
            store: PropertyStore::new(),
            customizer: None,
        }
    }

    pub fn with_customizer(mut self, customizer: Box<dyn Customizer>) -> Self {
        self.customizer = Some(customizer);
        self
    }

    pub fn synthesized_type(&self) -> &SynthesizedType {
        &self.ty
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PropertyStore {
        &mut self.store
    }

    /// Invoke a method by name, interpreting its delegating body.
    ///
    /// Private synthesized setters are reachable here; that is how the
    /// binding layer populates read-only properties.
    pub fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        let body = self
            .ty
            .method(method)
            .map(|m| m.body.clone())
            .ok_or_else(|| Error::synthesis(format!("no method {} on {}", method, self.ty.name)))?;

        match body {
            Delegation::GetProperty { property, kind, .. } => match kind {
                Some(kind) => Ok(self.store.get_primitive(&property, kind)),
                None => Ok(self.store.get_property(&property)),
            },
            Delegation::SetProperty { property } => {
                let value = args
                    .first()
                    .cloned()
                    .ok_or_else(|| Error::synthesis(format!("{} needs a value argument", method)))?;
                self.store.set_property(&property, value);
                Ok(Value::Null)
            }
            Delegation::LookupChild { property, .. } => {
                let key = args
                    .first()
                    .and_then(|a| a.as_str())
                    .ok_or_else(|| Error::synthesis(format!("{} needs a string key", method)))?;
                Ok(self.store.lookup_child(&property, key))
            }
            Delegation::AddChild { property, route, indexed } => {
                let index = if indexed {
                    args.get(1).map(|a| a.as_int()).unwrap_or(-1)
                } else {
                    -1
                };
                match route {
                    AddRoute::Nothing => self.store.add_child(&property, None, None, -1),
                    AddRoute::Child => {
                        let child = args.first().cloned().ok_or_else(|| {
                            Error::synthesis(format!("{} needs a child argument", method))
                        })?;
                        self.store.add_child(&property, Some(child), None, index);
                    }
                    AddRoute::Literal => {
                        let literal = args.first().and_then(|a| a.as_str()).ok_or_else(|| {
                            Error::synthesis(format!("{} needs a string argument", method))
                        })?;
                        self.store.add_child(&property, None, Some(literal), index);
                    }
                    AddRoute::Value => {
                        let position = args.first().map(|a| a.as_int()).unwrap_or(-1);
                        self.store.add_child(&property, None, None, position);
                    }
                }
                Ok(Value::Null)
            }
            Delegation::RemoveChild { property, arg, by_flag, .. } => {
                let (key, index) = match arg {
                    RemoveArg::None => (None, -1),
                    RemoveArg::Key => (args.first().and_then(|a| a.as_str()), -1),
                    RemoveArg::Index => (None, args.first().map(|a| a.as_int()).unwrap_or(-1)),
                };
                if by_flag {
                    Ok(Value::Bool(self.store.remove_child_flag(&property, key, index)))
                } else {
                    Ok(self
                        .store
                        .remove_child(&property, key, index)
                        .unwrap_or(Value::Null))
                }
            }
            Delegation::InvokeCustom { operation, .. } => match &mut self.customizer {
                Some(customizer) => Ok(customizer.invoke(&operation, args)),
                None => Err(Error::synthesis(format!(
                    "no customizer installed for operation {}",
                    operation
                ))),
            },
        }
    }
}
