//! Property descriptor resolution
//!
//! Combines the classifier's view of a method with the interface's name
//! table into a single resolved descriptor. Resolution is pure data
//! construction; methods of one interface resolve independently.

use crate::classify::{classify, MethodKind};
use crate::error::{Error, Result};
use crate::model::{MethodDescriptor, TypeRef};
use crate::names::NameTable;

/// Everything the emitter needs to know about one method
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub kind: MethodKind,
    /// Represented property name; `None` for custom operations
    pub property: Option<String>,
    /// Externally-visible serialized name resolved through the name table
    pub serialized_name: Option<String>,
    /// Default value string, or the no-default sentinel
    pub default_value: String,
    /// The property value type (getter return / setter parameter /
    /// lookup return)
    pub value_type: Option<TypeRef>,
    /// The nested interface type when the value (or its list/array
    /// element) is itself a modeled interface
    pub child_type: Option<TypeRef>,
    pub is_list: bool,
    pub is_array: bool,
    /// Identity/XML-ID marker for keyed lookup
    pub is_key: bool,
}

/// Resolve the descriptor for `method` against `names`.
///
/// `interface_name` is only used for error context. Fails when a
/// list-typed accessor has no resolvable element type or a lookup
/// returns a non-interface type.
pub fn resolve(
    interface_name: &str,
    method: &MethodDescriptor,
    names: &NameTable,
) -> Result<PropertyDescriptor> {
    let (kind, property) = classify(method);

    let mut value_type = None;
    let mut child_type = None;
    let mut is_list = false;
    let mut is_array = false;

    match kind {
        MethodKind::Getter => {
            let ret = method.ret.as_ref().ok_or_else(|| {
                Error::synthesis(format!("getter {} has no return type", method.name))
            })?;
            value_type = Some(ret.clone());
            (child_type, is_list, is_array) =
                child_of_value(interface_name, method, ret)?;
        }
        MethodKind::Setter => {
            let arg = &method.params[0];
            value_type = Some(arg.clone());
            (child_type, is_list, is_array) =
                child_of_value(interface_name, method, arg)?;
        }
        MethodKind::Lookup => {
            let ret = method.ret.as_ref().ok_or_else(|| {
                Error::synthesis(format!("lookup {} has no return type", method.name))
            })?;
            if !ret.is_interface || ret.is_array() {
                return Err(Error::missing_child_type(interface_name, &method.name));
            }
            value_type = Some(ret.clone());
            child_type = Some(ret.clone());
        }
        MethodKind::Add | MethodKind::Remove | MethodKind::Custom => {}
    }

    let serialized_name = property.as_deref().map(|p| names.serialized_name(p));
    let default_value = match property.as_deref() {
        Some(p) => names.default_value(p),
        None => crate::consts::NO_DEFAULT.to_string(),
    };

    Ok(PropertyDescriptor {
        kind,
        property,
        serialized_name,
        default_value,
        value_type,
        child_type,
        is_list,
        is_array,
        is_key: method.is_identifier(),
    })
}

/// Child-type detection for a getter/setter value type: list element,
/// interface-typed array component, or direct nested interface.
fn child_of_value(
    interface_name: &str,
    method: &MethodDescriptor,
    value: &TypeRef,
) -> Result<(Option<TypeRef>, bool, bool)> {
    if value.is_list() {
        let element = value
            .first_type_arg()
            .cloned()
            .ok_or_else(|| Error::missing_child_type(interface_name, &method.name))?;
        // Lists of platform types (List<String>) are plain values, not
        // nested children
        let child = (element.is_interface && !element.is_builtin()).then_some(element);
        return Ok((child, true, false));
    }
    if value.is_array() {
        let component = value.component();
        if component.is_interface && !component.is_builtin() {
            return Ok((Some(component), false, true));
        }
        return Ok((None, false, false));
    }
    if value.is_interface && !value.is_builtin() {
        return Ok((Some(value.clone()), false, false));
    }
    Ok((None, false, false))
}
