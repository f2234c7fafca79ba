//! Method shape classification
//!
//! Pure functions from a method signature to its operation kind and
//! represented property name. Probes are checked in a fixed priority
//! order (setter, getter, lookup, add, remove); each probe rejects a
//! non-matching method by returning `None` instead of failing, and a
//! method matching no probe is an opaque custom operation.

use crate::consts::{ADD, GET, IS, LOOKUP, REMOVE, SET};
use crate::model::MethodDescriptor;

/// The operation kind of a classified method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Getter,
    Setter,
    Lookup,
    Add,
    Remove,
    Custom,
}

/// Classify a method: operation kind plus represented property name.
///
/// Custom operations carry no property name.
pub fn classify(method: &MethodDescriptor) -> (MethodKind, Option<String>) {
    if let Some(prop) = as_setter(method) {
        return (MethodKind::Setter, Some(prop));
    }
    if let Some(prop) = as_getter(method) {
        return (MethodKind::Getter, Some(prop));
    }
    if let Some(prop) = as_lookup(method) {
        return (MethodKind::Lookup, Some(prop));
    }
    if let Some(prop) = as_add(method) {
        return (MethodKind::Add, Some(prop));
    }
    if let Some(prop) = as_remove(method) {
        return (MethodKind::Remove, Some(prop));
    }
    (MethodKind::Custom, None)
}

/// Lowercase the first character of a property-name remainder.
///
/// This is deliberately naive: `URL` becomes `uRL`. The derived name is
/// an internal key, and the naive form keeps derivation reversible.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The conventional setter name for a getter method name
/// (`getFoo`/`isFoo` -> `setFoo`)
pub fn setter_name_for(getter_name: &str) -> String {
    let remainder = getter_name
        .strip_prefix(GET)
        .or_else(|| getter_name.strip_prefix(IS))
        .unwrap_or(getter_name);
    format!("{}{}", SET, remainder)
}

fn remainder_after<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(prefix)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest)
}

/// `setX(T) -> void`
pub fn as_setter(method: &MethodDescriptor) -> Option<String> {
    let rest = remainder_after(&method.name, SET)?;
    if method.params.len() != 1 {
        return None;
    }
    if !method.is_void() {
        return None;
    }
    Some(decapitalize(rest))
}

/// `getX() -> T` or `isX() -> boolean`
pub fn as_getter(method: &MethodDescriptor) -> Option<String> {
    if let Some(rest) = remainder_after(&method.name, GET) {
        if method.params.is_empty() && !method.is_void() {
            return Some(decapitalize(rest));
        }
        return None;
    }

    let rest = remainder_after(&method.name, IS)?;
    if !method.params.is_empty() {
        return None;
    }
    match &method.ret {
        Some(ret) if ret.is_boolean_like() => Some(decapitalize(rest)),
        _ => None,
    }
}

/// `lookupX(String) -> T` with T non-void
pub fn as_lookup(method: &MethodDescriptor) -> Option<String> {
    let rest = remainder_after(&method.name, LOOKUP)?;
    if method.params.len() != 1 || !method.params[0].is_string() {
        return None;
    }
    if method.is_void() {
        return None;
    }
    Some(decapitalize(rest))
}

/// `addX(...)` returning void, with the limited parameter shapes:
/// `()`, `(String)`, `(int)`, `(child)`, `(String, int)`, `(child, int)`
pub fn as_add(method: &MethodDescriptor) -> Option<String> {
    let rest = remainder_after(&method.name, ADD)?;
    if !method.is_void() {
        return None;
    }
    let prop = decapitalize(rest);

    if method.params.len() > 2 {
        return None;
    }
    if method.params.is_empty() {
        return Some(prop);
    }

    let param0 = &method.params[0];
    if !param0.is_string() && !param0.is_int() && !param0.is_interface {
        return None;
    }
    if method.params.len() == 1 {
        return Some(prop);
    }

    // Two parameters: the trailing one must be an int index, and an int
    // first parameter is only legal on its own
    if param0.is_int() {
        return None;
    }
    if method.params[1].is_int() {
        return Some(prop);
    }
    None
}

/// `removeX(...)` returning boolean or an interface type, with at most
/// one `String` or `int` parameter
pub fn as_remove(method: &MethodDescriptor) -> Option<String> {
    let rest = remainder_after(&method.name, REMOVE)?;
    let ret = method.ret.as_ref()?;
    if !ret.is_boolean() && !ret.is_interface {
        return None;
    }
    let prop = decapitalize(rest);

    match method.params.len() {
        0 => Some(prop),
        1 if method.params[0].is_string() || method.params[0].is_int() => Some(prop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decapitalize_lowers_only_the_first_char() {
        assert_eq!(decapitalize("Name"), "name");
        assert_eq!(decapitalize("URL"), "uRL");
        assert_eq!(decapitalize("x"), "x");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn setter_name_conversion() {
        assert_eq!(setter_name_for("getAddress"), "setAddress");
        assert_eq!(setter_name_for("isActive"), "setActive");
    }
}
