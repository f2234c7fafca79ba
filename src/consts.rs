// Reserved strings of the naming-convention surface. These are wire
// contracts shared with the binding layer and must never change.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Sentinel meaning "no explicit XML name was declared, derive one".
pub const DEFAULT_NAME: &str = "##default";

/// Sentinel meaning "this property has no default value".
pub const NO_DEFAULT: &str = "\u{0}";

/// Suffix appended to an interface name to form its implementation name.
pub const IMPL_SUFFIX: &str = "_$$_XBean";

// Method-name prefixes recognized by the classifier
pub const GET: &str = "get";
pub const IS: &str = "is";
pub const SET: &str = "set";
pub const LOOKUP: &str = "lookup";
pub const ADD: &str = "add";
pub const REMOVE: &str = "remove";

// Reference type names consulted by the classifier and emitter
pub const STRING_TYPE: &str = "java.lang.String";
pub const LIST_TYPE: &str = "java.util.List";
pub const BOOLEAN_WRAPPER_TYPE: &str = "java.lang.Boolean";

/// Namespace prefixes whose interface types are never treated as
/// synthesizable children (platform types, not model types).
pub static BUILTIN_NAMESPACES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.insert("java.");
    set.insert("javax.");
    set
});

/// True when `name` lives under one of the reserved builtin namespaces.
pub fn is_builtin_name(name: &str) -> bool {
    BUILTIN_NAMESPACES.iter().any(|prefix| name.starts_with(prefix))
}
