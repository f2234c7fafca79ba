//! Synthesis configuration

use crate::consts::IMPL_SUFFIX;

/// Configuration for a synthesis run
///
/// Passed by reference into every entry point; there is no global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Suffix appended to an interface name to form the name of its
    /// synthesized implementation type.
    pub impl_suffix: String,

    /// Emit a debug log line for every analyzed method. Off by default
    /// since descriptor formatting is not free.
    pub trace_methods: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            impl_suffix: IMPL_SUFFIX.to_string(),
            trace_methods: false,
        }
    }
}

impl Config {
    /// The implementation type name for `interface_name`
    pub fn impl_name(&self, interface_name: &str) -> String {
        format!("{}{}", interface_name, self.impl_suffix)
    }
}
