use thiserror::Error;

/// Result type for xbeanc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the bean synthesizer
///
/// Every fatal condition carries the interface and/or method name so the
/// failing model definition can be located. Synthesis is all-or-nothing
/// per interface: once any of these is raised, no implementation type is
/// produced for that interface.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot determine child type of method {method} on {interface}")]
    MissingChildType { interface: String, method: String },

    #[error("metadata value of type {value_type} in {name} is not yet implemented")]
    UnsupportedMetadataValue { name: String, value_type: String },

    #[error("interface {name} is referenced as a child but is not registered")]
    UnknownInterface { name: String },

    #[error("synthesis error: {message}")]
    Synthesis { message: String },
}

impl Error {
    /// Create a missing-child-type error for a method of an interface
    pub fn missing_child_type(interface: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MissingChildType {
            interface: interface.into(),
            method: method.into(),
        }
    }

    /// Create an unsupported-metadata-value error
    pub fn unsupported_metadata(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self::UnsupportedMetadataValue {
            name: name.into(),
            value_type: value_type.into(),
        }
    }

    /// Create a generic synthesis error
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis { message: message.into() }
    }
}
