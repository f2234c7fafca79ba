//! Input data model for synthesis
//!
//! Descriptors arrive fully populated from a front end (source parser,
//! schema importer, or IDL reader) and are immutable plain data from the
//! synthesizer's point of view. Metadata is statically typed: the front
//! end resolves every annotation into one of the `Metadata` records, so
//! there is no generic "copy unknown annotation" path at synthesis time.

use std::collections::BTreeMap;
use std::fmt;

use crate::consts::{
    is_builtin_name, BOOLEAN_WRAPPER_TYPE, DEFAULT_NAME, LIST_TYPE, NO_DEFAULT, STRING_TYPE,
};

/// The eight primitive value kinds, with the single-letter accessor
/// suffix used to pick the type-specialized property-store entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Int,
    Long,
    Boolean,
    Byte,
    Char,
    Short,
    Float,
    Double,
}

impl PrimitiveKind {
    pub fn from_name(name: &str) -> Option<PrimitiveKind> {
        match name {
            "int" => Some(PrimitiveKind::Int),
            "long" => Some(PrimitiveKind::Long),
            "boolean" => Some(PrimitiveKind::Boolean),
            "byte" => Some(PrimitiveKind::Byte),
            "char" => Some(PrimitiveKind::Char),
            "short" => Some(PrimitiveKind::Short),
            "float" => Some(PrimitiveKind::Float),
            "double" => Some(PrimitiveKind::Double),
            _ => None,
        }
    }

    /// Accessor suffix on the store's type-specialized entry points
    pub fn suffix(&self) -> char {
        match self {
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
        }
    }

    /// Wrapper class used when boxing a primitive argument
    pub fn wrapper(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Char => "java.lang.Character",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
        }
    }
}

/// A reference to a type as it appears in a method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Fully-qualified name of the base type (`int`, `java.lang.String`,
    /// `com.acme.Server`). For arrays this is the component base name.
    pub name: String,
    pub array_dims: u32,
    /// Generic type arguments (`java.util.List<Child>` carries `Child`)
    pub type_args: Vec<TypeRef>,
    pub is_interface: bool,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            array_dims: 0,
            type_args: Vec::new(),
            is_interface: false,
        }
    }

    /// A primitive or other non-interface named type
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    pub fn int() -> Self {
        Self::new("int")
    }

    pub fn boolean() -> Self {
        Self::new("boolean")
    }

    pub fn string() -> Self {
        Self::new(STRING_TYPE)
    }

    /// An interface type (candidate child when outside builtin namespaces)
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            is_interface: true,
            ..Self::new(name)
        }
    }

    /// `java.util.List<element>`
    pub fn list_of(element: TypeRef) -> Self {
        Self {
            name: LIST_TYPE.to_string(),
            array_dims: 0,
            type_args: vec![element],
            is_interface: true,
        }
    }

    /// An array of `component`
    pub fn array_of(component: TypeRef) -> Self {
        Self {
            array_dims: component.array_dims + 1,
            ..component
        }
    }

    pub fn is_array(&self) -> bool {
        self.array_dims > 0
    }

    /// The component type of an array, or the type itself otherwise
    pub fn component(&self) -> TypeRef {
        if self.array_dims == 0 {
            return self.clone();
        }
        Self {
            array_dims: self.array_dims - 1,
            ..self.clone()
        }
    }

    pub fn primitive(&self) -> Option<PrimitiveKind> {
        if self.is_array() {
            return None;
        }
        PrimitiveKind::from_name(&self.name)
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive().is_some()
    }

    pub fn is_string(&self) -> bool {
        !self.is_array() && self.name == STRING_TYPE
    }

    pub fn is_int(&self) -> bool {
        !self.is_array() && self.name == "int"
    }

    pub fn is_boolean(&self) -> bool {
        !self.is_array() && self.name == "boolean"
    }

    pub fn is_boolean_like(&self) -> bool {
        !self.is_array() && (self.name == "boolean" || self.name == BOOLEAN_WRAPPER_TYPE)
    }

    pub fn is_list(&self) -> bool {
        !self.is_array() && self.name == LIST_TYPE
    }

    pub fn first_type_arg(&self) -> Option<&TypeRef> {
        self.type_args.first()
    }

    /// True when the base name lives under a reserved builtin namespace
    pub fn is_builtin(&self) -> bool {
        is_builtin_name(&self.name)
    }

    /// Source-renderable name: `int`, `java.lang.String`, `com.acme.Foo[]`
    pub fn compilable_name(&self) -> String {
        let mut name = self.name.clone();
        for _ in 0..self.array_dims {
            name.push_str("[]");
        }
        name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compilable_name())
    }
}

/// A single metadata attribute value
///
/// `Unsupported` records a shape the front end could not model; copying
/// one during synthesis is a fatal error rather than a silent drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Str(String),
    Bool(bool),
    Class(String),
    Unsupported(String),
}

impl MetaValue {
    pub fn type_name(&self) -> &str {
        match self {
            MetaValue::Str(_) => "String",
            MetaValue::Bool(_) => "Boolean",
            MetaValue::Class(_) => "Class",
            MetaValue::Unsupported(name) => name,
        }
    }
}

/// Element-style serialization metadata on an accessor method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMeta {
    /// Serialized element name, or the `##default` sentinel
    pub name: String,
    pub namespace: String,
    /// Default value string, or the no-default sentinel
    pub default_value: String,
    pub nillable: bool,
    pub required: bool,
    /// Implementation type name for child-typed properties
    pub type_name: Option<String>,
}

impl ElementMeta {
    /// Element metadata with every attribute defaulted
    pub fn defaulted() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            namespace: DEFAULT_NAME.to_string(),
            default_value: NO_DEFAULT.to_string(),
            nillable: false,
            required: false,
            type_name: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::defaulted()
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }
}

/// Attribute-style serialization metadata on an accessor method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMeta {
    pub name: String,
    pub namespace: String,
    pub required: bool,
}

impl AttributeMeta {
    pub fn defaulted() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            namespace: DEFAULT_NAME.to_string(),
            required: false,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::defaulted()
        }
    }
}

/// Root-element metadata on an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMeta {
    pub name: String,
    pub namespace: String,
}

impl RootMeta {
    pub fn defaulted() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            namespace: DEFAULT_NAME.to_string(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::defaulted()
        }
    }
}

/// A metadata entry not interpreted by the synthesizer itself, copied
/// through to the implementation type verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMeta {
    pub name: String,
    pub values: BTreeMap<String, MetaValue>,
}

impl CustomMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

/// A resolved metadata record attached to a method or interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    Element(ElementMeta),
    Attribute(AttributeMeta),
    Root(RootMeta),
    /// Key/identity marker for keyed child lookup
    Identifier,
    /// Not-serializable marker; suppressed when copying type metadata so
    /// the implementation type stays visible to the binding layer
    Transient,
    /// DI-contract marker; the implementation type must never register as
    /// a contract in place of its interface
    Contract,
    Custom(CustomMeta),
}

/// One method of an interface under synthesis
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    pub name: String,
    pub params: Vec<TypeRef>,
    /// `None` means void
    pub ret: Option<TypeRef>,
    pub varargs: bool,
    pub metadata: Vec<Metadata>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            ret: None,
            varargs: false,
            metadata: Vec::new(),
        }
    }

    pub fn param(mut self, ty: TypeRef) -> Self {
        self.params.push(ty);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.ret = Some(ty);
        self
    }

    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    pub fn meta(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    pub fn is_void(&self) -> bool {
        self.ret.is_none()
    }

    pub fn element_meta(&self) -> Option<&ElementMeta> {
        self.metadata.iter().find_map(|m| match m {
            Metadata::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn attribute_meta(&self) -> Option<&AttributeMeta> {
        self.metadata.iter().find_map(|m| match m {
            Metadata::Attribute(a) => Some(a),
            _ => None,
        })
    }

    pub fn is_identifier(&self) -> bool {
        self.metadata.iter().any(|m| matches!(m, Metadata::Identifier))
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ret {
            Some(r) => write!(f, "{} {}(", r.compilable_name(), self.name)?,
            None => write!(f, "void {}(", self.name)?,
        }
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p.compilable_name())?;
        }
        write!(f, ")")
    }
}

/// An interface to synthesize an implementation for
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
    /// Fully-qualified interface name
    pub name: String,
    pub methods: Vec<MethodDescriptor>,
    pub metadata: Vec<Metadata>,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            metadata: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn meta(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    /// The simple (unqualified) name, i.e. the last dot-segment
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => &self.name,
        }
    }

    pub fn root_meta(&self) -> Option<&RootMeta> {
        self.metadata.iter().find_map(|m| match m {
            Metadata::Root(r) => Some(r),
            _ => None,
        })
    }
}

/// Name-keyed registry of interface descriptors, the input universe for
/// a worklist synthesis run
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    interfaces: BTreeMap<String, InterfaceDescriptor>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: InterfaceDescriptor) {
        self.interfaces.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceDescriptor> {
        self.interfaces.get(name)
    }
}
