//! Source rendering of synthesized types
//!
//! Renders a `SynthesizedType` as Java source: one delegating statement
//! per method body, annotations for the copied metadata, and a class
//! declaration extending the property-bag base type. The store entry
//! point names (`_getProperty` and friends) are part of the contract
//! with that base type.

use std::fmt;

use crate::consts::{DEFAULT_NAME, NO_DEFAULT};
use crate::emit::{
    AddRoute, Delegation, RemoveArg, SynthesizedMethod, SynthesizedType, Visibility,
};
use crate::model::{MetaValue, Metadata, TypeRef};

impl fmt::Display for Delegation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delegation::GetProperty { property, kind, cast } => {
                let suffix = kind.map(|k| k.suffix().to_string()).unwrap_or_default();
                match cast {
                    Some(cast) => write!(
                        f,
                        "return ({}) super._getProperty{}(\"{}\");",
                        cast, suffix, property
                    ),
                    None => write!(f, "return super._getProperty{}(\"{}\");", suffix, property),
                }
            }
            Delegation::SetProperty { property } => {
                write!(f, "super._setProperty(\"{}\", arg0);", property)
            }
            Delegation::LookupChild { property, cast } => {
                write!(
                    f,
                    "return ({}) super._lookupChild(\"{}\", arg0);",
                    cast, property
                )
            }
            Delegation::AddChild { property, route, indexed } => {
                let index = if *indexed { "arg1" } else { "-1" };
                let (child, literal, index) = match route {
                    AddRoute::Nothing => ("null", "null", "-1"),
                    AddRoute::Child => ("arg0", "null", index),
                    AddRoute::Literal => ("null", "arg0", index),
                    AddRoute::Value => ("null", "null", "arg0"),
                };
                write!(
                    f,
                    "super._doAdd(\"{}\", {}, {}, {});",
                    property, child, literal, index
                )
            }
            Delegation::RemoveChild { property, arg, by_flag, cast } => {
                let function = if *by_flag { "_doRemoveZ" } else { "_doRemove" };
                let cast = match cast {
                    Some(cast) => format!("({}) ", cast),
                    None => String::new(),
                };
                let (key, index) = match arg {
                    RemoveArg::None => ("null", "-1"),
                    RemoveArg::Key => ("arg0", "-1"),
                    RemoveArg::Index => ("null", "arg0"),
                };
                write!(
                    f,
                    "return {}super.{}(\"{}\", {}, {});",
                    cast, function, property, key, index
                )
            }
            Delegation::InvokeCustom {
                operation,
                param_types,
                ret_kind,
                cast,
                is_void,
            } => {
                write!(
                    f,
                    "Class[] mParams = new Class[{}]; Object[] mVars = new Object[{}]; ",
                    param_types.len(),
                    param_types.len()
                )?;
                for (i, ty) in param_types.iter().enumerate() {
                    write!(f, "mParams[{}] = {}.class; ", i, ty.compilable_name())?;
                }
                for (i, ty) in param_types.iter().enumerate() {
                    match ty.primitive() {
                        Some(kind) => write!(
                            f,
                            "mVars[{}] = new {}(arg{}); ",
                            i,
                            kind.wrapper(),
                            i
                        )?,
                        None => write!(f, "mVars[{}] = arg{}; ", i, i)?,
                    }
                }
                let suffix = ret_kind.map(|k| k.suffix().to_string()).unwrap_or_default();
                if !is_void {
                    write!(f, "return ")?;
                    if let Some(cast) = cast {
                        write!(f, "({}) ", cast)?;
                    }
                }
                write!(
                    f,
                    "super._invokeCustomizedMethod{}(\"{}\", mParams, mVars);",
                    suffix, operation
                )
            }
        }
    }
}

fn write_param(f: &mut fmt::Formatter<'_>, ty: &TypeRef, index: usize, varargs: bool) -> fmt::Result {
    if varargs && ty.is_array() {
        write!(f, "{}... arg{}", ty.component().compilable_name(), index)
    } else {
        write!(f, "{} arg{}", ty.compilable_name(), index)
    }
}

impl fmt::Display for SynthesizedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = match self.visibility {
            Visibility::Public => "public",
            Visibility::Private => "private",
        };
        let ret = match &self.ret {
            Some(r) => r.compilable_name(),
            None => "void".to_string(),
        };
        write!(f, "{} {} {}(", visibility, ret, self.name)?;
        let last = self.params.len().saturating_sub(1);
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_param(f, param, i, self.varargs && i == last)?;
        }
        write!(f, ") {{ {} }}", self.body)
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metadata::Element(e) => {
                write!(f, "@XmlElement(name = \"{}\"", e.name)?;
                if e.namespace != DEFAULT_NAME {
                    write!(f, ", namespace = \"{}\"", e.namespace)?;
                }
                if e.default_value != NO_DEFAULT {
                    write!(f, ", defaultValue = \"{}\"", e.default_value)?;
                }
                if e.nillable {
                    write!(f, ", nillable = true")?;
                }
                if e.required {
                    write!(f, ", required = true")?;
                }
                if let Some(type_name) = &e.type_name {
                    write!(f, ", type = {}.class", type_name)?;
                }
                write!(f, ")")
            }
            Metadata::Attribute(a) => {
                write!(f, "@XmlAttribute(name = \"{}\"", a.name)?;
                if a.namespace != DEFAULT_NAME {
                    write!(f, ", namespace = \"{}\"", a.namespace)?;
                }
                if a.required {
                    write!(f, ", required = true")?;
                }
                write!(f, ")")
            }
            Metadata::Root(r) => {
                write!(f, "@XmlRootElement(name = \"{}\"", r.name)?;
                if r.namespace != DEFAULT_NAME {
                    write!(f, ", namespace = \"{}\"", r.namespace)?;
                }
                write!(f, ")")
            }
            Metadata::Identifier => write!(f, "@XmlID"),
            Metadata::Transient => write!(f, "@XmlTransient"),
            Metadata::Contract => write!(f, "@Contract"),
            Metadata::Custom(c) => {
                write!(f, "@{}(", c.name)?;
                for (i, (key, value)) in c.values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match value {
                        MetaValue::Str(s) => write!(f, "{} = \"{}\"", key, s)?,
                        MetaValue::Bool(b) => write!(f, "{} = {}", key, b)?,
                        MetaValue::Class(name) => write!(f, "{} = {}.class", key, name)?,
                        MetaValue::Unsupported(name) => write!(f, "{} = <{}>", key, name)?,
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl SynthesizedType {
    /// Render the whole implementation class, extending `base_class`
    /// (the property-bag base type supplying the store entry points)
    pub fn render(&self, base_class: &str) -> String {
        let mut out = String::new();
        for metadata in &self.metadata {
            out.push_str(&metadata.to_string());
            out.push('\n');
        }
        out.push_str(&format!(
            "public class {} extends {} implements {} {{\n",
            self.name, base_class, self.interface_name
        ));
        for method in &self.methods {
            for metadata in &method.metadata {
                out.push_str("    ");
                out.push_str(&metadata.to_string());
                out.push('\n');
            }
            out.push_str("    ");
            out.push_str(&method.to_string());
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}
