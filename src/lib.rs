//! XML Bean Compiler (xbeanc)
//!
//! Synthesizes concrete implementation types for abstract data-model
//! interfaces. Given an interface description (methods, signatures,
//! serialization metadata), the synthesizer derives a canonical property
//! model and produces a delegating implementation whose every operation
//! goes through a generic, name-keyed property store, annotated so an
//! XML binding layer can serialize its property values.
//!
//! ## Architecture
//!
//! The synthesis pipeline:
//!
//! - **classify**: method name + signature -> operation kind and
//!   represented property name
//! - **names**: per-interface serialized-name/default table and the
//!   default root-name derivation
//! - **property**: resolved per-method property descriptors
//! - **emit**: the delegating implementation (dispatch table plus
//!   rendered source) and its copied/synthesized metadata
//! - **rt**: property store and dispatch runtime executing the table
//!
//! ```text
//! InterfaceDescriptor -> classify -> names -> property -> emit -> SynthesizedType
//! ```

pub mod classify;
pub mod config;
pub mod consts;
pub mod emit;
pub mod error;
pub mod model;
pub mod names;
pub mod property;
pub mod render;
pub mod rt;

use std::collections::BTreeMap;
use std::collections::VecDeque;

use log::debug;

pub use config::Config;
pub use emit::{synthesize, SynthesizedType};
pub use error::{Error, Result};
pub use model::{InterfaceDescriptor, InterfaceRegistry};

/// Synthesize implementations for `roots` and every child interface
/// reachable from them.
///
/// Processes an explicit breadth-first worklist so cyclic interface
/// graphs terminate; each interface is synthesized at most once. A child
/// interface missing from the registry fails the whole run; no partial
/// result map is returned.
pub fn synthesize_all(
    roots: &[&str],
    registry: &InterfaceRegistry,
    config: &Config,
) -> Result<BTreeMap<String, SynthesizedType>> {
    let mut done: BTreeMap<String, SynthesizedType> = BTreeMap::new();
    let mut queue: VecDeque<String> = roots.iter().map(|r| r.to_string()).collect();

    while let Some(name) = queue.pop_front() {
        if done.contains_key(&name) {
            continue;
        }
        let interface = registry
            .get(&name)
            .ok_or_else(|| Error::UnknownInterface { name: name.clone() })?;

        debug!("synthesizing implementation for {}", name);
        let synthesized = synthesize(interface, config)?;

        for child in &synthesized.children {
            if !done.contains_key(child) {
                queue.push_back(child.clone());
            }
        }
        done.insert(name, synthesized);
    }

    Ok(done)
}
