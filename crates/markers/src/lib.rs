//! Marker registry and the built-in marker catalog.
//!
//! A marker is a named, parameterizable placeholder. This crate owns the
//! mapping from marker name to its resolving function and ships the built-in
//! catalog (date/time, math, text, random). The substitution engine in
//! `stamp-engine` is written exclusively against [`MarkerRegistry`] and never
//! special-cases a marker name.

pub mod builtins;
pub mod error;
pub mod registry;

pub use error::MarkerError;
pub use registry::{MarkerFn, MarkerRegistry};
