//! stamp: marker-based text substitution.
//!
//! Replaces `{{marker}}` placeholders in arbitrary text with computed string
//! values, either caller-supplied custom data or built-in dynamic markers
//! (dates, math, text transforms, random). See [`Engine::process`] for the
//! substitution contract.
//!
//! ```
//! use stamp::{CustomData, Engine};
//!
//! let engine = Engine::new();
//! let mut data = CustomData::new();
//! data.insert("name", "Bob");
//! assert_eq!(engine.process("Hi {{name}}!", &data), "Hi Bob!");
//! assert_eq!(engine.process_text("{{add:5,3,2}}"), "10");
//! ```
//!
//! Prefer constructing a fresh [`Engine`] per isolated use case (for
//! example per request in a server context). The [`default_engine`]
//! convenience instance shares one mutable registry across every caller
//! that touches it.

pub mod tree;

pub use stamp_engine::{CustomData, Engine, MarkerCall, Scalar, parse_marker};
pub use stamp_markers::{MarkerError, MarkerFn, MarkerRegistry};
pub use tree::{DEFAULT_SELECTOR, DocumentTree, NodeId, VecTree, auto_update};

use std::sync::{Mutex, OnceLock, PoisonError};

static DEFAULT_ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();

/// The process-wide shared engine instance, created on first use.
///
/// The mutex serializes [`register_marker`] against concurrent [`process`]
/// calls; every caller that uses the free functions below shares this one
/// registry.
pub fn default_engine() -> &'static Mutex<Engine> {
    DEFAULT_ENGINE.get_or_init(|| Mutex::new(Engine::new()))
}

/// [`Engine::process`] on the shared default engine.
pub fn process(text: &str, data: &CustomData) -> String {
    default_engine()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .process(text, data)
}

/// [`Engine::register_marker`] on the shared default engine. Affects every
/// caller of the free [`process`] function.
pub fn register_marker<F>(name: impl Into<String>, f: F)
where
    F: Fn(&[String]) -> Result<String, MarkerError> + Send + Sync + 'static,
{
    default_engine()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .register_marker(name, f);
}
