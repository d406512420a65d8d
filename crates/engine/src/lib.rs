//! The marker substitution engine.
//!
//! Given input text and optional custom data, [`Engine::process`] performs
//! two ordered substitution passes and returns the resulting text:
//!
//! 1. **Custom-data pass**: every `{{key}}` present in the caller's
//!    [`CustomData`] is replaced with the value's literal text, in the data's
//!    insertion order. Values are inserted verbatim and never re-interpreted.
//! 2. **Registry pass**: the text is scanned for `{{name}}` /
//!    `{{name:param,param}}` occurrences, each of which is resolved through
//!    the [`MarkerRegistry`](stamp_markers::MarkerRegistry).
//!
//! The engine is a total function over template content: unknown markers and
//! failing marker functions leave their occurrence verbatim, with failures
//! reported through the `log` facade.

pub mod data;
pub mod engine;
pub mod parser;

pub use data::{CustomData, Scalar};
pub use engine::Engine;
pub use parser::{MarkerCall, parse_marker};
