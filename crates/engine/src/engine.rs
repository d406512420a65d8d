//! The two-pass template processor.

use crate::data::CustomData;
use crate::parser::parse_marker;
use log::{trace, warn};
use regex::Regex;
use stamp_markers::{MarkerError, MarkerRegistry};
use std::sync::LazyLock;

// Non-overlapping, greedy to the first `}`; content containing `}` is
// unparseable by design.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^}]*)\}\}").expect("BUG: invalid MARKER_RE regex literal")
});

/// A marker substitution engine bound to its own [`MarkerRegistry`].
///
/// Each engine owns an independent registry created at construction and kept
/// for the engine's lifetime. Multiple engines coexist freely; registration
/// on one never affects another.
pub struct Engine {
    registry: MarkerRegistry,
}

impl Engine {
    /// An engine whose registry is seeded with the built-in catalog.
    pub fn new() -> Self {
        Self {
            registry: MarkerRegistry::default(),
        }
    }

    /// An engine over a caller-assembled registry (possibly empty).
    pub fn with_registry(registry: MarkerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Inserts or overwrites a marker. Last registration wins, built-ins
    /// included.
    pub fn register_marker<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&[String]) -> Result<String, MarkerError> + Send + Sync + 'static,
    {
        self.registry.register(name, f);
    }

    /// Replaces `{{marker}}` occurrences in `text`, custom data first, then
    /// registered markers. Total over template content: unknown markers and
    /// failing marker functions leave their occurrence verbatim, and failures
    /// are reported via `warn!` without aborting the scan.
    pub fn process(&self, text: &str, data: &CustomData) -> String {
        let mut output = text.to_string();

        // Pass 1: literal custom-data substitution, one replace-all per key
        // in insertion order. `str::replace` is literal on both sides, so
        // neither key nor value text is ever interpreted, and a value that
        // itself contains `{{otherKey}}` is not expanded by this pass.
        for (key, value) in data.iter() {
            let needle = format!("{{{{{}}}}}", key);
            if output.contains(&needle) {
                output = output.replace(&needle, &value.to_string());
            }
        }

        // Pass 2: scan for marker occurrences, then resolve each one
        // independently. The matches are collected up front; each hit retires
        // exactly one occurrence of its text, left to right, so duplicated
        // markers each get their own invocation and none are left behind.
        let occurrences: Vec<(String, String)> = MARKER_RE
            .captures_iter(&output)
            .map(|c| (c[0].to_string(), c[1].to_string()))
            .collect();

        for (matched, content) in occurrences {
            let call = parse_marker(&content);
            let Some(func) = self.registry.get(call.name) else {
                trace!("no marker registered for {}, leaving verbatim", matched);
                continue;
            };
            match func(&call.params) {
                Ok(replacement) => {
                    output = output.replacen(&matched, &replacement, 1);
                }
                Err(err) => {
                    warn!("marker {} failed: {}", matched, err);
                }
            }
        }

        output
    }

    /// [`process`](Engine::process) with no custom data.
    pub fn process_text(&self, text: &str) -> String {
        self.process(text, &CustomData::new())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
