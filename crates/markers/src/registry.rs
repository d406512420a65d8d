//! The mapping from marker name to its resolving function.

use crate::builtins;
use crate::error::MarkerError;
use std::collections::HashMap;

/// A marker's resolving function: an ordered sequence of string parameters in,
/// a string out. Arity is not constrained by the registry; a function is free
/// to ignore extra parameters or fail with [`MarkerError`] on missing ones.
pub type MarkerFn = Box<dyn Fn(&[String]) -> Result<String, MarkerError> + Send + Sync>;

/// Registry of marker names, case-sensitive and unique at any instant.
///
/// Registration is idempotent-overwrite: registering a name that already
/// exists (including a built-in) replaces the previous entry. There is no
/// removal operation.
pub struct MarkerRegistry {
    markers: HashMap<String, MarkerFn>,
}

impl MarkerRegistry {
    /// An empty registry with no built-ins. Use [`MarkerRegistry::default`]
    /// for the seeded catalog.
    pub fn new() -> Self {
        Self {
            markers: HashMap::new(),
        }
    }

    /// Inserts or overwrites the entry for `name`. Any name is accepted,
    /// including ones that can never appear between `{{` and `}}`; such
    /// entries are simply unreachable.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&[String]) -> Result<String, MarkerError> + Send + Sync + 'static,
    {
        self.markers.insert(name.into(), Box::new(f));
    }

    pub fn get(&self, name: &str) -> Option<&MarkerFn> {
        self.markers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        builtins::register_builtins(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_has_no_markers() {
        let registry = MarkerRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("current_year"));
    }

    #[test]
    fn test_default_registry_is_seeded() {
        let registry = MarkerRegistry::default();
        for name in [
            "current_year",
            "current_month",
            "current_date",
            "current_time",
            "timestamp",
            "days_since",
            "days_until",
            "years_since",
            "age",
            "relative_time",
            "add",
            "subtract",
            "multiply",
            "divide",
            "random",
            "capitalize",
            "upper",
            "lower",
            "format_number",
        ] {
            assert!(registry.contains(name), "missing built-in: {}", name);
        }
    }

    #[test]
    fn test_register_and_invoke() {
        let mut registry = MarkerRegistry::new();
        registry.register("greet", |params: &[String]| {
            Ok(format!("hello {}", params.first().cloned().unwrap_or_default()))
        });
        let f = registry.get("greet").unwrap();
        assert_eq!(f(&["bob".to_string()]).unwrap(), "hello bob");
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = MarkerRegistry::default();
        let before = registry.len();
        registry.register("current_year", |_: &[String]| Ok("1999".to_string()));
        assert_eq!(registry.len(), before, "overwrite must not add an entry");
        let f = registry.get("current_year").unwrap();
        assert_eq!(f(&[]).unwrap(), "1999");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let registry = MarkerRegistry::default();
        assert!(registry.contains("upper"));
        assert!(!registry.contains("Upper"));
    }
}
