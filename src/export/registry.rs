//! Name registry and the collision-resolution policy.
//!
//! Service base paths are user-facing routes and are not guaranteed unique
//! in source: accidental redeclaration, or several anonymous
//! module-variable services. The registry still yields a distinct output
//! per declaration instead of silently losing one.

use indexmap::IndexMap;

/// Mapping from logical service name to raw schema descriptor string.
///
/// Keys are unique by construction; insertion order is declaration
/// encounter order, which makes the whole run deterministic for a given
/// module. One registry is scoped to one extraction run.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    /// logical name → raw schema descriptor (insertion order preserved)
    entries: IndexMap<String, String>,
    /// Every base path seen during the walk, duplicates included, for
    /// no-match diagnostics.
    available_base_paths: Vec<String>,
    /// Collisions resolved so far in this run. Only increases.
    duplicate_count: u32,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service declaration discovered at `actual_base_path`.
    ///
    /// The logical name is resolved against existing entries first; the
    /// filter gate is applied afterwards. With a filter active, the path is
    /// always recorded as seen but the entry is inserted only when the
    /// (already normalized) filter equals the actual base path.
    pub fn register_service(
        &mut self,
        normalized_filter: Option<&str>,
        actual_base_path: &str,
        raw_schema: String,
    ) {
        let logical_name = self.resolve_name(actual_base_path);
        match normalized_filter {
            Some(requested) => {
                self.available_base_paths
                    .push(actual_base_path.to_string());
                if requested == actual_base_path {
                    self.entries.insert(logical_name, raw_schema);
                }
            }
            None => {
                self.entries.insert(logical_name, raw_schema);
            }
        }
    }

    /// Register an anonymous module-variable service.
    ///
    /// The candidate key is the empty string; callers skip this form
    /// entirely when a base-path filter is active.
    pub fn register_module_var(&mut self, raw_schema: String) {
        let logical_name = self.resolve_name("");
        self.entries.insert(logical_name, raw_schema);
    }

    /// Resolve a candidate key to a logical name unique in this registry.
    ///
    /// First occurrence keeps the key itself; each collision mints a
    /// `.N` suffix from the run-scoped counter, leaving the original entry
    /// untouched.
    fn resolve_name(&mut self, candidate: &str) -> String {
        if !self.entries.contains_key(candidate) {
            return candidate.to_string();
        }
        self.duplicate_count += 1;
        if candidate.trim().is_empty() {
            format!(".{}", self.duplicate_count)
        } else {
            format!("{candidate}.{}", self.duplicate_count)
        }
    }

    /// Whether no services were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Registered `(logical name, raw schema)` pairs, in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Logical names in encounter order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Base paths seen during the walk, in encounter order.
    pub fn available_base_paths(&self) -> &[String] {
        &self.available_base_paths
    }

    /// Consume the registry, keeping only the seen-path list.
    pub fn into_available_base_paths(self) -> Vec<String> {
        self.available_base_paths
    }
}
