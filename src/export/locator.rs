//! Service locator: the single pass over a module's declarations.

use tracing::trace;

use crate::frontend::{Declaration, ModuleFrontend};

use super::error::ExportError;
use super::registry::ServiceRegistry;

/// Walk the module's top-level declarations in source order and collect the
/// GraphQL services to generate schemas for.
///
/// Module-variable services are skipped when a base-path filter is active,
/// since their base path is structurally unknowable. If a filter is
/// supplied and nothing matched after the full walk, the run fails with a
/// diagnostic listing every base path actually seen.
pub fn locate_services<F: ModuleFrontend>(
    frontend: &F,
    module: &F::Module,
    semantics: &F::Semantics,
    base_path_filter: Option<&str>,
) -> Result<ServiceRegistry, ExportError> {
    let normalized_filter = base_path_filter.map(format_base_path);
    let mut registry = ServiceRegistry::new();

    for declaration in frontend.declarations(module) {
        match declaration {
            Declaration::Service(service) => {
                if !frontend.is_graphql_service(&service, semantics) {
                    continue;
                }
                let actual_base_path = frontend.base_path(&service);
                let raw_schema = frontend.schema_string(&service)?;
                trace!(base_path = %actual_base_path, "found GraphQL service declaration");
                registry.register_service(
                    normalized_filter.as_deref(),
                    &actual_base_path,
                    raw_schema,
                );
            }
            Declaration::ModuleVar(var) => {
                if base_path_filter.is_some() {
                    continue;
                }
                if !frontend.is_service_object_var(&var) {
                    continue;
                }
                let Some(raw_schema) = frontend.inline_object_schema(&var)? else {
                    continue;
                };
                trace!("found module-level GraphQL service variable");
                registry.register_module_var(raw_schema);
            }
            Declaration::Other => {}
        }
    }

    if let Some(requested) = base_path_filter {
        if registry.is_empty() {
            return Err(ExportError::no_matching_service(
                requested,
                registry.into_available_base_paths(),
            ));
        }
    }
    Ok(registry)
}

/// Normalize a user-supplied base-path filter for comparison against the
/// base paths declared in source: trim whitespace and ensure a single
/// leading `/`. A blank filter means the root path.
pub(crate) fn format_base_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
