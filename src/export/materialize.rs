//! SDL materializer: decode, render, and write one file per service.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::base::constants::{GRAPHQL_EXTENSION, SCHEMA_FILE_PREFIX};
use crate::codec::SchemaCodec;

use super::error::ExportError;
use super::registry::ServiceRegistry;

/// Decode and render every registered schema, writing the SDL files into
/// `out_dir` (created if absent).
///
/// Returns the written file names in registry (encounter) order. Writes are
/// not transactional: a failure partway through leaves the files written so
/// far in place.
pub fn materialize<C: SchemaCodec>(
    codec: &C,
    stem: &str,
    registry: &ServiceRegistry,
    out_dir: &Path,
) -> Result<Vec<String>, ExportError> {
    let mut file_names = Vec::with_capacity(registry.len());
    for (logical_name, raw_schema) in registry.iter() {
        let file_name = sdl_file_name(stem, logical_name);
        let schema = codec
            .decode(raw_schema)
            .map_err(|source| ExportError::decode(logical_name, source))?;
        let sdl_text = codec.render(&schema);
        fs::create_dir_all(out_dir)?;
        fs::write(out_dir.join(&file_name), sdl_text)?;
        debug!("wrote SDL schema to {file_name}");
        file_names.push(file_name);
    }
    Ok(file_names)
}

/// Deterministic schema file name for a service.
///
/// Blank and `.`-prefixed logical names fall back to the module stem, so
/// the anonymous service of `graphql.<ext>` lands in
/// `schema_graphql.graphql` and its first duplicate in
/// `schema_graphql.1.graphql`. Base-path names are sanitized into the file
/// name: one leading `/` stripped, remaining `/` mapped to `_`.
pub fn sdl_file_name(stem: &str, logical_name: &str) -> String {
    if logical_name.trim().is_empty() || logical_name.starts_with('.') {
        format!("{SCHEMA_FILE_PREFIX}_{stem}{logical_name}{GRAPHQL_EXTENSION}")
    } else {
        let sanitized = logical_name
            .strip_prefix('/')
            .unwrap_or(logical_name)
            .replace('/', "_");
        format!("{SCHEMA_FILE_PREFIX}_{stem}_{sanitized}{GRAPHQL_EXTENSION}")
    }
}

/// The module file's stem, used as the base of every generated file name.
pub fn module_stem(module_path: &Path) -> String {
    module_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(SCHEMA_FILE_PREFIX)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "schema_graphql.graphql")]
    #[case(".1", "schema_graphql.1.graphql")]
    #[case(".2", "schema_graphql.2.graphql")]
    #[case("/", "schema_graphql_.graphql")]
    #[case("/gql", "schema_graphql_gql.graphql")]
    #[case("/gql.1", "schema_graphql_gql.1.graphql")]
    #[case("/api/v1", "schema_graphql_api_v1.graphql")]
    fn test_sdl_file_name(#[case] logical_name: &str, #[case] expected: &str) {
        assert_eq!(sdl_file_name("graphql", logical_name), expected);
    }

    #[test]
    fn test_default_name_matches_precheck_constant() {
        use crate::base::constants::DEFAULT_SCHEMA_FILE_NAME;
        assert_eq!(sdl_file_name("graphql", ""), DEFAULT_SCHEMA_FILE_NAME);
    }

    #[test]
    fn test_module_stem() {
        assert_eq!(module_stem(Path::new("/tmp/service.mod")), "service");
        assert_eq!(module_stem(Path::new("graphql.mod")), "graphql");
    }
}
