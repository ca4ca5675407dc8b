//! Domain constants for schema file naming.

/// Prefix shared by every generated schema file name.
pub const SCHEMA_FILE_PREFIX: &str = "schema";

/// Extension of generated SDL files.
pub const GRAPHQL_EXTENSION: &str = ".graphql";

/// The well-known default schema file name, checked for overwrite conflicts
/// before any compilation work happens.
pub const DEFAULT_SCHEMA_FILE_NAME: &str = "schema_graphql.graphql";
