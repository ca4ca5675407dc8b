//! Top-level exporter sequencing the two-phase protocol.

use std::io::Write;
use std::path::Path;

use crate::base::constants::DEFAULT_SCHEMA_FILE_NAME;
use crate::codec::SchemaCodec;
use crate::frontend::ModuleFrontend;

use super::console::{Console, StdConsole};
use super::error::ExportError;
use super::locator::locate_services;
use super::materialize::{materialize, module_stem};
use super::precheck::{Precheck, check_default_conflict};

/// How an export run ended, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// SDL files were written, listed in processing order.
    Written(Vec<String>),
    /// The module contains no GraphQL services; nothing was written.
    NoServices,
    /// The user declined to overwrite an existing schema file (or no
    /// terminal was attached to ask). Nothing was loaded or written.
    Cancelled,
}

/// Exports SDL schema files for the GraphQL services of a source module.
///
/// Owns the injected collaborators: the compiler-toolkit frontend, the
/// schema codec, and the console used for the overwrite prompt.
pub struct SdlExporter<F, C, K = StdConsole> {
    frontend: F,
    codec: C,
    console: K,
}

impl<F, C> SdlExporter<F, C, StdConsole>
where
    F: ModuleFrontend,
    C: SchemaCodec,
{
    /// Create an exporter prompting on the process's terminal.
    pub fn new(frontend: F, codec: C) -> Self {
        Self {
            frontend,
            codec,
            console: StdConsole,
        }
    }
}

impl<F, C, K> SdlExporter<F, C, K>
where
    F: ModuleFrontend,
    C: SchemaCodec,
    K: Console,
{
    /// Replace the console used for the overwrite prompt.
    pub fn with_console<K2: Console>(self, console: K2) -> SdlExporter<F, C, K2> {
        SdlExporter {
            frontend: self.frontend,
            codec: self.codec,
            console,
        }
    }

    /// Export the SDL schemas of the module at `module_path` into `out_dir`.
    ///
    /// Runs the conflict precheck first; only if it proceeds is the module
    /// loaded, walked, and materialized. Status messages go to `sink`.
    pub fn export(
        &self,
        module_path: &Path,
        out_dir: &Path,
        base_path_filter: Option<&str>,
        sink: &mut dyn Write,
    ) -> Result<ExportOutcome, ExportError> {
        let precheck =
            check_default_conflict(out_dir, DEFAULT_SCHEMA_FILE_NAME, &self.console, sink)?;
        if precheck == Precheck::Declined {
            return Ok(ExportOutcome::Cancelled);
        }

        let (module, semantics) = self.frontend.load(module_path)?;
        let registry = locate_services(&self.frontend, &module, &semantics, base_path_filter)?;
        if registry.is_empty() {
            // A filter yielding zero matches already failed in the locator;
            // an empty registry here means the module has no services.
            writeln!(sink, "Module does not contain any GraphQL services")?;
            return Ok(ExportOutcome::NoServices);
        }

        let stem = module_stem(module_path);
        let file_names = materialize(&self.codec, &stem, &registry, out_dir)?;

        writeln!(sink, "SDL Schema(s) generated successfully and copied to :")?;
        for file_name in &file_names {
            writeln!(sink, "-- {file_name}")?;
        }
        Ok(ExportOutcome::Written(file_names))
    }
}
