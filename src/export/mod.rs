//! The SDL schema extraction engine.
//!
//! Exporting runs as an explicit two-phase protocol: a cheap overwrite
//! precheck that may cancel the whole operation, then the expensive
//! compile-walk-materialize pipeline.
//!
//! ```text
//! ┌─────────────────┐   Declined   ┌───────────────────────┐
//! │ Conflict        ├─────────────▶│ ExportOutcome::        │
//! │ precheck        │              │ Cancelled              │
//! └───────┬─────────┘              └───────────────────────┘
//!         │ Proceed
//!         ▼
//! ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────┐
//! │ ModuleFrontend  │─▶│ Service locator  │─▶│ SDL materializer │
//! │ load + compile  │  │ walk + naming    │  │ decode + render  │
//! └─────────────────┘  │ (ServiceRegistry)│  │ + write files    │
//!                      └──────────────────┘  └──────────────────┘
//! ```
//!
//! The locator owns the only real design decisions in the system: which
//! declarations qualify, how base-path collisions are disambiguated, and
//! when a base-path filter turns an empty result into an error.

mod codes;
mod console;
mod error;
mod exporter;
mod locator;
mod materialize;
mod precheck;
mod registry;

pub use codes::ExportCode;
pub use console::{Console, StdConsole};
pub use error::ExportError;
pub use exporter::{ExportOutcome, SdlExporter};
pub use locator::locate_services;
pub use materialize::{materialize, module_stem, sdl_file_name};
pub use precheck::{Precheck, check_default_conflict};
pub use registry::ServiceRegistry;
