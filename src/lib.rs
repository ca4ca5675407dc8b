//! # sdl-export
//!
//! Extraction of GraphQL service definitions embedded in a parsed source
//! module, and generation of one SDL (`.graphql`) schema file per service.
//!
//! The engine walks a module's top-level declarations once, classifies which
//! of them denote GraphQL services, assigns each a collision-free logical
//! name, and materializes the embedded schema descriptors as SDL files,
//! after an up-front check that writing would not silently clobber an
//! existing schema file.
//!
//! Parsing, semantic analysis, and the schema descriptor codec are external
//! collaborators, injected through the [`frontend::ModuleFrontend`] and
//! [`codec::SchemaCodec`] traits.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! export    → extraction engine (precheck, locator, naming, materializer)
//!   ↓
//! frontend  → compiler-toolkit seam (module load, declarations, predicates)
//! codec     → schema codec seam (descriptor decode, SDL render)
//!   ↓
//! base      → foundation constants (file names, extensions)
//! ```

/// Foundation constants: schema file names, extensions
pub mod base;

/// Schema codec seam: descriptor decode, SDL render
pub mod codec;

/// Extraction engine: precheck, locator, naming registry, materializer
pub mod export;

/// Compiler-toolkit seam: module loading, declarations, service predicates
pub mod frontend;

// Re-export commonly needed items
pub use codec::{CodecError, SchemaCodec};
pub use export::{
    Console, ExportCode, ExportError, ExportOutcome, Precheck, SdlExporter, ServiceRegistry,
    StdConsole,
};
pub use frontend::{Declaration, ModuleFrontend};
