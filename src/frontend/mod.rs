//! The seam to the external compiler toolkit.
//!
//! The extraction engine never parses source text or inspects semantics
//! itself; everything it needs from the compiler is expressed as the
//! [`ModuleFrontend`] trait. A real implementation wraps a project loader,
//! syntax tree, and semantic model; tests plug in a stub returning canned
//! declarations.

mod declaration;

pub use declaration::Declaration;

use std::path::Path;

use crate::export::ExportError;

/// Facade over the compiler toolkit that produced the module under export.
///
/// The associated types are opaque to the engine: `Module` and `Semantics`
/// are whatever the toolkit's project loader yields, and the node types are
/// handles into its syntax tree (cheap to clone in every mainstream
/// toolkit). The engine only ever feeds them back into the methods below.
pub trait ModuleFrontend {
    /// Root of the module's syntax tree.
    type Module;
    /// Semantic model for the module.
    type Semantics;
    /// Handle to a top-level service declaration.
    type ServiceNode;
    /// Handle to a module-level variable declaration.
    type VarNode;

    /// Load and compile the module at `path`.
    ///
    /// Fails with a compilation error when the toolkit's diagnostics contain
    /// any error-severity entries; the engine propagates that failure before
    /// any extraction is attempted.
    fn load(&self, path: &Path) -> Result<(Self::Module, Self::Semantics), ExportError>;

    /// The module's top-level declarations, in source order.
    fn declarations(
        &self,
        module: &Self::Module,
    ) -> Vec<Declaration<Self::ServiceNode, Self::VarNode>>;

    /// Whether a service declaration is semantically a GraphQL service.
    fn is_graphql_service(
        &self,
        service: &Self::ServiceNode,
        semantics: &Self::Semantics,
    ) -> bool;

    /// The route/base-path string the service is attached to.
    fn base_path(&self, service: &Self::ServiceNode) -> String;

    /// The embedded, serialized schema descriptor of a service declaration.
    fn schema_string(&self, service: &Self::ServiceNode) -> Result<String, ExportError>;

    /// Whether a module-level variable declares a GraphQL service object.
    fn is_service_object_var(&self, var: &Self::VarNode) -> bool;

    /// The schema descriptor of a module-variable service, when its
    /// initializer is an inline object-construction expression.
    ///
    /// Returns `Ok(None)` when the initializer is absent or of any other
    /// expression kind; such declarations are skipped, not errors.
    fn inline_object_schema(&self, var: &Self::VarNode) -> Result<Option<String>, ExportError>;
}
