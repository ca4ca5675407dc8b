//! Top-level declaration kinds relevant to schema extraction.

/// A top-level declaration, tagged with the kind the engine dispatches on.
///
/// Only two kinds carry a payload: service declarations and module-level
/// variable declarations. Every other declaration kind in the module is
/// collapsed into [`Declaration::Other`] and ignored by the walk.
#[derive(Debug, Clone)]
pub enum Declaration<S, V> {
    /// A service declaration, with its route attached in source.
    Service(S),
    /// A module-level variable declaration, potentially initialized to an
    /// anonymous service object. Its base path is structurally unknowable.
    ModuleVar(V),
    /// Any other top-level declaration.
    Other,
}

impl<S, V> Declaration<S, V> {
    /// Whether this declaration is a service declaration.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// Whether this declaration is a module-level variable declaration.
    pub fn is_module_var(&self) -> bool {
        matches!(self, Self::ModuleVar(_))
    }
}
