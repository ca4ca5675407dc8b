//! Shared stub collaborators and fixtures for integration tests.
#![allow(dead_code)]

use std::io;
use std::path::Path;

use sdl_export::{
    CodecError, Console, Declaration, ExportError, ModuleFrontend, SchemaCodec,
};

/// Prefix a stub descriptor must carry to decode successfully.
pub const DESCRIPTOR_PREFIX: &str = "descriptor:";

// ============================================================================
// STUB FRONTEND
// ============================================================================

/// Canned service declaration node.
#[derive(Debug, Clone)]
pub struct StubService {
    pub base_path: String,
    /// `None` makes schema extraction fail for this node.
    pub schema: Option<String>,
    pub graphql: bool,
}

/// Canned module-variable declaration node.
#[derive(Debug, Clone)]
pub struct StubVar {
    pub service_object: bool,
    /// Descriptor carried by an inline object-constructor initializer;
    /// `None` models a missing or non-constructor initializer.
    pub inline_schema: Option<String>,
}

pub type StubDecl = Declaration<StubService, StubVar>;

/// Frontend returning a canned declaration list for any path.
pub struct StubFrontend {
    pub declarations: Vec<StubDecl>,
    /// When set, `load` fails with a compilation error.
    pub compile_error: Option<String>,
}

impl StubFrontend {
    pub fn new(declarations: Vec<StubDecl>) -> Self {
        Self {
            declarations,
            compile_error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            declarations: Vec::new(),
            compile_error: Some(message.to_string()),
        }
    }
}

impl ModuleFrontend for StubFrontend {
    type Module = Vec<StubDecl>;
    type Semantics = ();
    type ServiceNode = StubService;
    type VarNode = StubVar;

    fn load(&self, _path: &Path) -> Result<(Self::Module, Self::Semantics), ExportError> {
        match &self.compile_error {
            Some(message) => Err(ExportError::compilation(message.clone())),
            None => Ok((self.declarations.clone(), ())),
        }
    }

    fn declarations(&self, module: &Self::Module) -> Vec<StubDecl> {
        module.clone()
    }

    fn is_graphql_service(&self, service: &StubService, _semantics: &()) -> bool {
        service.graphql
    }

    fn base_path(&self, service: &StubService) -> String {
        service.base_path.clone()
    }

    fn schema_string(&self, service: &StubService) -> Result<String, ExportError> {
        service
            .schema
            .clone()
            .ok_or_else(|| ExportError::missing_schema(service.base_path.clone()))
    }

    fn is_service_object_var(&self, var: &StubVar) -> bool {
        var.service_object
    }

    fn inline_object_schema(&self, var: &StubVar) -> Result<Option<String>, ExportError> {
        Ok(var.inline_schema.clone())
    }
}

// Declaration fixtures

pub fn graphql_service(base_path: &str, payload: &str) -> StubDecl {
    Declaration::Service(StubService {
        base_path: base_path.to_string(),
        schema: Some(format!("{DESCRIPTOR_PREFIX}{payload}")),
        graphql: true,
    })
}

/// A service declaration that is not a GraphQL service.
pub fn plain_service(base_path: &str) -> StubDecl {
    Declaration::Service(StubService {
        base_path: base_path.to_string(),
        schema: None,
        graphql: false,
    })
}

/// A GraphQL service whose embedded descriptor is missing.
pub fn service_without_schema(base_path: &str) -> StubDecl {
    Declaration::Service(StubService {
        base_path: base_path.to_string(),
        schema: None,
        graphql: true,
    })
}

/// A GraphQL service whose descriptor the stub codec rejects.
pub fn service_with_bad_schema(base_path: &str) -> StubDecl {
    Declaration::Service(StubService {
        base_path: base_path.to_string(),
        schema: Some("garbage".to_string()),
        graphql: true,
    })
}

/// A module variable initialized to an inline service object.
pub fn service_var(payload: &str) -> StubDecl {
    Declaration::ModuleVar(StubVar {
        service_object: true,
        inline_schema: Some(format!("{DESCRIPTOR_PREFIX}{payload}")),
    })
}

/// A service-object variable without an inline constructor initializer.
pub fn service_var_without_initializer() -> StubDecl {
    Declaration::ModuleVar(StubVar {
        service_object: true,
        inline_schema: None,
    })
}

/// A module variable that is not a service object at all.
pub fn plain_var() -> StubDecl {
    Declaration::ModuleVar(StubVar {
        service_object: false,
        inline_schema: None,
    })
}

pub fn other() -> StubDecl {
    Declaration::Other
}

// ============================================================================
// STUB CODEC
// ============================================================================

/// Codec accepting `descriptor:<payload>` strings and rendering a one-field
/// query type from the payload.
pub struct StubCodec;

impl SchemaCodec for StubCodec {
    type Schema = String;

    fn decode(&self, raw: &str) -> Result<String, CodecError> {
        raw.strip_prefix(DESCRIPTOR_PREFIX)
            .map(str::to_string)
            .ok_or_else(|| CodecError::malformed("missing descriptor prefix"))
    }

    fn render(&self, schema: &String) -> String {
        format!("type Query {{\n  {schema}: String\n}}\n")
    }
}

/// The SDL text the stub codec renders for `payload`.
pub fn rendered_sdl(payload: &str) -> String {
    format!("type Query {{\n  {payload}: String\n}}\n")
}

// ============================================================================
// SCRIPTED CONSOLE
// ============================================================================

/// Console with a fixed interactivity flag and prompt answer.
pub struct ScriptedConsole {
    pub interactive: bool,
    pub answer: String,
}

impl ScriptedConsole {
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            answer: String::new(),
        }
    }

    pub fn answering(answer: &str) -> Self {
        Self {
            interactive: true,
            answer: answer.to_string(),
        }
    }
}

impl Console for ScriptedConsole {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn prompt(&self, _question: &str) -> io::Result<String> {
        Ok(format!("{}\n", self.answer))
    }
}
