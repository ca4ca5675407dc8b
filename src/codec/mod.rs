//! The seam to the external schema codec.
//!
//! A service's schema travels through source code as an opaque, serialized
//! descriptor string. Turning that string into canonical SDL text is the
//! job of an external codec/generator library, abstracted here as
//! [`SchemaCodec`] so the engine can be exercised with a stub.

mod error;

pub use error::CodecError;

/// Decoder/renderer pair for embedded schema descriptors.
///
/// `decode` and `render` are kept distinct: decoding can fail on a
/// malformed descriptor, while rendering a decoded schema is total.
pub trait SchemaCodec {
    /// The structured schema object produced by decoding.
    type Schema;

    /// Decode a raw descriptor string into a structured schema.
    fn decode(&self, raw: &str) -> Result<Self::Schema, CodecError>;

    /// Render a structured schema as SDL text.
    fn render(&self, schema: &Self::Schema) -> String;
}
