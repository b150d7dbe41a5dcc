//! Header schema derivation for messages.

use crate::payload::TypeInfo;
use crate::schema::Schema;

/// Schema name used when message headers are not documented
pub const NOT_DOCUMENTED: &str = "HeadersNotDocumented";

/// A named header schema derived from a payload type
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSchema {
    /// Name the schema is registered under
    pub name: String,
    /// The header schema body
    pub schema: Schema,
}

/// Derives the header schema for a payload type.
pub trait HeadersBuilder: Send + Sync {
    /// Build the header schema for the given payload type
    fn build_headers(&self, payload: &TypeInfo) -> HeaderSchema;
}

/// Default builder: every payload type shares a single undocumented header
/// schema (an object schema with no properties).
pub struct NotDocumentedHeaders;

impl HeadersBuilder for NotDocumentedHeaders {
    fn build_headers(&self, _payload: &TypeInfo) -> HeaderSchema {
        HeaderSchema {
            name: NOT_DOCUMENTED.to_string(),
            schema: Schema::empty_object(),
        }
    }
}
