/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the scanning engine.
///
/// Every error is scoped to the smallest unit that failed (one operation or
/// one component); scanning the rest of the candidate set continues.
#[derive(Debug)]
pub enum Error {
    /// A payload or header type could not be turned into a schema
    SchemaResolution { type_name: String, message: String },
    /// An operation's signature does not expose a determinable payload
    PayloadResolution { operation: String, message: String },
    /// A binding factory could not interpret a channel configuration
    BindingResolution(String),
    /// The finished document could not be serialized
    SerializationError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::SchemaResolution { type_name, message } => {
                write!(f, "cannot resolve schema for type {}: {}", type_name, message)
            }
            Error::PayloadResolution { operation, message } => {
                write!(f, "cannot resolve payload for operation {}: {}", operation, message)
            }
            Error::BindingResolution(msg) => write!(f, "cannot resolve binding: {}", msg),
            Error::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML error: {}", err))
    }
}
