//! Payload type resolution for operation signatures.

use crate::component::{OperationSpec, ParameterRole};
use crate::error::{Error, Result};
use log::debug;

/// Type information for a payload or parameter type.
///
/// `name` is the fully-qualified, `::`-separated type path; it doubles as the
/// message identity. Wrapper types (`Vec<T>`, `Option<T>`) are captured
/// structurally so schema resolution can unwrap them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// The fully-qualified type name (e.g. "orders::Order", "String")
    pub name: String,
    /// Generic type arguments
    pub generic_args: Vec<TypeInfo>,
    /// Whether this type is wrapped in `Option<T>`
    pub is_option: bool,
    /// Whether this type is a `Vec<T>`
    pub is_vec: bool,
}

impl TypeInfo {
    /// Create a TypeInfo for a simple type
    pub fn new(name: String) -> Self {
        Self {
            name,
            generic_args: Vec::new(),
            is_option: false,
            is_vec: false,
        }
    }

    /// Create a TypeInfo for an `Option<T>` type
    pub fn option(inner: TypeInfo) -> Self {
        Self {
            name: inner.name.clone(),
            generic_args: vec![inner],
            is_option: true,
            is_vec: false,
        }
    }

    /// Create a TypeInfo for a `Vec<T>` type
    pub fn vec(inner: TypeInfo) -> Self {
        Self {
            name: inner.name.clone(),
            generic_args: vec![inner],
            is_option: false,
            is_vec: true,
        }
    }

    /// The last segment of the type path, used as the schema name and the
    /// message title
    pub fn simple_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}

/// Resolves the payload type an operation consumes or produces.
pub trait PayloadExtractor: Send + Sync {
    /// Extract the payload type from an operation's signature.
    ///
    /// Fails with [`Error::PayloadResolution`] when the signature does not
    /// expose a determinable payload.
    fn extract_from(&self, operation: &OperationSpec) -> Result<TypeInfo>;
}

/// Default extractor: the payload is the operation's single parameter with
/// [`ParameterRole::Payload`]. Header and context parameters never qualify;
/// zero or multiple payload parameters are an error.
pub struct SignaturePayloadExtractor;

impl PayloadExtractor for SignaturePayloadExtractor {
    fn extract_from(&self, operation: &OperationSpec) -> Result<TypeInfo> {
        debug!("Extracting payload type from operation: {}", operation.name);

        let mut candidates = operation
            .parameters
            .iter()
            .filter(|p| p.role == ParameterRole::Payload);

        let payload = candidates.next().ok_or_else(|| Error::PayloadResolution {
            operation: operation.name.clone(),
            message: "no payload parameter in signature".to_string(),
        })?;

        if candidates.next().is_some() {
            return Err(Error::PayloadResolution {
                operation: operation.name.clone(),
                message: "multiple payload parameters in signature".to_string(),
            });
        }

        Ok(payload.type_info.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ParameterSpec;

    #[test]
    fn test_simple_name_of_qualified_type() {
        let type_info = TypeInfo::new("orders::model::Order".to_string());
        assert_eq!(type_info.simple_name(), "Order");
    }

    #[test]
    fn test_simple_name_of_unqualified_type() {
        let type_info = TypeInfo::new("String".to_string());
        assert_eq!(type_info.simple_name(), "String");
    }

    #[test]
    fn test_extract_single_payload_parameter() {
        let operation = OperationSpec::new("on_create")
            .with_parameter(ParameterSpec::payload(
                "order",
                TypeInfo::new("orders::Order".to_string()),
            ))
            .with_parameter(ParameterSpec::header(
                "trace_id",
                TypeInfo::new("String".to_string()),
            ));

        let payload = SignaturePayloadExtractor.extract_from(&operation).unwrap();
        assert_eq!(payload.name, "orders::Order");
    }

    #[test]
    fn test_extract_fails_without_payload_parameter() {
        let operation = OperationSpec::new("on_tick").with_parameter(ParameterSpec::context(
            "ctx",
            TypeInfo::new("Context".to_string()),
        ));

        let err = SignaturePayloadExtractor.extract_from(&operation).unwrap_err();
        match err {
            Error::PayloadResolution { operation, .. } => assert_eq!(operation, "on_tick"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_fails_with_ambiguous_payload() {
        let operation = OperationSpec::new("on_pair")
            .with_parameter(ParameterSpec::payload("a", TypeInfo::new("A".to_string())))
            .with_parameter(ParameterSpec::payload("b", TypeInfo::new("B".to_string())));

        assert!(SignaturePayloadExtractor.extract_from(&operation).is_err());
    }
}
