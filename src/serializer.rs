//! Serialization module for converting AsyncAPI documents to YAML or JSON
//! format.

use crate::document_builder::AsyncApiDocument;
use anyhow::{Context, Result};
use log::debug;

/// Serializes an AsyncAPI document to YAML format.
///
/// The output is formatted as standard YAML, suitable for use with AsyncAPI
/// tooling and documentation generators.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(doc: &AsyncApiDocument) -> Result<String> {
    debug!("Serializing AsyncAPI document to YAML");
    serde_yaml::to_string(doc).context("Failed to serialize AsyncAPI document to YAML")
}

/// Serializes an AsyncAPI document to JSON format with pretty printing.
///
/// The output is formatted with indentation for readability, making it
/// suitable for human review and version control.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(doc: &AsyncApiDocument) -> Result<String> {
    debug!("Serializing AsyncAPI document to JSON");
    serde_json::to_string_pretty(doc).context("Failed to serialize AsyncAPI document to JSON")
}
