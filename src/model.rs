//! AsyncAPI descriptor model shared by the scanners, the registry and the
//! document builder.
//!
//! Descriptors are built fresh per scan and never mutated afterwards; a
//! re-scan rebuilds them wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Protocol bindings, keyed by protocol name (e.g. "amqp", "kafka")
pub type BindingMap = HashMap<String, serde_json::Value>;

/// Direction of an operation relative to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationAction {
    /// The application consumes messages from the channel
    Receive,
    /// The application produces messages to the channel
    Send,
}

impl OperationAction {
    /// Lowercase form used in operation identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationAction::Receive => "receive",
            OperationAction::Send => "send",
        }
    }
}

impl std::fmt::Display for OperationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `$ref` pointer to a message or schema elsewhere in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReference {
    /// The JSON reference string
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl MessageReference {
    /// Reference to a message stored under `components/messages`
    pub fn to_component_message(message_id: &str) -> Self {
        Self {
            reference: format!("#/components/messages/{}", message_id),
        }
    }

    /// Reference to a message listed under a channel
    pub fn to_channel_message(channel_name: &str, message_id: &str) -> Self {
        Self {
            reference: format!("#/channels/{}/messages/{}", channel_name, message_id),
        }
    }

    /// Reference to a schema stored under `components/schemas`
    pub fn to_schema(schema_name: &str) -> Self {
        Self {
            reference: format!("#/components/schemas/{}", schema_name),
        }
    }
}

/// A `$ref` pointer to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelReference {
    /// The JSON reference string
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl ChannelReference {
    /// Reference to a channel by name
    pub fn to_channel(channel_name: &str) -> Self {
        Self {
            reference: format!("#/channels/{}", channel_name),
        }
    }
}

/// Message payload wrapping a reference to the registered payload schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Reference to the payload schema
    pub schema: MessageReference,
}

impl MessagePayload {
    /// Build a payload pointing at a schema registered under the given name
    pub fn of_schema(schema_name: &str) -> Self {
        Self {
            schema: MessageReference::to_schema(schema_name),
        }
    }
}

/// Message headers, expressed as a reference to the registered header schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHeaders {
    /// Reference to the header schema
    pub reference: MessageReference,
}

impl MessageHeaders {
    /// Build headers pointing at a schema registered under the given name
    pub fn of_schema(schema_name: &str) -> Self {
        Self {
            reference: MessageReference::to_schema(schema_name),
        }
    }
}

/// Canonical message descriptor.
///
/// Identity is the fully-qualified payload type name; two messages with the
/// same identity are structurally identical, which the registry enforces by
/// returning the previously stored descriptor on repeat registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageObject {
    /// Message identity; not serialized, it becomes the key in the document
    #[serde(skip)]
    pub message_id: String,
    /// Message name (equals the identity)
    pub name: String,
    /// Display title (the payload type's simple name)
    pub title: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference to the payload schema
    pub payload: MessagePayload,
    /// Reference to the header schema
    pub headers: MessageHeaders,
    /// Protocol-specific message bindings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingMap>,
}

/// Channel descriptor emitted by the scanners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelObject {
    /// Protocol-specific channel bindings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingMap>,
    /// Messages flowing through this channel, keyed by message id
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub messages: HashMap<String, MessageReference>,
}

/// Operation descriptor emitted by the class-level scanner in operation mode.
///
/// Identity is the composite of channel name and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Direction of the operation
    pub action: OperationAction,
    /// The channel this operation acts on
    pub channel: ChannelReference,
    /// Protocol-specific operation bindings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingMap>,
    /// Messages handled by the operation, keyed by message id
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub messages: HashMap<String, MessageReference>,
}
