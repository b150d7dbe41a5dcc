//! AsyncAPI document builder - merges scanner output into the final
//! contract document.

use crate::model::{ChannelObject, MessageObject, Operation};
use crate::registry::ComponentsRegistry;
use crate::scanner::{ScanEntry, ScanFailure, ScanOutcome};
use crate::schema::Schema;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// AsyncAPI document builder
pub struct AsyncApiBuilder {
    /// Document info section
    info: Info,
    /// Channels collection (channel name -> descriptor)
    channels: HashMap<String, ChannelObject>,
    /// Operations collection (operation id -> descriptor)
    operations: HashMap<String, Operation>,
    /// Failures carried over from scan outcomes
    failures: Vec<ScanFailure>,
}

/// AsyncAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// AsyncAPI Components object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Schema definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<HashMap<String, Schema>>,
    /// Message definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<HashMap<String, MessageObject>>,
}

/// Complete AsyncAPI document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncApiDocument {
    /// AsyncAPI version
    pub asyncapi: String,
    /// API info
    pub info: Info,
    /// Channels of the contract
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub channels: HashMap<String, ChannelObject>,
    /// Operations of the contract
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub operations: HashMap<String, Operation>,
    /// Components (schemas, messages)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

impl AsyncApiBuilder {
    /// Create a new builder with default info
    pub fn new() -> Self {
        debug!("Initializing AsyncApiBuilder");
        Self {
            info: Info {
                title: "Generated API".to_string(),
                version: "1.0.0".to_string(),
                description: Some(
                    "AsyncAPI documentation generated from application components".to_string(),
                ),
            },
            channels: HashMap::new(),
            operations: HashMap::new(),
            failures: Vec::new(),
        }
    }

    /// Set custom info for the API
    pub fn with_info(mut self, title: String, version: String, description: Option<String>) -> Self {
        self.info = Info {
            title,
            version,
            description,
        };
        self
    }

    /// Add a single scan entry to the document.
    ///
    /// Entries sharing a key merge their message maps; the first entry's
    /// bindings win and a conflicting later binding set is logged.
    pub fn add_entry(&mut self, entry: ScanEntry) {
        match entry {
            ScanEntry::Channel { name, channel } => {
                debug!("Adding channel: {}", name);
                match self.channels.entry(name) {
                    std::collections::hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(channel);
                    }
                    std::collections::hash_map::Entry::Occupied(mut occupied) => {
                        if occupied.get().bindings != channel.bindings {
                            warn!(
                                "Conflicting bindings for channel \"{}\", keeping the first set",
                                occupied.key()
                            );
                        }
                        occupied.get_mut().messages.extend(channel.messages);
                    }
                }
            }
            ScanEntry::Operation { id, operation } => {
                debug!("Adding operation: {}", id);
                match self.operations.entry(id) {
                    std::collections::hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(operation);
                    }
                    std::collections::hash_map::Entry::Occupied(mut occupied) => {
                        if occupied.get().bindings != operation.bindings {
                            warn!(
                                "Conflicting bindings for operation \"{}\", keeping the first set",
                                occupied.key()
                            );
                        }
                        occupied.get_mut().messages.extend(operation.messages);
                    }
                }
            }
        }
    }

    /// Fold a whole scan outcome into the document, keeping its failures
    /// available for reporting
    pub fn add_outcome(&mut self, outcome: ScanOutcome) {
        for entry in outcome.entries {
            self.add_entry(entry);
        }
        self.failures.extend(outcome.failures);
    }

    /// Failures recorded by the scans folded in so far
    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    /// Build the final document, snapshotting the registry into the
    /// components section
    pub fn build(self, registry: &ComponentsRegistry) -> AsyncApiDocument {
        debug!("Building final AsyncAPI document");

        let schemas = registry.schemas();
        let messages = registry.messages();
        let components = if schemas.is_empty() && messages.is_empty() {
            None
        } else {
            Some(Components {
                schemas: if schemas.is_empty() { None } else { Some(schemas) },
                messages: if messages.is_empty() { None } else { Some(messages) },
            })
        };

        AsyncApiDocument {
            asyncapi: "3.0.0".to_string(),
            info: self.info,
            channels: self.channels,
            operations: self.operations,
            components,
        }
    }
}

impl Default for AsyncApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChannelReference, MessageReference, OperationAction};
    use crate::schema::TypeCatalog;

    fn empty_registry() -> ComponentsRegistry {
        ComponentsRegistry::new(Box::new(TypeCatalog::new()))
    }

    fn channel_entry(name: &str, message_id: &str) -> ScanEntry {
        let mut messages = HashMap::new();
        messages.insert(
            message_id.to_string(),
            MessageReference::to_component_message(message_id),
        );
        ScanEntry::Channel {
            name: name.to_string(),
            channel: ChannelObject {
                bindings: None,
                messages,
            },
        }
    }

    #[test]
    fn test_new_builder() {
        let builder = AsyncApiBuilder::new();

        assert_eq!(builder.info.title, "Generated API");
        assert_eq!(builder.info.version, "1.0.0");
        assert!(builder.channels.is_empty());
        assert!(builder.operations.is_empty());
    }

    #[test]
    fn test_with_info() {
        let builder = AsyncApiBuilder::new().with_info(
            "Orders API".to_string(),
            "2.0.0".to_string(),
            Some("Custom description".to_string()),
        );

        assert_eq!(builder.info.title, "Orders API");
        assert_eq!(builder.info.version, "2.0.0");
    }

    #[test]
    fn test_colliding_channels_merge_messages() {
        let mut builder = AsyncApiBuilder::new();
        builder.add_entry(channel_entry("outbox", "notify::Email"));
        builder.add_entry(channel_entry("outbox", "notify::Sms"));

        assert_eq!(builder.channels.len(), 1);
        assert_eq!(builder.channels["outbox"].messages.len(), 2);
    }

    #[test]
    fn test_colliding_operations_merge_messages() {
        let operation = |message_id: &str| {
            let mut messages = HashMap::new();
            messages.insert(
                message_id.to_string(),
                MessageReference::to_channel_message("orders", message_id),
            );
            ScanEntry::Operation {
                id: "orders_receive".to_string(),
                operation: Operation {
                    action: OperationAction::Receive,
                    channel: ChannelReference::to_channel("orders"),
                    bindings: None,
                    messages,
                },
            }
        };

        let mut builder = AsyncApiBuilder::new();
        builder.add_entry(operation("orders::Order"));
        builder.add_entry(operation("orders::Cancellation"));

        assert_eq!(builder.operations.len(), 1);
        assert_eq!(builder.operations["orders_receive"].messages.len(), 2);
    }

    #[test]
    fn test_build_without_components() {
        let builder = AsyncApiBuilder::new();
        let document = builder.build(&empty_registry());

        assert_eq!(document.asyncapi, "3.0.0");
        assert!(document.components.is_none());
        assert!(document.channels.is_empty());
    }

    #[test]
    fn test_outcome_failures_are_kept() {
        let mut outcome = ScanOutcome::default();
        outcome.record_failure(
            "orders::Orders",
            Some("on_create"),
            crate::error::Error::BindingResolution("bad option".to_string()),
        );

        let mut builder = AsyncApiBuilder::new();
        builder.add_outcome(outcome);

        assert_eq!(builder.failures().len(), 1);
        assert_eq!(builder.failures()[0].component, "orders::Orders");
    }
}
