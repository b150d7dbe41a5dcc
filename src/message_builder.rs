//! Message construction - composes canonical message descriptors from
//! payload types and registers them through the shared registry.

use crate::bindings::BindingFactory;
use crate::component::ChannelConfig;
use crate::error::Result;
use crate::headers::HeadersBuilder;
use crate::model::{MessageHeaders, MessageObject, MessagePayload, MessageReference};
use crate::payload::TypeInfo;
use crate::registry::ComponentsRegistry;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Builds message descriptors and registers them idempotently.
///
/// Shared by both scanners so that overlapping discovery of the same payload
/// type converges on one stored message.
#[derive(Clone)]
pub struct MessageBuilder {
    registry: Arc<ComponentsRegistry>,
    headers: Arc<dyn HeadersBuilder>,
}

impl MessageBuilder {
    /// Create a builder over a shared registry and header derivation strategy
    pub fn new(registry: Arc<ComponentsRegistry>, headers: Arc<dyn HeadersBuilder>) -> Self {
        Self { registry, headers }
    }

    /// Build the message descriptor for a payload type.
    ///
    /// Registers the payload schema, the derived header schema and the
    /// message itself through the registry (all idempotent), derives
    /// message-level bindings from `config` via the factory, and returns the
    /// stored descriptor. Message identity, id and name are the payload
    /// type's fully-qualified name; the title is its simple name.
    pub fn build_message(
        &self,
        factory: &dyn BindingFactory,
        config: &ChannelConfig,
        payload: &TypeInfo,
    ) -> Result<MessageObject> {
        debug!("Building message for payload type: {}", payload.name);

        let bindings = factory.message_binding(config)?;
        let schema_name = self.registry.register_schema(payload)?;
        let header_schema = self.headers.build_headers(payload);
        let header_name = self.registry.register_headers(&header_schema);

        let message = MessageObject {
            message_id: payload.name.clone(),
            name: payload.name.clone(),
            title: payload.simple_name().to_string(),
            description: None,
            payload: MessagePayload::of_schema(&schema_name),
            headers: MessageHeaders::of_schema(&header_name),
            bindings: Some(bindings),
        };

        Ok(self.registry.register_message(message))
    }
}

/// Map messages by id to component-message references, for channel
/// descriptors
pub fn to_messages_map(messages: &[MessageObject]) -> HashMap<String, MessageReference> {
    messages
        .iter()
        .map(|message| {
            (
                message.message_id.clone(),
                MessageReference::to_component_message(&message.message_id),
            )
        })
        .collect()
}

/// Map messages by id to channel-message references, for operation
/// descriptors
pub fn to_operations_messages_map(
    channel_name: &str,
    messages: &[MessageObject],
) -> HashMap<String, MessageReference> {
    messages
        .iter()
        .map(|message| {
            (
                message.message_id.clone(),
                MessageReference::to_channel_message(channel_name, &message.message_id),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::amqp::AmqpBindingFactory;
    use crate::headers::{NotDocumentedHeaders, NOT_DOCUMENTED};
    use crate::schema::{Schema, TypeCatalog};

    fn builder() -> (MessageBuilder, Arc<ComponentsRegistry>) {
        let catalog = TypeCatalog::new()
            .with_type("Order", Schema::empty_object())
            .with_type("Cancellation", Schema::empty_object());
        let registry = Arc::new(ComponentsRegistry::new(Box::new(catalog)));
        (
            MessageBuilder::new(Arc::clone(&registry), Arc::new(NotDocumentedHeaders)),
            registry,
        )
    }

    #[test]
    fn test_build_message_registers_everything() {
        let (builder, registry) = builder();
        let config = ChannelConfig::new("orders");
        let payload = TypeInfo::new("orders::Order".to_string());

        let message = builder
            .build_message(&AmqpBindingFactory, &config, &payload)
            .unwrap();

        assert_eq!(message.message_id, "orders::Order");
        assert_eq!(message.name, "orders::Order");
        assert_eq!(message.title, "Order");
        assert_eq!(message.payload, MessagePayload::of_schema("Order"));
        assert_eq!(message.headers, MessageHeaders::of_schema(NOT_DOCUMENTED));
        assert!(message.bindings.as_ref().unwrap().contains_key("amqp"));

        // Payload schema, header schema and the message are all stored
        assert_eq!(registry.schemas().len(), 2);
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_build_message_twice_returns_stored_descriptor() {
        let (builder, registry) = builder();
        let config = ChannelConfig::new("orders");
        let payload = TypeInfo::new("orders::Order".to_string());

        let first = builder
            .build_message(&AmqpBindingFactory, &config, &payload)
            .unwrap();
        let second = builder
            .build_message(&AmqpBindingFactory, &config, &payload)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_build_message_fails_for_unresolvable_payload() {
        let (builder, registry) = builder();
        let config = ChannelConfig::new("orders");
        let payload = TypeInfo::new("Unknown".to_string());

        assert!(builder
            .build_message(&AmqpBindingFactory, &config, &payload)
            .is_err());
        assert!(registry.messages().is_empty());
    }

    #[test]
    fn test_messages_map_references() {
        let (builder, _registry) = builder();
        let config = ChannelConfig::new("orders");
        let message = builder
            .build_message(
                &AmqpBindingFactory,
                &config,
                &TypeInfo::new("orders::Order".to_string()),
            )
            .unwrap();

        let channel_map = to_messages_map(std::slice::from_ref(&message));
        assert_eq!(
            channel_map["orders::Order"],
            MessageReference::to_component_message("orders::Order")
        );

        let operations_map = to_operations_messages_map("orders", &[message]);
        assert_eq!(
            operations_map["orders::Order"],
            MessageReference::to_channel_message("orders", "orders::Order")
        );
    }
}
