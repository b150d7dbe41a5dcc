//! Method-level scanner: one channel per marked operation, decoupled from
//! sibling operations of the same component.

use super::{ScanEntry, ScanOutcome, Scanner};
use crate::bindings::BindingFactory;
use crate::component::{ChannelConfig, DescribesChannelGroup, OperationSpec};
use crate::error::Result;
use crate::message_builder::{to_messages_map, MessageBuilder};
use crate::model::ChannelObject;
use crate::payload::PayloadExtractor;
use log::debug;
use std::sync::Arc;

/// Scans independently marked operations, each with its own channel
/// configuration.
///
/// No class-level group is required or consulted. Two operations resolving
/// to the same channel name are emitted as separate entries; merging (or
/// rejecting) colliding channels is the document assembly layer's call, once
/// all scanners' outputs are combined.
pub struct MethodLevelScanner {
    factory: Arc<dyn BindingFactory>,
    extractor: Arc<dyn PayloadExtractor>,
    builder: MessageBuilder,
}

impl MethodLevelScanner {
    /// Create a method-level scanner
    pub fn new(
        factory: Arc<dyn BindingFactory>,
        extractor: Arc<dyn PayloadExtractor>,
        builder: MessageBuilder,
    ) -> Self {
        Self {
            factory,
            extractor,
            builder,
        }
    }

    /// Build the channel entry for one marked operation
    fn scan_operation(
        &self,
        operation: &OperationSpec,
        config: &ChannelConfig,
    ) -> Result<ScanEntry> {
        let payload = self.extractor.extract_from(operation)?;
        let message = self
            .builder
            .build_message(self.factory.as_ref(), config, &payload)?;

        let name = self.factory.channel_name(config)?;
        let bindings = self.factory.channel_binding(config)?;

        Ok(ScanEntry::Channel {
            name,
            channel: ChannelObject {
                bindings: Some(bindings),
                messages: to_messages_map(std::slice::from_ref(&message)),
            },
        })
    }
}

impl Scanner for MethodLevelScanner {
    fn scan(&self, component: &dyn DescribesChannelGroup) -> ScanOutcome {
        debug!(
            "Scanning component \"{}\" for independently marked operations",
            component.component_name()
        );

        let mut outcome = ScanOutcome::default();

        for operation in component.operations() {
            let Some(config) = &operation.channel else {
                continue;
            };

            match self.scan_operation(&operation, config) {
                Ok(entry) => outcome.entries.push(entry),
                Err(error) => {
                    outcome.record_failure(component.component_name(), Some(operation.name.as_str()), error)
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::amqp::AmqpBindingFactory;
    use crate::component::{DescribesOperations, GroupConfig, ParameterSpec};
    use crate::headers::NotDocumentedHeaders;
    use crate::model::MessageReference;
    use crate::payload::{SignaturePayloadExtractor, TypeInfo};
    use crate::registry::ComponentsRegistry;
    use crate::schema::{Schema, TypeCatalog};

    struct Notifications {
        operations: Vec<OperationSpec>,
    }

    impl DescribesOperations for Notifications {
        fn component_name(&self) -> &str {
            "notify::Notifications"
        }

        fn operations(&self) -> Vec<OperationSpec> {
            self.operations.clone()
        }
    }

    impl DescribesChannelGroup for Notifications {
        fn channel_group(&self) -> Option<&GroupConfig> {
            None
        }
    }

    fn marked_operation(name: &str, channel: &str, payload_type: &str) -> OperationSpec {
        OperationSpec::new(name)
            .with_channel(ChannelConfig::new(channel))
            .with_parameter(ParameterSpec::payload(
                "payload",
                TypeInfo::new(payload_type.to_string()),
            ))
    }

    fn scanner() -> (MethodLevelScanner, Arc<ComponentsRegistry>) {
        let catalog = TypeCatalog::new()
            .with_type("Email", Schema::empty_object())
            .with_type("Sms", Schema::empty_object());
        let registry = Arc::new(ComponentsRegistry::new(Box::new(catalog)));
        let builder = MessageBuilder::new(Arc::clone(&registry), Arc::new(NotDocumentedHeaders));
        (
            MethodLevelScanner::new(
                Arc::new(AmqpBindingFactory),
                Arc::new(SignaturePayloadExtractor),
                builder,
            ),
            registry,
        )
    }

    #[test]
    fn test_each_operation_gets_its_own_channel() {
        let (scanner, _registry) = scanner();
        let component = Notifications {
            operations: vec![
                marked_operation("on_email", "emails", "notify::Email"),
                marked_operation("on_sms", "texts", "notify::Sms"),
            ],
        };

        let outcome = scanner.scan(&component);

        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.entries.len(), 2);

        let ScanEntry::Channel { name, channel } = &outcome.entries[0] else {
            panic!("expected a channel entry");
        };
        assert_eq!(name, "emails");
        assert_eq!(channel.messages.len(), 1);
        assert_eq!(
            channel.messages["notify::Email"],
            MessageReference::to_component_message("notify::Email")
        );

        let ScanEntry::Channel { name, channel } = &outcome.entries[1] else {
            panic!("expected a channel entry");
        };
        assert_eq!(name, "texts");
        assert_eq!(channel.messages.len(), 1);
    }

    #[test]
    fn test_colliding_channel_names_stay_separate_entries() {
        let (scanner, _registry) = scanner();
        let component = Notifications {
            operations: vec![
                marked_operation("on_email", "outbox", "notify::Email"),
                marked_operation("on_sms", "outbox", "notify::Sms"),
            ],
        };

        let outcome = scanner.scan(&component);

        // The scanner never merges across operations
        assert_eq!(outcome.entries.len(), 2);
        for entry in &outcome.entries {
            let ScanEntry::Channel { name, channel } = entry else {
                panic!("expected a channel entry");
            };
            assert_eq!(name, "outbox");
            assert_eq!(channel.messages.len(), 1);
        }
    }

    #[test]
    fn test_unmarked_operations_are_ignored() {
        let (scanner, registry) = scanner();
        let component = Notifications {
            operations: vec![OperationSpec::new("helper")],
        };

        let outcome = scanner.scan(&component);
        assert!(outcome.entries.is_empty());
        assert!(outcome.failures.is_empty());
        assert!(registry.messages().is_empty());
    }

    #[test]
    fn test_failing_operation_does_not_stop_siblings() {
        let (scanner, _registry) = scanner();
        let component = Notifications {
            operations: vec![
                // No payload parameter, payload resolution fails
                OperationSpec::new("on_broken").with_channel(ChannelConfig::new("broken")),
                marked_operation("on_email", "emails", "notify::Email"),
            ],
        };

        let outcome = scanner.scan(&component);

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].operation.as_deref(), Some("on_broken"));
        assert_eq!(outcome.entries.len(), 1);
    }
}
