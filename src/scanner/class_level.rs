//! Class-level scanner: groups a component's marked operations under its
//! declared channel group.

use super::{ScanEntry, ScanOutcome, Scanner};
use crate::bindings::BindingFactory;
use crate::component::{DescribesChannelGroup, GroupConfig};
use crate::message_builder::{to_messages_map, to_operations_messages_map, MessageBuilder};
use crate::model::{ChannelObject, ChannelReference, MessageObject, Operation};
use crate::payload::PayloadExtractor;
use log::debug;
use std::sync::Arc;

/// What the class-level scanner emits for a channel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// One channel descriptor carrying the full message set
    Channels,
    /// One operation descriptor keyed by channel name and direction
    Operations,
}

/// Scans components that declare a class-level channel group.
///
/// All marked operations of the component contribute messages to a single
/// channel; channel naming and bindings are derived from the group
/// configuration, not from the individual operations.
pub struct ClassLevelScanner {
    factory: Arc<dyn BindingFactory>,
    extractor: Arc<dyn PayloadExtractor>,
    builder: MessageBuilder,
    mode: ScanMode,
}

impl ClassLevelScanner {
    /// Create a scanner in the given mode
    pub fn new(
        factory: Arc<dyn BindingFactory>,
        extractor: Arc<dyn PayloadExtractor>,
        builder: MessageBuilder,
        mode: ScanMode,
    ) -> Self {
        Self {
            factory,
            extractor,
            builder,
            mode,
        }
    }

    /// Build one message per marked operation, recording per-operation
    /// failures without aborting the component scan.
    fn build_messages(
        &self,
        component: &dyn DescribesChannelGroup,
        group: &GroupConfig,
        outcome: &mut ScanOutcome,
    ) -> Vec<MessageObject> {
        let mut messages = Vec::new();

        for operation in component.operations() {
            if operation.channel.is_none() {
                continue;
            }

            let payload = match self.extractor.extract_from(&operation) {
                Ok(payload) => payload,
                Err(error) => {
                    outcome.record_failure(component.component_name(), Some(operation.name.as_str()), error);
                    continue;
                }
            };

            match self
                .builder
                .build_message(self.factory.as_ref(), &group.channel, &payload)
            {
                Ok(message) => messages.push(message),
                Err(error) => {
                    outcome.record_failure(component.component_name(), Some(operation.name.as_str()), error)
                }
            }
        }

        messages
    }
}

impl Scanner for ClassLevelScanner {
    fn scan(&self, component: &dyn DescribesChannelGroup) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        // Safe against pre-filter false positives
        let Some(group) = component.channel_group() else {
            debug!(
                "Component \"{}\" declares no channel group, skipping",
                component.component_name()
            );
            return outcome;
        };

        debug!(
            "Scanning component \"{}\" for grouped operations",
            component.component_name()
        );

        let messages = self.build_messages(component, group, &mut outcome);

        // A channel with zero messages is omitted rather than emitted empty
        if messages.is_empty() {
            return outcome;
        }

        let channel_name = match self.factory.channel_name(&group.channel) {
            Ok(name) => name,
            Err(error) => {
                outcome.record_failure(component.component_name(), None, error);
                return outcome;
            }
        };

        match self.mode {
            ScanMode::Channels => match self.factory.channel_binding(&group.channel) {
                Ok(bindings) => outcome.entries.push(ScanEntry::Channel {
                    name: channel_name,
                    channel: ChannelObject {
                        bindings: Some(bindings),
                        messages: to_messages_map(&messages),
                    },
                }),
                Err(error) => outcome.record_failure(component.component_name(), None, error),
            },
            ScanMode::Operations => match self.factory.operation_binding(&group.channel) {
                Ok(bindings) => {
                    let id = format!("{}_{}", channel_name, group.action);
                    outcome.entries.push(ScanEntry::Operation {
                        id,
                        operation: Operation {
                            action: group.action,
                            channel: ChannelReference::to_channel(&channel_name),
                            bindings: Some(bindings),
                            messages: to_operations_messages_map(&channel_name, &messages),
                        },
                    });
                }
                Err(error) => outcome.record_failure(component.component_name(), None, error),
            },
        }

        outcome
    }
}
