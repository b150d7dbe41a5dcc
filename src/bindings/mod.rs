//! Protocol binding factories.
//!
//! This module provides a unified interface for deriving channel names and
//! protocol-specific binding metadata from channel configurations. Each
//! protocol has its own factory implementation that knows how to interpret
//! the configuration options for that protocol.
//!
//! # Supported protocols
//!
//! - **AMQP**: See [`amqp::AmqpBindingFactory`]
//! - **Kafka**: See [`kafka::KafkaBindingFactory`]

pub mod amqp;
pub mod kafka;

use crate::component::ChannelConfig;
use crate::error::{Error, Result};
pub use crate::model::BindingMap;

/// Trait for deriving channel names and protocol binding metadata.
///
/// One factory instance exists per protocol. Implementations interpret the
/// explicit [`ChannelConfig`] attached to a component or operation; a
/// configuration the factory cannot interpret fails with
/// [`Error::BindingResolution`], scoped to the operation or component being
/// scanned.
pub trait BindingFactory: Send + Sync {
    /// Derive the channel name from a configuration
    fn channel_name(&self, config: &ChannelConfig) -> Result<String>;

    /// Build channel-level bindings, keyed by protocol
    fn channel_binding(&self, config: &ChannelConfig) -> Result<BindingMap>;

    /// Build operation-level bindings, keyed by protocol
    fn operation_binding(&self, config: &ChannelConfig) -> Result<BindingMap>;

    /// Build message-level bindings, keyed by protocol
    fn message_binding(&self, config: &ChannelConfig) -> Result<BindingMap>;
}

/// Read a boolean option, with a default when absent
pub(crate) fn bool_option(config: &ChannelConfig, key: &str, default: bool) -> Result<bool> {
    match config.option(key) {
        None => Ok(default),
        Some(value) => value.as_bool().ok_or_else(|| {
            Error::BindingResolution(format!(
                "option \"{}\" of channel \"{}\" must be a boolean",
                key, config.name
            ))
        }),
    }
}

/// Read an optional string option
pub(crate) fn string_option(config: &ChannelConfig, key: &str) -> Result<Option<String>> {
    match config.option(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| {
                Error::BindingResolution(format!(
                    "option \"{}\" of channel \"{}\" must be a string",
                    key, config.name
                ))
            }),
    }
}
