//! Kafka binding factory.

use super::{string_option, BindingFactory, BindingMap};
use crate::component::ChannelConfig;
use crate::error::{Error, Result};
use log::debug;
use serde_json::json;

/// Binding factory for Kafka channels.
///
/// The channel name is the topic name. Recognized options: `partitions`,
/// `replicas` (positive integers, channel binding), `groupId` (string,
/// operation binding), `key` (string, message binding).
pub struct KafkaBindingFactory;

impl KafkaBindingFactory {
    fn integer_option(config: &ChannelConfig, key: &str) -> Result<Option<u64>> {
        match config.option(key) {
            None => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| {
                Error::BindingResolution(format!(
                    "option \"{}\" of channel \"{}\" must be a positive integer",
                    key, config.name
                ))
            }),
        }
    }
}

impl BindingFactory for KafkaBindingFactory {
    fn channel_name(&self, config: &ChannelConfig) -> Result<String> {
        Ok(config.name.clone())
    }

    fn channel_binding(&self, config: &ChannelConfig) -> Result<BindingMap> {
        debug!("Building Kafka channel binding for topic: {}", config.name);

        let mut binding = json!({});
        if let Some(partitions) = Self::integer_option(config, "partitions")? {
            binding["partitions"] = json!(partitions);
        }
        if let Some(replicas) = Self::integer_option(config, "replicas")? {
            binding["replicas"] = json!(replicas);
        }

        let mut bindings = BindingMap::new();
        bindings.insert("kafka".to_string(), binding);
        Ok(bindings)
    }

    fn operation_binding(&self, config: &ChannelConfig) -> Result<BindingMap> {
        let mut binding = json!({});
        if let Some(group_id) = string_option(config, "groupId")? {
            binding["groupId"] = json!({ "type": "string", "enum": [group_id] });
        }

        let mut bindings = BindingMap::new();
        bindings.insert("kafka".to_string(), binding);
        Ok(bindings)
    }

    fn message_binding(&self, config: &ChannelConfig) -> Result<BindingMap> {
        let mut binding = json!({});
        if let Some(key) = string_option(config, "key")? {
            binding["key"] = json!({ "type": "string", "enum": [key] });
        }

        let mut bindings = BindingMap::new();
        bindings.insert("kafka".to_string(), binding);
        Ok(bindings)
    }
}
