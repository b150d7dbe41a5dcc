//! AMQP binding factory.

use super::{bool_option, string_option, BindingFactory, BindingMap};
use crate::component::ChannelConfig;
use crate::error::Result;
use log::debug;
use serde_json::json;

/// Binding factory for AMQP channels.
///
/// The channel name is the declared queue name. Recognized options:
/// `durable`, `exclusive`, `autoDelete` (booleans, channel binding),
/// `routingKey` (string, operation binding), `contentEncoding` (string,
/// message binding).
pub struct AmqpBindingFactory;

impl BindingFactory for AmqpBindingFactory {
    fn channel_name(&self, config: &ChannelConfig) -> Result<String> {
        Ok(config.name.clone())
    }

    fn channel_binding(&self, config: &ChannelConfig) -> Result<BindingMap> {
        debug!("Building AMQP channel binding for queue: {}", config.name);

        let queue = json!({
            "name": config.name,
            "durable": bool_option(config, "durable", true)?,
            "exclusive": bool_option(config, "exclusive", false)?,
            "autoDelete": bool_option(config, "autoDelete", false)?,
        });

        let mut bindings = BindingMap::new();
        bindings.insert("amqp".to_string(), json!({ "is": "queue", "queue": queue }));
        Ok(bindings)
    }

    fn operation_binding(&self, config: &ChannelConfig) -> Result<BindingMap> {
        let mut binding = json!({ "ack": bool_option(config, "ack", true)? });
        if let Some(routing_key) = string_option(config, "routingKey")? {
            binding["cc"] = json!([routing_key]);
        }

        let mut bindings = BindingMap::new();
        bindings.insert("amqp".to_string(), binding);
        Ok(bindings)
    }

    fn message_binding(&self, config: &ChannelConfig) -> Result<BindingMap> {
        let mut binding = json!({});
        if let Some(encoding) = string_option(config, "contentEncoding")? {
            binding["contentEncoding"] = json!(encoding);
        }

        let mut bindings = BindingMap::new();
        bindings.insert("amqp".to_string(), binding);
        Ok(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name_is_queue_name() {
        let config = ChannelConfig::new("orders");
        assert_eq!(AmqpBindingFactory.channel_name(&config).unwrap(), "orders");
    }

    #[test]
    fn test_channel_binding_defaults() {
        let config = ChannelConfig::new("orders");
        let bindings = AmqpBindingFactory.channel_binding(&config).unwrap();

        let amqp = &bindings["amqp"];
        assert_eq!(amqp["is"], "queue");
        assert_eq!(amqp["queue"]["name"], "orders");
        assert_eq!(amqp["queue"]["durable"], true);
        assert_eq!(amqp["queue"]["exclusive"], false);
    }

    #[test]
    fn test_operation_binding_with_routing_key() {
        let config = ChannelConfig::new("orders")
            .with_option("routingKey", serde_json::json!("orders.created"));
        let bindings = AmqpBindingFactory.operation_binding(&config).unwrap();

        let amqp = &bindings["amqp"];
        assert_eq!(amqp["ack"], true);
        assert_eq!(amqp["cc"], serde_json::json!(["orders.created"]));
    }

    #[test]
    fn test_malformed_option_is_binding_error() {
        let config = ChannelConfig::new("orders").with_option("durable", serde_json::json!(1));
        assert!(AmqpBindingFactory.channel_binding(&config).is_err());
    }
}
