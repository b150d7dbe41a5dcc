//! Capability interface implemented (or adapted to) by candidate components.
//!
//! Instead of introspecting annotated classes at runtime, components describe
//! themselves: a component exposes the operations that act as message
//! producers/consumers, and optionally a channel group covering all of them.
//! Annotation attributes become explicit [`ChannelConfig`] values handed to
//! the binding factory.

use crate::model::OperationAction;
use crate::payload::TypeInfo;
use std::collections::HashMap;

/// Explicit channel configuration, replacing a marker annotation instance.
///
/// `name` is the declared channel name (queue, topic, ...); `options` carries
/// protocol-specific attributes interpreted by the binding factory.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    /// Declared channel name
    pub name: String,
    /// Protocol-specific attributes (e.g. "durable", "groupId")
    pub options: HashMap<String, serde_json::Value>,
}

impl ChannelConfig {
    /// Create a configuration with no protocol options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: HashMap::new(),
        }
    }

    /// Add a protocol option
    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Look up a protocol option
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }
}

/// Class-level channel group configuration: one channel and one direction
/// covering every marked operation of the component.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfig {
    /// Channel configuration shared by all grouped operations
    pub channel: ChannelConfig,
    /// Direction of the grouped operations
    pub action: OperationAction,
}

impl GroupConfig {
    /// Create a group configuration
    pub fn new(channel: ChannelConfig, action: OperationAction) -> Self {
        Self { channel, action }
    }
}

/// Role of a parameter in an operation signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterRole {
    /// The message payload
    Payload,
    /// A message header
    Header,
    /// Framework or connection context, ignored for payload resolution
    Context,
}

/// A single parameter of an operation signature
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name
    pub name: String,
    /// Declared parameter type
    pub type_info: TypeInfo,
    /// Role of the parameter
    pub role: ParameterRole,
}

impl ParameterSpec {
    /// Create a payload parameter
    pub fn payload(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
            role: ParameterRole::Payload,
        }
    }

    /// Create a header parameter
    pub fn header(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
            role: ParameterRole::Header,
        }
    }

    /// Create a context parameter
    pub fn context(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
            role: ParameterRole::Context,
        }
    }
}

/// The method-level marker made explicit: one message-handling operation of a
/// component.
///
/// `channel` is `Some` when the operation carries the marker; operations
/// without it are ignored by both scanners. Under a class-level group the
/// marker configuration may be empty, since the group configuration drives
/// channel naming and bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSpec {
    /// Operation (method) name, used for failure attribution
    pub name: String,
    /// Marker configuration, present iff the operation is marked
    pub channel: Option<ChannelConfig>,
    /// Declared parameters of the operation
    pub parameters: Vec<ParameterSpec>,
}

impl OperationSpec {
    /// Create an unmarked operation with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel: None,
            parameters: Vec::new(),
        }
    }

    /// Mark the operation with a channel configuration
    pub fn with_channel(mut self, config: ChannelConfig) -> Self {
        self.channel = Some(config);
        self
    }

    /// Add a parameter
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// Capability of a component that exposes marked message-handling operations.
pub trait DescribesOperations {
    /// Fully-qualified component name, used for failure attribution
    fn component_name(&self) -> &str;

    /// The component's declared operations, marked and unmarked
    fn operations(&self) -> Vec<OperationSpec>;
}

/// Capability of a component that additionally declares a class-level channel
/// group covering its marked operations.
///
/// `channel_group` returns `None` when the component declares no group, so a
/// scanner handed a pre-filter false positive yields nothing instead of
/// failing.
pub trait DescribesChannelGroup: DescribesOperations {
    /// The declared channel group, if any
    fn channel_group(&self) -> Option<&GroupConfig>;
}
