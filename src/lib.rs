//! AsyncAPI from components - automatic AsyncAPI documentation from
//! described application components.
//!
//! This library builds a machine-readable asynchronous-API contract
//! (channels, operations, messages, and their payload/header schemas) from a
//! set of application components, without executing them. Components describe
//! themselves through capability traits instead of being introspected at
//! runtime.
//!
//! # Supported protocols
//!
//! - **AMQP**: bindings derived by [`bindings::amqp::AmqpBindingFactory`]
//! - **Kafka**: bindings derived by [`bindings::kafka::KafkaBindingFactory`]
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`component`] - Capability traits and explicit channel configuration
//! 2. [`payload`] - Resolves the payload type of an operation signature
//! 3. [`schema`] - Converts payload types to AsyncAPI schemas
//! 4. [`headers`] - Derives header schemas for messages
//! 5. [`registry`] - Deduplicates schemas and messages by stable identity
//! 6. [`bindings`] - Derives channel names and protocol binding metadata
//! 7. [`message_builder`] - Composes canonical message descriptors
//! 8. [`scanner`] - Class-level and method-level scanning strategies
//! 9. [`document_builder`] - Merges scanner output into the final document
//! 10. [`serializer`] - Serializes the document to YAML or JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use asyncapi_from_components::{
//!     bindings::amqp::AmqpBindingFactory,
//!     component::{
//!         ChannelConfig, DescribesChannelGroup, DescribesOperations, GroupConfig,
//!         OperationSpec, ParameterSpec,
//!     },
//!     document_builder::AsyncApiBuilder,
//!     headers::NotDocumentedHeaders,
//!     message_builder::MessageBuilder,
//!     model::OperationAction,
//!     payload::{SignaturePayloadExtractor, TypeInfo},
//!     registry::ComponentsRegistry,
//!     scanner::{
//!         class_level::{ClassLevelScanner, ScanMode},
//!         scan_components,
//!     },
//!     schema::{Schema, TypeCatalog},
//!     serializer::serialize_yaml,
//! };
//! use std::sync::Arc;
//!
//! // A component describing one consumer grouped under the "orders" channel
//! struct Orders {
//!     group: GroupConfig,
//! }
//!
//! impl DescribesOperations for Orders {
//!     fn component_name(&self) -> &str {
//!         "orders::Orders"
//!     }
//!
//!     fn operations(&self) -> Vec<OperationSpec> {
//!         vec![OperationSpec::new("on_create")
//!             .with_channel(ChannelConfig::new(""))
//!             .with_parameter(ParameterSpec::payload(
//!                 "order",
//!                 TypeInfo::new("orders::Order".to_string()),
//!             ))]
//!     }
//! }
//!
//! impl DescribesChannelGroup for Orders {
//!     fn channel_group(&self) -> Option<&GroupConfig> {
//!         Some(&self.group)
//!     }
//! }
//!
//! // Describe payload schemas and wire up the engine
//! let catalog = TypeCatalog::new().with_type("Order", Schema::empty_object());
//! let registry = Arc::new(ComponentsRegistry::new(Box::new(catalog)));
//! let builder = MessageBuilder::new(Arc::clone(&registry), Arc::new(NotDocumentedHeaders));
//! let scanner = ClassLevelScanner::new(
//!     Arc::new(AmqpBindingFactory),
//!     Arc::new(SignaturePayloadExtractor),
//!     builder,
//!     ScanMode::Channels,
//! );
//!
//! // Scan the candidate set and assemble the document
//! let orders = Orders {
//!     group: GroupConfig::new(ChannelConfig::new("orders"), OperationAction::Receive),
//! };
//! let outcome = scan_components(&[&scanner], &[&orders]);
//!
//! let mut document = AsyncApiBuilder::new();
//! document.add_outcome(outcome);
//! let yaml = serialize_yaml(&document.build(&registry)).unwrap();
//! println!("{}", yaml);
//! ```

pub mod bindings;
pub mod component;
pub mod document_builder;
pub mod error;
pub mod headers;
pub mod message_builder;
pub mod model;
pub mod payload;
pub mod registry;
pub mod scanner;
pub mod schema;
pub mod serializer;
