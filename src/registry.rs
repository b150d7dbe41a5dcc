//! Shared components registry - the long-lived, deduplicated store for
//! schemas and messages.

use crate::error::Result;
use crate::headers::HeaderSchema;
use crate::model::MessageObject;
use crate::payload::TypeInfo;
use crate::schema::{Schema, SchemaResolver};
use log::debug;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Idempotent store for payload/header schemas and message descriptors.
///
/// Every registration is an insert-if-absent keyed by stable identity
/// (schema name, message id), performed under a single write lock, so scans
/// of independent components may run concurrently and converge to one stored
/// value per key. A failed registration leaves previously committed entries
/// untouched.
pub struct ComponentsRegistry {
    /// Resolver consulted the first time a type is registered
    resolver: Box<dyn SchemaResolver>,
    /// Registered schemas, keyed by schema name
    schemas: RwLock<HashMap<String, Schema>>,
    /// Registered messages, keyed by message id
    messages: RwLock<HashMap<String, MessageObject>>,
}

impl ComponentsRegistry {
    /// Create a registry backed by the given schema resolver
    pub fn new(resolver: Box<dyn SchemaResolver>) -> Self {
        debug!("Initializing ComponentsRegistry");
        Self {
            resolver,
            schemas: RwLock::new(HashMap::new()),
            messages: RwLock::new(HashMap::new()),
        }
    }

    /// Register a payload type's schema and return its schema name.
    ///
    /// The schema name is the type's simple name. Registering the same type
    /// again returns the same name without consulting the resolver or
    /// duplicating storage.
    pub fn register_schema(&self, payload: &TypeInfo) -> Result<String> {
        let name = payload.simple_name().to_string();
        let mut schemas = self.schemas.write();

        if let Entry::Vacant(entry) = schemas.entry(name.clone()) {
            debug!("Registering schema \"{}\" for type {}", name, payload.name);
            let schema = self.resolver.resolve(payload)?;
            entry.insert(schema);
        }

        Ok(name)
    }

    /// Register a derived header schema and return its schema name.
    ///
    /// Idempotent by schema name; the first registered body wins.
    pub fn register_headers(&self, headers: &HeaderSchema) -> String {
        let mut schemas = self.schemas.write();
        schemas
            .entry(headers.name.clone())
            .or_insert_with(|| headers.schema.clone());
        headers.name.clone()
    }

    /// Register a message descriptor, idempotently by message id.
    ///
    /// Returns the stored descriptor: on repeat registration this is the
    /// previously registered one, enforcing structural identity per id.
    pub fn register_message(&self, message: MessageObject) -> MessageObject {
        let mut messages = self.messages.write();
        messages
            .entry(message.message_id.clone())
            .or_insert(message)
            .clone()
    }

    /// Snapshot of all registered schemas
    pub fn schemas(&self) -> HashMap<String, Schema> {
        self.schemas.read().clone()
    }

    /// Snapshot of all registered messages
    pub fn messages(&self) -> HashMap<String, MessageObject> {
        self.messages.read().clone()
    }
}
