//! Component scanning strategies.
//!
//! This module provides a unified interface for turning described components
//! into channel and operation descriptors. Two strategies exist over the one
//! descriptor shape:
//!
//! - [`class_level::ClassLevelScanner`] groups all of a component's marked
//!   operations under the component's declared channel group
//! - [`method_level::MethodLevelScanner`] builds one channel per marked
//!   operation, independent of sibling operations
//!
//! Failures are scoped to the smallest unit that failed (one operation or
//! one component) and recorded in the outcome instead of aborting the scan;
//! every failure stays attributable to a component and operation pair.

pub mod class_level;
pub mod method_level;

use crate::component::DescribesChannelGroup;
use crate::error::Error;
use crate::model::{ChannelObject, Operation};
use log::warn;

/// A single descriptor emitted by a scanner.
///
/// Duplicate keys across entries are possible (e.g. two operations resolving
/// to the same channel name); merging them is the document assembly layer's
/// responsibility.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEntry {
    /// A channel descriptor keyed by channel name
    Channel {
        /// The channel name
        name: String,
        /// The channel descriptor
        channel: ChannelObject,
    },
    /// An operation descriptor keyed by channel name and direction
    Operation {
        /// The operation identifier (`{channel}_{action}`)
        id: String,
        /// The operation descriptor
        operation: Operation,
    },
}

/// A failure scoped to one component, and to one operation when applicable.
#[derive(Debug)]
pub struct ScanFailure {
    /// The component being scanned
    pub component: String,
    /// The failing operation, when the failure is operation-scoped
    pub operation: Option<String>,
    /// The underlying error
    pub error: Error,
}

/// The result of scanning: emitted descriptors plus recorded failures.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Emitted descriptors, in discovery order
    pub entries: Vec<ScanEntry>,
    /// Failures recorded without aborting the scan
    pub failures: Vec<ScanFailure>,
}

impl ScanOutcome {
    /// Record a failure, keeping it attributable to its component and
    /// operation
    pub fn record_failure(&mut self, component: &str, operation: Option<&str>, error: Error) {
        match operation {
            Some(op) => warn!("Scan of {}::{} failed: {}", component, op, error),
            None => warn!("Scan of {} failed: {}", component, error),
        }
        self.failures.push(ScanFailure {
            component: component.to_string(),
            operation: operation.map(|s| s.to_string()),
            error,
        });
    }

    /// Fold another outcome into this one
    pub fn merge(&mut self, other: ScanOutcome) {
        self.entries.extend(other.entries);
        self.failures.extend(other.failures);
    }
}

/// Trait for scanning a single described component into descriptors.
///
/// Both strategies implement this trait; which ones run, and in which modes,
/// is selected by configuration rather than subclassing.
pub trait Scanner {
    /// Scan one component. A component without the capability the strategy
    /// looks for yields an empty outcome, not an error.
    fn scan(&self, component: &dyn DescribesChannelGroup) -> ScanOutcome;
}

/// Scan a finite candidate set with every configured scanner.
///
/// A failure in one component's scan never corrupts descriptors already
/// emitted for other components; partial results remain valid.
pub fn scan_components(
    scanners: &[&dyn Scanner],
    components: &[&dyn DescribesChannelGroup],
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for component in components {
        for scanner in scanners {
            outcome.merge(scanner.scan(*component));
        }
    }
    outcome
}
