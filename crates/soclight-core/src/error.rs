//! Plan construction errors.

use thiserror::Error;

/// Errors that can occur while resolving clock domains or composing subsystems.
///
/// Every variant is a configuration mistake detected synchronously during
/// composition. None are transient, none are retried, and no partial plan is
/// ever returned alongside one.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(
        "generator '{pll}' capacity exceeded: {requested} outputs requested, {capacity} available"
    )]
    GeneratorCapacityExceeded {
        pll: String,
        requested: usize,
        capacity: usize,
    },

    #[error("options '{first}' and '{second}' are mutually exclusive")]
    MutuallyExclusiveOptions { first: String, second: String },

    #[error("subsystem '{subsystem}' references clock domain '{domain}' which is not in the plan")]
    UnresolvedDomainReference { subsystem: String, domain: String },
}
