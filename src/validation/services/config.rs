//! Executor configuration.

/// How the executor treats a validator that faults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Abort on the first fault and return it to the caller.
    #[default]
    FailFast,
    /// Record the fault as a validation error and keep going.
    Capture,
}

/// Configuration for [`ValidationExecutor`](super::ValidationExecutor).
///
/// # Examples
///
/// ```
/// use plugin_base::validation::services::{ExecutorConfig, FaultPolicy};
///
/// let config = ExecutorConfig::default();
/// assert_eq!(config.fault_policy, FaultPolicy::FailFast);
///
/// let capturing = ExecutorConfig::capturing();
/// assert_eq!(capturing.fault_policy, FaultPolicy::Capture);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Policy applied when a configured validator faults.
    pub fault_policy: FaultPolicy,
}

impl ExecutorConfig {
    /// Creates a configuration that propagates validator faults.
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self {
            fault_policy: FaultPolicy::FailFast,
        }
    }

    /// Creates a configuration that folds validator faults into the result.
    ///
    /// Useful when a plugin would rather show the user every problem than
    /// surface an internal error.
    #[must_use]
    pub const fn capturing() -> Self {
        Self {
            fault_policy: FaultPolicy::Capture,
        }
    }
}
