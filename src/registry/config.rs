//! Registry configuration.

/// What a failed destructive load leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailurePolicy {
    /// State is cleared before parsing; a failed load leaves the registry empty
    #[default]
    Clear,
    /// State is replaced only after a successful parse; a failed load leaves
    /// the registry as it was
    Retain,
}

/// Options controlling registry loads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub failure_policy: FailurePolicy,
}

impl RegistryConfig {
    /// Configuration for atomic reloads.
    pub fn retaining() -> Self {
        Self {
            failure_policy: FailurePolicy::Retain,
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}
