//! Screen configuration.

use zmachine_core::{Capabilities, Version};

/// What to do with an operand that is not a colour code at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRangeAction {
    /// Fail the instruction. Neither channel changes.
    #[default]
    Abort,
    /// Treat the operand as `Default` and carry on.
    SubstituteDefault,
}

/// What to do with a grey the host cannot show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnavailableAction {
    /// Paint the channel's default instead.
    #[default]
    SubstituteDefault,
    /// Leave the channel as it is.
    Ignore,
}

/// How `set_colour` recovers from operands it cannot apply.
///
/// A missing grey is never an error, only a host mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecoveryPolicy {
    pub out_of_range: OutOfRangeAction,
    pub unavailable: UnavailableAction,
}

impl RecoveryPolicy {
    /// Never fail an instruction.
    pub const LENIENT: Self = Self {
        out_of_range: OutOfRangeAction::SubstituteDefault,
        unavailable: UnavailableAction::SubstituteDefault,
    };
}

/// Configuration for creating a [`ScreenColours`](crate::ScreenColours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenConfig {
    pub capabilities: Capabilities,
    pub policy: RecoveryPolicy,
}

impl ScreenConfig {
    /// Configuration for a story of the given version on a colour host.
    #[must_use]
    pub fn for_version(version: Version, host_supports_colour: bool) -> Self {
        Self {
            capabilities: Capabilities::for_version(version, host_supports_colour),
            policy: RecoveryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RecoveryPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_aborts_on_garbage_and_substitutes_greys() {
        let policy = RecoveryPolicy::default();
        assert_eq!(policy.out_of_range, OutOfRangeAction::Abort);
        assert_eq!(policy.unavailable, UnavailableAction::SubstituteDefault);
    }

    #[test]
    fn for_version_derives_capabilities() {
        let v6 = Version::new(6).expect("valid");
        let config = ScreenConfig::for_version(v6, true);
        assert!(config.capabilities.extended_colours());

        let config = config.with_policy(RecoveryPolicy::LENIENT);
        assert_eq!(config.policy, RecoveryPolicy::LENIENT);
        assert!(config.capabilities.colours);
    }
}
