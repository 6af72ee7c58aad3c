use crate::domain::user::{Tier, TierOperation, User};
use crate::error::TransitionError;

/// Adjudicates tier transitions for a single user.
///
/// This use case only decides whether a move is allowed; mutating the user's
/// tier (and persisting it) is the caller's job.
pub struct UserStatusService {
    user: User,
}

impl UserStatusService {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// The transition rule table.
    ///
    /// Upgrades to the top tier and downgrades to the bottom tier are
    /// categorically blocked regardless of the current tier. That restriction
    /// is carried over verbatim from the source policy; see DESIGN.md before
    /// "fixing" it.
    pub fn check_transition(
        &self,
        current: Tier,
        target: Tier,
        operation: TierOperation,
    ) -> Result<(), TransitionError> {
        match operation {
            TierOperation::Upgrade => {
                if target <= current || target == Tier::Premium {
                    return Err(TransitionError::UpgradeBlocked);
                }
            }
            TierOperation::Downgrade => {
                if target > current || target == Tier::Freemium {
                    return Err(TransitionError::DowngradeBlocked);
                }
            }
        }
        Ok(())
    }

    pub fn upgrade(&self, target: Tier) -> Result<(), TransitionError> {
        let result = self.check_transition(self.user.tier, target, TierOperation::Upgrade);
        match &result {
            Ok(()) => tracing::debug!(user = %self.user.id, from = %self.user.tier, to = %target, "upgrade permitted"),
            Err(err) => tracing::warn!(user = %self.user.id, from = %self.user.tier, to = %target, error = %err, "upgrade rejected"),
        }
        result
    }

    pub fn downgrade(&self, target: Tier) -> Result<(), TransitionError> {
        let result = self.check_transition(self.user.tier, target, TierOperation::Downgrade);
        match &result {
            Ok(()) => tracing::debug!(user = %self.user.id, from = %self.user.tier, to = %target, "downgrade permitted"),
            Err(err) => tracing::warn!(user = %self.user.id, from = %self.user.tier, to = %target, error = %err, "downgrade rejected"),
        }
        result
    }
}
