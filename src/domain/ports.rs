use crate::domain::model::LoyaltyCard;
use async_trait::async_trait;
use std::time::Duration;

/// The two atomic counter operations plus a snapshot read. Raw field access
/// is never exposed; both counters live behind one lock.
#[async_trait]
pub trait LoyaltyLedger: Send + Sync {
    /// Registers one purchase point. May unlock one redemption.
    async fn accumulate(&self);

    /// Consumes one unlocked redemption if any. Returns whether a redemption
    /// was actually consumed; at zero this is a no-op, not an error.
    async fn redeem(&self) -> bool;

    /// Copies out the current card state.
    async fn snapshot(&self) -> LoyaltyCard;
}

pub trait ConfigProvider: Send + Sync {
    fn accumulate_tasks(&self) -> usize;
    fn redeem_tasks(&self) -> usize;
    /// Optional bound on the completion barrier wait. `None` waits forever.
    fn barrier_timeout(&self) -> Option<Duration>;
}
