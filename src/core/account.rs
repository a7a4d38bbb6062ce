use crate::core::{LoyaltyCard, LoyaltyLedger};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Every tenth point unlocks a redemption.
const REDEMPTION_THRESHOLD: u64 = 10;

/// A loyalty account shared across concurrent tasks. Both counters sit
/// behind a single lock so each operation is one atomic read-modify-write.
#[derive(Debug, Clone, Default)]
pub struct LoyaltyAccount {
    card: Arc<Mutex<LoyaltyCard>>,
}

impl LoyaltyAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card(card: LoyaltyCard) -> Self {
        Self {
            card: Arc::new(Mutex::new(card)),
        }
    }
}

#[async_trait::async_trait]
impl LoyaltyLedger for LoyaltyAccount {
    async fn accumulate(&self) {
        let mut card = self.card.lock().await;
        card.points += 1;
        if card.points % REDEMPTION_THRESHOLD == 0 {
            card.redemptions += 1;
            tracing::debug!(points = card.points, "redemption unlocked");
        }
    }

    async fn redeem(&self) -> bool {
        let mut card = self.card.lock().await;
        if card.redemptions > 0 {
            card.redemptions -= 1;
            true
        } else {
            // Nothing unlocked yet; no-op rather than underflow.
            false
        }
    }

    async fn snapshot(&self) -> LoyaltyCard {
        self.card.lock().await.clone()
    }
}
