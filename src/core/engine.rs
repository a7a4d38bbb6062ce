use crate::core::{ConfigProvider, LoyaltyCard, LoyaltyLedger, Result};
use crate::utils::error::LoyaltyError;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Drives one batch of concurrent accumulate/redeem tasks against a shared
/// ledger and waits for all of them on a completion barrier before reading
/// the final card.
pub struct ScenarioEngine<L: LoyaltyLedger + 'static, C: ConfigProvider> {
    ledger: Arc<L>,
    config: C,
}

impl<L: LoyaltyLedger + 'static, C: ConfigProvider> ScenarioEngine<L, C> {
    pub fn new(ledger: L, config: C) -> Self {
        Self {
            ledger: Arc::new(ledger),
            config,
        }
    }

    pub async fn run(&self) -> Result<LoyaltyCard> {
        let accumulate_tasks = self.config.accumulate_tasks();
        let redeem_tasks = self.config.redeem_tasks();

        tracing::info!(
            accumulate_tasks,
            redeem_tasks,
            "dispatching loyalty task batch"
        );

        let mut tasks = JoinSet::new();

        for _ in 0..accumulate_tasks {
            let ledger = Arc::clone(&self.ledger);
            tasks.spawn(async move {
                ledger.accumulate().await;
            });
        }

        for _ in 0..redeem_tasks {
            let ledger = Arc::clone(&self.ledger);
            tasks.spawn(async move {
                ledger.redeem().await;
            });
        }

        // Completion barrier: drain the set until every task has finished.
        match self.config.barrier_timeout() {
            Some(limit) => {
                tokio::time::timeout(limit, Self::join_all(&mut tasks))
                    .await
                    .map_err(|_| LoyaltyError::BarrierTimeout {
                        secs: limit.as_secs(),
                    })??;
            }
            None => Self::join_all(&mut tasks).await?,
        }

        let card = self.ledger.snapshot().await;
        tracing::info!(
            points = card.points,
            redemptions = card.redemptions,
            "task batch complete"
        );

        Ok(card)
    }

    async fn join_all(tasks: &mut JoinSet<()>) -> Result<()> {
        while let Some(joined) = tasks.join_next().await {
            joined?;
        }
        Ok(())
    }
}
