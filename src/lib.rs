pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::{account::LoyaltyAccount, engine::ScenarioEngine};
pub use domain::model::LoyaltyCard;
pub use domain::ports::{ConfigProvider, LoyaltyLedger};
pub use utils::error::{LoyaltyError, Result};
