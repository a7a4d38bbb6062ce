pub mod account;
pub mod engine;

pub use crate::domain::model::LoyaltyCard;
pub use crate::domain::ports::{ConfigProvider, LoyaltyLedger};
pub use crate::utils::error::Result;
