use serde::{Deserialize, Serialize};

/// One TechSolutions outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outlet {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub offers: Vec<Offer>,
}

/// A product or accessory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_accessory: bool,
}

/// A special offer or promotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub product_id: i64,
    pub discount: f64,
}

/// A single customer purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub outlet_id: i64,
    pub date: String,
}

/// The GadgetPoints loyalty card: current purchase count and available
/// redemptions. Also serves as the snapshot type read off the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyCard {
    pub id: i64,
    pub points: u64,
    pub redemptions: u64,
}

/// A service obtained through a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionService {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A device discount for subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDiscount {
    pub id: i64,
    pub product_id: i64,
    pub discount_amount: f64,
    pub is_percentage: bool,
}

/// An online-store subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub customer_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub service_used: i64,
    pub services: Vec<SubscriptionService>,
    pub device_discounts: Vec<DeviceDiscount>,
}

/// A customer with a loyalty card and subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub loyalty_card: LoyaltyCard,
    pub subscriptions: Vec<Subscription>,
}
