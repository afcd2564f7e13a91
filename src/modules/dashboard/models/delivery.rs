use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// Delivery type, driving one of the price multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    Standard,
    Express,
    SameDay,
    Scheduled,
    International,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 5] = [
        DeliveryType::Standard,
        DeliveryType::Express,
        DeliveryType::SameDay,
        DeliveryType::Scheduled,
        DeliveryType::International,
    ];
}

/// Delivery status lifecycle
///
/// PENDING → ACCEPTED → PICKUP_IN_PROGRESS → IN_TRANSIT → OUT_FOR_DELIVERY
/// → DELIVERED, with FAILED/CANCELLED/RETURNED as terminal side exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,
    Accepted,
    PickupInProgress,
    InTransit,
    OutForDelivery,
    Delivered,
    Failed,
    Cancelled,
    Returned,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 9] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Accepted,
        DeliveryStatus::PickupInProgress,
        DeliveryStatus::InTransit,
        DeliveryStatus::OutForDelivery,
        DeliveryStatus::Delivered,
        DeliveryStatus::Failed,
        DeliveryStatus::Cancelled,
        DeliveryStatus::Returned,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl PackageSize {
    pub const ALL: [PackageSize; 4] = [
        PackageSize::Small,
        PackageSize::Medium,
        PackageSize::Large,
        PackageSize::ExtraLarge,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Normal,
        Priority::High,
        Priority::Urgent,
    ];
}

/// Represents a package delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,
    pub tracking_number: String,
    pub client_id: String,
    pub deliverer_id: String,
    pub merchant_id: String,
    #[serde(rename = "type")]
    pub delivery_type: DeliveryType,
    pub status: DeliveryStatus,
    pub pickup_city: String,
    pub pickup_address: String,
    pub delivery_city: String,
    pub delivery_address: String,
    pub package_content: String,
    pub package_size: PackageSize,
    pub weight_kg: f64,
    pub fragile: bool,
    pub priority: Priority,
    /// Kilometers, never negative
    pub distance_km: f64,
    pub price: Decimal,
    #[serde(default)]
    pub currency: Currency,
    pub created_date: DateTime<Utc>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    pub actual_delivery_time: Option<DateTime<Utc>>,
    /// 1.0–5.0, present only once the client has rated the delivery
    pub rating: Option<f64>,
    pub client_comment: Option<String>,
}

impl Delivery {
    pub fn is_completed(&self) -> bool {
        self.status == DeliveryStatus::Delivered
    }

    /// Recomputes the price from the pricing rule; must match `price` for
    /// generated data.
    pub fn derived_price(&self) -> Decimal {
        delivery_price(self.distance_km, self.package_size, self.delivery_type)
    }
}

/// Delivery pricing rule: (base + distance × rate) × size × type.
///
/// Deterministic for a given (distance, size, type) triple; the result is
/// rounded to cents.
pub fn delivery_price(
    distance_km: f64,
    package_size: PackageSize,
    delivery_type: DeliveryType,
) -> Decimal {
    let base = Decimal::new(500, 2); // 5.00
    let per_km = Decimal::new(80, 2); // 0.80
    let distance = Decimal::from_f64_retain(distance_km.max(0.0))
        .unwrap_or(Decimal::ZERO)
        .round_dp(3);

    let size_multiplier = match package_size {
        PackageSize::Small => Decimal::new(10, 1),      // 1.0
        PackageSize::Medium => Decimal::new(13, 1),     // 1.3
        PackageSize::Large => Decimal::new(17, 1),      // 1.7
        PackageSize::ExtraLarge => Decimal::new(22, 1), // 2.2
    };
    let type_multiplier = match delivery_type {
        DeliveryType::Standard => Decimal::new(10, 1),      // 1.0
        DeliveryType::Express => Decimal::new(15, 1),       // 1.5
        DeliveryType::SameDay => Decimal::new(20, 1),       // 2.0
        DeliveryType::Scheduled => Decimal::new(12, 1),     // 1.2
        DeliveryType::International => Decimal::new(30, 1), // 3.0
    };

    ((base + distance * per_km) * size_multiplier * type_multiplier).round_dp(2)
}
