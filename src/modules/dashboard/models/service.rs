use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    SpaceRental,
    HomeService,
    ProfessionalService,
    Training,
    Maintenance,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::SpaceRental,
        ServiceType::HomeService,
        ServiceType::ProfessionalService,
        ServiceType::Training,
        ServiceType::Maintenance,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    Cleaning,
    Repair,
    Installation,
    Consulting,
    Education,
    Wellness,
    Transport,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 8] = [
        ServiceCategory::Cleaning,
        ServiceCategory::Repair,
        ServiceCategory::Installation,
        ServiceCategory::Consulting,
        ServiceCategory::Education,
        ServiceCategory::Wellness,
        ServiceCategory::Transport,
        ServiceCategory::Other,
    ];
}

/// Service status lifecycle
///
/// REQUESTED → SCHEDULED → CONFIRMED → IN_PROGRESS → COMPLETED, with
/// CANCELLED/NO_SHOW/RESCHEDULED as side exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Requested,
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
    Rescheduled,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 8] = [
        ServiceStatus::Requested,
        ServiceStatus::Scheduled,
        ServiceStatus::Confirmed,
        ServiceStatus::InProgress,
        ServiceStatus::Completed,
        ServiceStatus::Cancelled,
        ServiceStatus::NoShow,
        ServiceStatus::Rescheduled,
    ];
}

/// Represents a booked personal or professional service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub category: ServiceCategory,
    pub provider_id: String,
    pub provider_name: String,
    pub client_id: String,
    pub client_name: String,
    pub status: ServiceStatus,
    pub city: String,
    pub location: String,
    pub scheduled_date: DateTime<Utc>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: u32,
    /// Zero for flat-priced services
    pub hourly_rate: Decimal,
    /// Authoritative value is `total_price()` whenever hourly_rate > 0
    pub price: Decimal,
    #[serde(default)]
    pub currency: Currency,
    pub rating: Option<f64>,
    pub client_feedback: Option<String>,
    pub equipment_provided: bool,
    pub equipment_list: Option<String>,
    pub certification_required: bool,
    pub repeat_service: bool,
    pub repeat_frequency: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Service {
    pub fn is_completed(&self) -> bool {
        self.status == ServiceStatus::Completed
    }

    /// hourly_rate × duration / 60 rounded to cents, or the flat price when
    /// no hourly rate applies
    pub fn total_price(&self) -> Decimal {
        if self.hourly_rate.is_zero() {
            return self.price;
        }
        (self.hourly_rate * Decimal::from(self.duration_minutes) / Decimal::from(60)).round_dp(2)
    }
}
