// Dashboard aggregate root
//
// DashboardData owns the three entity collections plus the Analytics
// snapshot derived from them. The snapshot is computed in the constructor
// and the fields are never mutated afterwards; a refresh builds a brand new
// value and swaps it in wholesale.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::delivery::Delivery;
use super::merchant::Merchant;
use super::service::Service;
use crate::modules::dashboard::services::aggregator::Aggregator;

/// Ranked merchant entry in the analytics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMerchant {
    pub merchant_id: String,
    pub company_name: String,
    pub total_revenue: Decimal,
    pub total_orders: u64,
    pub loyalty_score: f64,
}

/// Ranked service-type entry in the analytics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopService {
    pub type_code: String,
    pub service_name: String,
    pub total_bookings: u64,
    pub average_rating: f64,
    pub total_revenue: Decimal,
}

/// Derived analytics, a pure function of the three entity collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Trailing 12 months keyed `YYYY-MM`; BTreeMap ordering is
    /// chronological for this key shape
    pub revenue_by_month: BTreeMap<String, Decimal>,
    pub deliveries_by_type: BTreeMap<String, u64>,
    pub services_by_category: BTreeMap<String, u64>,
    pub clients_by_region: BTreeMap<String, u64>,
    pub satisfaction_rates: BTreeMap<String, f64>,
    pub top_merchants: Vec<TopMerchant>,
    pub top_services: Vec<TopService>,
}

/// Snapshot of everything the dashboard and the report pipeline consume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub merchants: Vec<Merchant>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub analytics: Analytics,
    pub last_updated: DateTime<Utc>,
}

impl DashboardData {
    /// Builds a snapshot, deriving the analytics from the collections.
    pub fn new(merchants: Vec<Merchant>, deliveries: Vec<Delivery>, services: Vec<Service>) -> Self {
        let analytics = Aggregator::aggregate(&merchants, &deliveries, &services);
        Self {
            merchants,
            deliveries,
            services,
            analytics,
            last_updated: Utc::now(),
        }
    }

    pub fn total_merchants(&self) -> u64 {
        self.merchants.len() as u64
    }

    pub fn total_deliveries(&self) -> u64 {
        self.deliveries.len() as u64
    }

    pub fn total_services(&self) -> u64 {
        self.services.len() as u64
    }

    /// Combined revenue over all three domains
    pub fn total_revenue(&self) -> Decimal {
        let merchant_revenue: Decimal = self.merchants.iter().map(|m| m.total_revenue).sum();
        let delivery_revenue: Decimal = self.deliveries.iter().map(|d| d.price).sum();
        let service_revenue: Decimal = self.services.iter().map(|s| s.price).sum();
        merchant_revenue + delivery_revenue + service_revenue
    }

    pub fn completed_deliveries(&self) -> u64 {
        self.deliveries.iter().filter(|d| d.is_completed()).count() as u64
    }

    pub fn completed_services(&self) -> u64 {
        self.services.iter().filter(|s| s.is_completed()).count() as u64
    }

    /// Mean of present delivery ratings, 0.0 when nothing is rated
    pub fn average_delivery_rating(&self) -> f64 {
        mean(self.deliveries.iter().filter_map(|d| d.rating))
    }

    /// Mean of present service ratings, 0.0 when nothing is rated
    pub fn average_service_rating(&self) -> f64 {
        mean(self.services.iter().filter_map(|s| s.rating))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u64;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
