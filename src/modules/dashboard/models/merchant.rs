use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoice::Invoice;

/// Represents a merchant account on the platform
///
/// Merchants arrive either from the backend `merchants.list` procedure or
/// from the mock generator; both populate the same field set, so the
/// aggregation pipeline never knows where a record came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub business_type: String,
    pub active: bool,
    pub registration_date: DateTime<Utc>,
    pub last_login_date: Option<DateTime<Utc>>,
    pub total_orders: u64,
    pub total_revenue: Decimal,
    /// total_revenue / total_orders, kept consistent by both data sources
    pub average_order_value: Decimal,
    /// 0–100
    pub loyalty_score: f64,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

impl Merchant {
    /// Recomputes the average order value from revenue and order count.
    /// Zero orders yields zero, never a division error.
    pub fn derived_average_order_value(&self) -> Decimal {
        if self.total_orders == 0 {
            return Decimal::ZERO;
        }
        self.total_revenue / Decimal::from(self.total_orders)
    }
}
