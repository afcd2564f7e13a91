// Invoice model
//
// Invoices are owned by merchants and only feed the aggregation pipeline;
// they are never created or mutated by this client. Amounts are kept
// consistent by construction: total_amount = subtotal + tax_amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Created but not yet issued
    Draft,
    /// Issued, awaiting payment
    Pending,
    /// Settled in full
    Paid,
    /// Past its due date without payment
    Overdue,
    Cancelled,
    Refunded,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Draft
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Pending => "PENDING",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Overdue => "OVERDUE",
            InvoiceStatus::Cancelled => "CANCELLED",
            InvoiceStatus::Refunded => "REFUNDED",
        };
        write!(f, "{}", code)
    }
}

/// Single line of an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// quantity × unit_price
    pub total_price: Decimal,
}

impl InvoiceItem {
    /// Recomputes the line total from quantity and unit price
    pub fn derived_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Represents a merchant invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub merchant_id: String,
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    /// Amount before tax
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    /// subtotal + tax_amount
    pub total_amount: Decimal,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// Recomputes the invoice total from its parts
    pub fn derived_total(&self) -> Decimal {
        self.subtotal + self.tax_amount
    }
}
