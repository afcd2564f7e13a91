use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::dashboard::models::labels;
use crate::modules::dashboard::models::{
    Analytics, Delivery, Merchant, Service, TopMerchant, TopService,
};

/// Number of entries kept in the top-merchant and top-service rankings
const TOP_N: usize = 5;

/// Number of months covered by the revenue series, current month included
const REVENUE_MONTHS: u32 = 12;

/// Rating assumed for a service group with no rated bookings
const DEFAULT_SERVICE_RATING: f64 = 4.0;

/// Derives the analytics snapshot from the raw entity collections.
///
/// Pure and stateless: inputs are borrowed, never mutated, and identical
/// inputs always produce an identical snapshot. Empty collections yield
/// zeroed series rather than errors.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates with the revenue window ending at the current month.
    pub fn aggregate(
        merchants: &[Merchant],
        deliveries: &[Delivery],
        services: &[Service],
    ) -> Analytics {
        Self::aggregate_at(merchants, deliveries, services, Utc::now().date_naive())
    }

    /// Aggregates with an explicit reference date for the trailing revenue
    /// window. The snapshot is fully determined by the arguments.
    pub fn aggregate_at(
        merchants: &[Merchant],
        deliveries: &[Delivery],
        services: &[Service],
        reference_date: NaiveDate,
    ) -> Analytics {
        debug!(
            merchants = merchants.len(),
            deliveries = deliveries.len(),
            services = services.len(),
            "Aggregating dashboard analytics"
        );

        Analytics {
            revenue_by_month: Self::revenue_by_month(merchants, deliveries, services, reference_date),
            deliveries_by_type: Self::deliveries_by_type(deliveries),
            services_by_category: Self::services_by_category(services),
            clients_by_region: Self::clients_by_region(merchants),
            satisfaction_rates: Self::satisfaction_rates(deliveries, services),
            top_merchants: Self::top_merchants(merchants),
            top_services: Self::top_services(services),
        }
    }

    /// Revenue per month over the trailing window, oldest first. Every month
    /// key is present; months without data stay at zero.
    ///
    /// Monthly revenue combines delivery prices (by creation month), service
    /// prices (by scheduled month) and invoice totals (by issue month).
    fn revenue_by_month(
        merchants: &[Merchant],
        deliveries: &[Delivery],
        services: &[Service],
        reference_date: NaiveDate,
    ) -> BTreeMap<String, Decimal> {
        let mut revenue: BTreeMap<String, Decimal> = trailing_month_keys(reference_date)
            .into_iter()
            .map(|key| (key, Decimal::ZERO))
            .collect();

        let mut add = |key: String, amount: Decimal| {
            if let Some(total) = revenue.get_mut(&key) {
                *total += amount;
            }
        };

        for delivery in deliveries {
            add(month_key_of(delivery.created_date.date_naive()), delivery.price);
        }
        for service in services {
            add(month_key_of(service.scheduled_date.date_naive()), service.price);
        }
        for merchant in merchants {
            for invoice in &merchant.invoices {
                add(month_key_of(invoice.issue_date.date_naive()), invoice.total_amount);
            }
        }

        revenue
    }

    /// Occurrence counts per delivery type, keyed by display name.
    /// Zero-count variants are omitted.
    fn deliveries_by_type(deliveries: &[Delivery]) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for delivery in deliveries {
            let key = labels::delivery_type_name(delivery.delivery_type).to_string();
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// Occurrence counts per service category, keyed by display name.
    fn services_by_category(services: &[Service]) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for service in services {
            let key = labels::service_category_name(service.category).to_string();
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// Merchants bucketed by the region of their city; cities outside the
    /// reference table land in the "Autres" bucket.
    fn clients_by_region(merchants: &[Merchant]) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for merchant in merchants {
            let region = labels::region_for_city(&merchant.city).to_string();
            *counts.entry(region).or_insert(0) += 1;
        }
        counts
    }

    /// Mean rating per domain; a domain with no rated entries reports 0.0.
    fn satisfaction_rates(deliveries: &[Delivery], services: &[Service]) -> BTreeMap<String, f64> {
        let mut rates = BTreeMap::new();
        rates.insert(
            "Livraisons".to_string(),
            rating_mean(deliveries.iter().filter_map(|d| d.rating)).unwrap_or(0.0),
        );
        rates.insert(
            "Services".to_string(),
            rating_mean(services.iter().filter_map(|s| s.rating)).unwrap_or(0.0),
        );
        rates
    }

    /// Top five merchants by total revenue, descending. The sort is stable,
    /// so merchants with equal revenue keep their input order.
    fn top_merchants(merchants: &[Merchant]) -> Vec<TopMerchant> {
        let mut ranked: Vec<&Merchant> = merchants.iter().collect();
        ranked.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        ranked
            .into_iter()
            .take(TOP_N)
            .map(|m| TopMerchant {
                merchant_id: m.id.clone(),
                company_name: m.company_name.clone(),
                total_revenue: m.total_revenue,
                total_orders: m.total_orders,
                loyalty_score: m.loyalty_score,
            })
            .collect()
    }

    /// Groups services by type (first-seen order) and ranks the groups by
    /// booking count, descending, stable. A group with no rated bookings
    /// falls back to the default rating.
    fn top_services(services: &[Service]) -> Vec<TopService> {
        let mut group_order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<&Service>> = HashMap::new();

        for service in services {
            let key = labels::service_type_name(service.service_type).to_string();
            let group = groups.entry(key.clone()).or_default();
            if group.is_empty() {
                group_order.push(key);
            }
            group.push(service);
        }

        let mut ranked: Vec<TopService> = group_order
            .into_iter()
            .map(|key| {
                let group = &groups[&key];
                let average_rating = rating_mean(group.iter().filter_map(|s| s.rating))
                    .unwrap_or(DEFAULT_SERVICE_RATING);
                let total_revenue = group.iter().map(|s| s.price).sum();
                TopService {
                    service_name: group[0].name.clone(),
                    type_code: key,
                    total_bookings: group.len() as u64,
                    average_rating,
                    total_revenue,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.total_bookings.cmp(&a.total_bookings));
        ranked.truncate(TOP_N);
        ranked
    }
}

/// `YYYY-MM` keys for the trailing window ending at the reference month,
/// oldest first
fn trailing_month_keys(reference_date: NaiveDate) -> Vec<String> {
    let mut year = reference_date.year();
    let mut month = reference_date.month();
    let mut keys = Vec::with_capacity(REVENUE_MONTHS as usize);

    for _ in 0..REVENUE_MONTHS {
        keys.push(format!("{:04}-{:02}", year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }

    keys.reverse();
    keys
}

fn month_key_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn rating_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u64;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
