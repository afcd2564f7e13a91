// Aggregator unit tests: snapshot purity, top-N ranking, trailing revenue
// window and zero-data guards.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ecodeli_analytics::dashboard::models::{Delivery, Merchant, Service};
use ecodeli_analytics::dashboard::services::Aggregator;
use ecodeli_analytics::dashboard::MockDataGenerator;

fn merchant(id: &str, revenue: Decimal) -> Merchant {
    Merchant {
        id: id.to_string(),
        company_name: format!("Company {}", id),
        contact_name: "Jean Martin".to_string(),
        email: "jean.martin@example.com".to_string(),
        phone: "01 02 03 04 05".to_string(),
        address: "1 rue de la Paix".to_string(),
        city: "Paris".to_string(),
        postal_code: "75001".to_string(),
        country: "France".to_string(),
        business_type: "E-commerce".to_string(),
        active: true,
        registration_date: Utc::now(),
        last_login_date: None,
        total_orders: 10,
        total_revenue: revenue,
        average_order_value: revenue / Decimal::from(10),
        loyalty_score: 50.0,
        invoices: vec![],
    }
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

#[test]
fn test_aggregation_is_idempotent() {
    let mut generator = MockDataGenerator::seeded(42);
    let merchants = generator.generate_merchants(35);
    let deliveries = generator.generate_deliveries(40);
    let services = generator.generate_services(30);

    let first = Aggregator::aggregate_at(&merchants, &deliveries, &services, reference_date());
    let second = Aggregator::aggregate_at(&merchants, &deliveries, &services, reference_date());

    assert_eq!(first, second, "identical inputs must produce identical snapshots");
}

#[test]
fn test_aggregation_does_not_mutate_inputs() {
    let mut generator = MockDataGenerator::seeded(5);
    let merchants = generator.generate_merchants(10);
    let before = serde_json::to_value(&merchants).unwrap();

    let _ = Aggregator::aggregate_at(&merchants, &[], &[], reference_date());

    assert_eq!(serde_json::to_value(&merchants).unwrap(), before);
}

#[test]
fn test_top_merchants_ranking_with_stable_ties() {
    let merchants = vec![
        merchant("m1", dec!(100)),
        merchant("m2", dec!(500)),
        merchant("m3", dec!(50)),
        merchant("m4", dec!(500)),
        merchant("m5", dec!(10)),
        merchant("m6", dec!(20)),
        merchant("m7", dec!(5)),
    ];

    let analytics = Aggregator::aggregate_at(&merchants, &[], &[], reference_date());
    let top = &analytics.top_merchants;

    assert_eq!(top.len(), 5);
    let revenues: Vec<Decimal> = top.iter().map(|m| m.total_revenue).collect();
    assert_eq!(
        revenues,
        vec![dec!(500), dec!(500), dec!(100), dec!(50), dec!(20)]
    );
    // The two 500s keep their input order
    assert_eq!(top[0].merchant_id, "m2");
    assert_eq!(top[1].merchant_id, "m4");
}

#[test]
fn test_top_merchants_shorter_than_five() {
    let merchants = vec![merchant("m1", dec!(100)), merchant("m2", dec!(300))];
    let analytics = Aggregator::aggregate_at(&merchants, &[], &[], reference_date());
    assert_eq!(analytics.top_merchants.len(), 2);
    assert_eq!(analytics.top_merchants[0].merchant_id, "m2");
}

#[test]
fn test_empty_inputs_produce_zeroed_snapshot() {
    let analytics = Aggregator::aggregate_at(&[], &[], &[], reference_date());

    assert_eq!(analytics.revenue_by_month.len(), 12);
    assert!(analytics.revenue_by_month.values().all(|v| v.is_zero()));
    assert!(analytics.deliveries_by_type.is_empty());
    assert!(analytics.services_by_category.is_empty());
    assert!(analytics.clients_by_region.is_empty());
    assert!(analytics.top_merchants.is_empty());
    assert!(analytics.top_services.is_empty());
    assert_eq!(analytics.satisfaction_rates["Livraisons"], 0.0);
    assert_eq!(analytics.satisfaction_rates["Services"], 0.0);
}

#[test]
fn test_revenue_window_keys_and_bucketing() {
    let mut generator = MockDataGenerator::seeded(9);
    let mut deliveries = generator.generate_deliveries(1);

    // Pin the only delivery inside the window and give it a known price
    let reference = reference_date();
    deliveries[0].created_date = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
    deliveries[0].price = dec!(100.00);

    let analytics = Aggregator::aggregate_at(&[], &deliveries, &[], reference);

    let keys: Vec<&String> = analytics.revenue_by_month.keys().collect();
    assert_eq!(keys.first().unwrap().as_str(), "2025-09");
    assert_eq!(keys.last().unwrap().as_str(), "2026-08");
    assert_eq!(analytics.revenue_by_month["2026-06"], dec!(100.00));
    assert_eq!(analytics.revenue_by_month["2026-05"], Decimal::ZERO);
}

#[test]
fn test_revenue_outside_window_is_ignored() {
    let mut generator = MockDataGenerator::seeded(9);
    let mut deliveries = generator.generate_deliveries(1);
    deliveries[0].created_date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    deliveries[0].price = dec!(999.00);

    let analytics = Aggregator::aggregate_at(&[], &deliveries, &[], reference_date());
    assert!(analytics.revenue_by_month.values().all(|v| v.is_zero()));
}

#[test]
fn test_deliveries_counted_by_type_label() {
    let mut generator = MockDataGenerator::seeded(21);
    let deliveries = generator.generate_deliveries(40);

    let analytics = Aggregator::aggregate_at(&[], &deliveries, &[], reference_date());
    let counted: u64 = analytics.deliveries_by_type.values().sum();
    assert_eq!(counted, 40);
}

#[test]
fn test_top_services_group_by_type_with_default_rating() {
    let mut generator = MockDataGenerator::seeded(13);
    let mut services: Vec<Service> = generator.generate_services(6);

    for (i, service) in services.iter_mut().enumerate() {
        service.service_type = if i < 4 {
            ecodeli_analytics::dashboard::models::ServiceType::Training
        } else {
            ecodeli_analytics::dashboard::models::ServiceType::Maintenance
        };
        service.rating = None;
        service.price = dec!(10.00);
    }

    let analytics = Aggregator::aggregate_at(&[], &[], &services, reference_date());
    let top = &analytics.top_services;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].total_bookings, 4);
    assert_eq!(top[1].total_bookings, 2);
    // No rated bookings: the default rating applies
    assert_eq!(top[0].average_rating, 4.0);
    assert_eq!(top[0].total_revenue, dec!(40.00));
    // The group label is the name of its first service
    assert_eq!(top[0].service_name, services[0].name);
}

#[test]
fn test_clients_by_region_uses_reference_mapping() {
    let mut lyon = merchant("m1", dec!(100));
    lyon.city = "Lyon".to_string();
    let mut grenoble = merchant("m2", dec!(100));
    grenoble.city = "Grenoble".to_string();
    let mut unknown = merchant("m3", dec!(100));
    unknown.city = "Gotham".to_string();

    let analytics = Aggregator::aggregate_at(&[lyon, grenoble, unknown], &[], &[], reference_date());

    assert_eq!(analytics.clients_by_region["Auvergne-Rhône-Alpes"], 2);
    assert_eq!(analytics.clients_by_region["Autres"], 1);
}

#[test]
fn test_satisfaction_rates_are_domain_means() {
    let mut generator = MockDataGenerator::seeded(17);
    let mut deliveries: Vec<Delivery> = generator.generate_deliveries(3);
    deliveries[0].rating = Some(4.0);
    deliveries[1].rating = Some(5.0);
    deliveries[2].rating = None;

    let analytics = Aggregator::aggregate_at(&[], &deliveries, &[], reference_date());
    assert!((analytics.satisfaction_rates["Livraisons"] - 4.5).abs() < 1e-9);
}

proptest! {
    /// Aggregation is a pure function of its inputs for arbitrary datasets
    #[test]
    fn prop_aggregation_is_pure(
        seed in 0u64..1000,
        merchants in 0usize..20,
        deliveries in 0usize..20,
        services in 0usize..20,
    ) {
        let mut generator = MockDataGenerator::seeded(seed);
        let m = generator.generate_merchants(merchants);
        let d = generator.generate_deliveries(deliveries);
        let s = generator.generate_services(services);

        let reference = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let first = Aggregator::aggregate_at(&m, &d, &s, reference);
        let second = Aggregator::aggregate_at(&m, &d, &s, reference);
        prop_assert_eq!(first, second);
    }

    /// Top-merchant revenues are sorted descending for any dataset
    #[test]
    fn prop_top_merchants_sorted(seed in 0u64..1000, count in 0usize..30) {
        let mut generator = MockDataGenerator::seeded(seed);
        let merchants = generator.generate_merchants(count);
        let reference = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let analytics = Aggregator::aggregate_at(&merchants, &[], &[], reference);
        let revenues: Vec<Decimal> =
            analytics.top_merchants.iter().map(|m| m.total_revenue).collect();
        let mut sorted = revenues.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(revenues, sorted);
        prop_assert!(analytics.top_merchants.len() <= 5);
    }
}