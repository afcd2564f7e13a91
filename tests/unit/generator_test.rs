// Mock data generator invariants: generated records must be internally
// consistent so that downstream aggregation cannot tell them apart from
// live data.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ecodeli_analytics::dashboard::models::delivery_price;
use ecodeli_analytics::dashboard::MockDataGenerator;

#[test]
fn test_merchant_average_order_value_consistency() {
    let merchants = MockDataGenerator::seeded(1).generate_merchants(35);

    for merchant in &merchants {
        let recomputed = merchant.total_revenue / Decimal::from(merchant.total_orders);
        let drift = (merchant.average_order_value * Decimal::from(merchant.total_orders)
            - merchant.total_revenue)
            .abs();
        assert!(
            drift < dec!(0.01),
            "merchant {}: average {} × orders {} drifts from revenue {}",
            merchant.id,
            merchant.average_order_value,
            merchant.total_orders,
            merchant.total_revenue
        );
        assert_eq!(merchant.average_order_value, recomputed);
    }
}

#[test]
fn test_delivery_price_matches_pricing_rule() {
    let deliveries = MockDataGenerator::seeded(2).generate_deliveries(40);

    for delivery in &deliveries {
        let recomputed = delivery_price(
            delivery.distance_km,
            delivery.package_size,
            delivery.delivery_type,
        );
        assert_eq!(
            delivery.price, recomputed,
            "delivery {} price must be reproducible from its inputs",
            delivery.id
        );
    }
}

#[test]
fn test_delivery_fields_are_plausible() {
    let deliveries = MockDataGenerator::seeded(3).generate_deliveries(40);

    for delivery in &deliveries {
        assert!(delivery.distance_km >= 0.0);
        assert!(delivery.price > Decimal::ZERO);
        assert!(delivery.tracking_number.starts_with("ECO"));
        if let Some(rating) = delivery.rating {
            assert!((1.0..=5.0).contains(&rating));
            assert!(delivery.is_completed(), "only delivered packages are rated");
        }
        if delivery.actual_delivery_time.is_some() {
            assert!(delivery.is_completed());
        }
    }
}

#[test]
fn test_service_price_matches_hourly_formula() {
    let services = MockDataGenerator::seeded(4).generate_services(30);

    for service in &services {
        assert_eq!(
            service.price,
            service.total_price(),
            "service {} price must equal hourly_rate × duration / 60",
            service.id
        );
        if let Some(rating) = service.rating {
            assert!((1.0..=5.0).contains(&rating));
            assert!(service.is_completed(), "only completed services are rated");
        }
    }
}

#[test]
fn test_invoice_totals_include_vat() {
    let merchants = MockDataGenerator::seeded(5).generate_merchants(10);

    for merchant in &merchants {
        assert!(!merchant.invoices.is_empty());
        for invoice in &merchant.invoices {
            assert_eq!(invoice.total_amount, invoice.subtotal + invoice.tax_amount);
            // 20% VAT
            assert_eq!(
                invoice.tax_amount,
                (invoice.subtotal * dec!(0.20)).round_dp(2)
            );
            assert_eq!(invoice.merchant_id, merchant.id);
            for item in &invoice.items {
                assert_eq!(item.total_price, item.derived_total());
            }
            if invoice.is_paid() {
                assert!(invoice.paid_date.is_some());
                assert!(invoice.payment_method.is_some());
            }
        }
    }
}

#[test]
fn test_generated_ids_are_unique() {
    let mut generator = MockDataGenerator::seeded(6);
    let merchants = generator.generate_merchants(35);
    let deliveries = generator.generate_deliveries(40);

    let mut merchant_ids: Vec<&String> = merchants.iter().map(|m| &m.id).collect();
    merchant_ids.dedup();
    assert_eq!(merchant_ids.len(), 35);

    let mut tracking: Vec<&String> = deliveries.iter().map(|d| &d.tracking_number).collect();
    tracking.dedup();
    assert_eq!(tracking.len(), 40);
}

proptest! {
    /// The pricing rule is deterministic for arbitrary inputs
    #[test]
    fn prop_delivery_price_deterministic(distance in 0.0f64..1000.0) {
        use ecodeli_analytics::dashboard::models::{DeliveryType, PackageSize};

        for size in PackageSize::ALL {
            for delivery_type in DeliveryType::ALL {
                let a = delivery_price(distance, size, delivery_type);
                let b = delivery_price(distance, size, delivery_type);
                prop_assert_eq!(a, b);
                prop_assert!(a >= dec!(5.00));
            }
        }
    }
}
