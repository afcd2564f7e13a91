// End-to-end composition pipeline over a synthetic dataset: section count
// and order, numeric totals cross-checked against the raw collections, and
// pagination of the final document.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ecodeli_analytics::core::format::{format_count, format_currency};
use ecodeli_analytics::core::Currency;
use ecodeli_analytics::dashboard::models::DashboardData;
use ecodeli_analytics::dashboard::MockDataGenerator;
use ecodeli_analytics::reports::models::{
    ReportRequest, Section, SectionEntry, SectionKind, SectionOptions,
};
use ecodeli_analytics::reports::services::render_text;
use ecodeli_analytics::reports::{Paginator, ReportComposer};

fn dataset() -> DashboardData {
    let mut generator = MockDataGenerator::seeded(2026);
    DashboardData::new(
        generator.generate_merchants(35),
        generator.generate_deliveries(40),
        generator.generate_services(30),
    )
}

fn request() -> ReportRequest {
    ReportRequest {
        report_type: "Rapport complet".to_string(),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
        options: SectionOptions::default(),
    }
}

fn metric_value<'a>(section: &'a Section, label: &str) -> &'a str {
    section
        .entries
        .iter()
        .find_map(|entry| match entry {
            SectionEntry::Metric { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("metric '{}' missing in section '{}'", label, section.title))
}

#[test]
fn test_full_report_sections_and_totals() {
    let data = dataset();
    let document = ReportComposer::compose(&data, &request()).unwrap();

    // All flags on: cover, summary, merchants, deliveries, services,
    // analytics, charts, appendix
    assert_eq!(document.sections.len(), 8);
    assert_eq!(
        document.section_kinds(),
        vec![
            SectionKind::Cover,
            SectionKind::Summary,
            SectionKind::Merchants,
            SectionKind::Deliveries,
            SectionKind::Services,
            SectionKind::Analytics,
            SectionKind::Charts,
            SectionKind::Appendix,
        ]
    );

    // Summary totals recomputed independently from the raw collections
    let summary = document.section(SectionKind::Summary).unwrap();
    assert_eq!(metric_value(summary, "Commerçants totaux"), "35");
    assert_eq!(metric_value(summary, "Livraisons totales"), "40");
    assert_eq!(metric_value(summary, "Services totaux"), "30");

    let merchant_revenue: Decimal = data.merchants.iter().map(|m| m.total_revenue).sum();
    let delivery_revenue: Decimal = data.deliveries.iter().map(|d| d.price).sum();
    let service_revenue: Decimal = data.services.iter().map(|s| s.price).sum();
    assert_eq!(
        metric_value(summary, "Revenus totaux"),
        format_currency(
            merchant_revenue + delivery_revenue + service_revenue,
            Currency::EUR
        )
    );

    // Per-domain sections agree with the raw lists
    let merchants = document.section(SectionKind::Merchants).unwrap();
    let active = data.merchants.iter().filter(|m| m.active).count() as u64;
    assert_eq!(metric_value(merchants, "Commerçants actifs"), format_count(active));

    let deliveries = document.section(SectionKind::Deliveries).unwrap();
    let completed = data.deliveries.iter().filter(|d| d.is_completed()).count() as u64;
    assert_eq!(
        metric_value(deliveries, "Livraisons terminées"),
        format_count(completed)
    );
    assert_eq!(
        metric_value(deliveries, "Revenus des livraisons"),
        format_currency(delivery_revenue, Currency::EUR)
    );

    let services = document.section(SectionKind::Services).unwrap();
    assert_eq!(
        metric_value(services, "Revenus des services"),
        format_currency(service_revenue, Currency::EUR)
    );
}

#[test]
fn test_analytics_section_mirrors_snapshot_rankings() {
    let data = dataset();
    let document = ReportComposer::compose(&data, &request()).unwrap();

    let section = document.section(SectionKind::Analytics).unwrap();
    let ranked_labels: Vec<&str> = section
        .entries
        .iter()
        .filter_map(|entry| match entry {
            SectionEntry::Ranked { label, .. } => Some(label.as_str()),
            _ => None,
        })
        .collect();

    for top_merchant in &data.analytics.top_merchants {
        assert!(
            ranked_labels.contains(&top_merchant.company_name.as_str()),
            "top merchant {} missing from the analytics section",
            top_merchant.company_name
        );
    }
}

#[test]
fn test_pagination_and_text_rendering_of_full_report() {
    let data = dataset();
    let document = ReportComposer::compose(&data, &request()).unwrap();
    let pages = Paginator::new().paginate(&document);

    // Cover and summary are always alone, content follows
    assert!(pages.len() >= 3);

    let text = render_text(&pages);
    for section in &document.sections {
        assert!(
            text.contains(&section.title),
            "section title '{}' missing from the text rendering",
            section.title
        );
    }
    assert!(text.contains("--- page 1 ---"));
    assert!(text.contains("Taux de réussite livraisons:"));
}

#[test]
fn test_composition_is_reproducible_for_a_snapshot() {
    let data = dataset();
    let first = ReportComposer::compose(&data, &request()).unwrap();
    let second = ReportComposer::compose(&data, &request()).unwrap();

    // Generation timestamps differ; the section structure must not
    assert_eq!(first.section_kinds(), second.section_kinds());
    for (a, b) in first.sections.iter().zip(second.sections.iter()) {
        if a.kind == SectionKind::Cover || a.kind == SectionKind::Appendix {
            continue; // these embed the generation timestamp
        }
        assert_eq!(a, b);
    }
}
