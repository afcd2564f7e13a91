// Report composer tests: date-range validation, section ordering and
// inclusion flags, zero-data guards and period scoping.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use ecodeli_analytics::dashboard::models::DashboardData;
use ecodeli_analytics::dashboard::MockDataGenerator;
use ecodeli_analytics::reports::models::{
    ReportRequest, Section, SectionEntry, SectionKind, SectionOptions,
};
use ecodeli_analytics::reports::ReportComposer;

fn full_dataset(seed: u64) -> DashboardData {
    let mut generator = MockDataGenerator::seeded(seed);
    DashboardData::new(
        generator.generate_merchants(35),
        generator.generate_deliveries(40),
        generator.generate_services(30),
    )
}

fn wide_request() -> ReportRequest {
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
fn test_inverted_date_range_is_rejected() {
    let data = full_dataset(1);
    let mut request = wide_request();
    request.start_date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    request.end_date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let err = ReportComposer::compose(&data, &request).unwrap_err();
    assert!(matches!(
        err,
        ecodeli_analytics::core::AppError::Validation(_)
    ));
}

#[test]
fn test_single_day_range_is_accepted() {
    let data = full_dataset(1);
    let mut request = wide_request();
    let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    request.start_date = day;
    request.end_date = day;

    assert!(ReportComposer::compose(&data, &request).is_ok());
}

#[test]
fn test_full_report_has_eight_sections_in_fixed_order() {
    let data = full_dataset(2);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

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
}

#[test]
fn test_disabled_flags_skip_sections() {
    let data = full_dataset(3);
    let mut request = wide_request();
    request.options = SectionOptions {
        merchants: false,
        deliveries: true,
        services: false,
        analytics: false,
        charts: false,
    };

    let document = ReportComposer::compose(&data, &request).unwrap();
    assert_eq!(
        document.section_kinds(),
        vec![
            SectionKind::Cover,
            SectionKind::Summary,
            SectionKind::Deliveries,
            SectionKind::Appendix,
        ]
    );
}

#[test]
fn test_zero_deliveries_yield_zero_success_rate() {
    let data = DashboardData::new(vec![], vec![], vec![]);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let summary = document.section(SectionKind::Summary).unwrap();
    assert_eq!(metric_value(summary, "Taux de réussite livraisons"), "0.0%");
    assert_eq!(metric_value(summary, "Taux de réussite services"), "0.0%");
    assert_eq!(metric_value(summary, "Note moyenne livraisons"), "0.0/5");
    assert_eq!(metric_value(summary, "Revenus totaux"), "0,00 €");
}

#[test]
fn test_empty_merchant_section_skips_ranking_with_note() {
    let data = DashboardData::new(vec![], vec![], vec![]);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let merchants = document.section(SectionKind::Merchants).unwrap();
    assert_eq!(metric_value(merchants, "Nombre total de commerçants"), "0");
    assert_eq!(
        metric_value(merchants, "Revenus moyens par commerçant"),
        "0,00 €"
    );
    assert!(merchants.entries.iter().any(|e| matches!(
        e,
        SectionEntry::Text { text } if text.contains("Aucune donnée commerçant")
    )));
    assert!(!merchants
        .entries
        .iter()
        .any(|e| matches!(e, SectionEntry::Ranked { .. })));
}

#[test]
fn test_summary_counts_match_dataset() {
    let data = full_dataset(4);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let summary = document.section(SectionKind::Summary).unwrap();
    assert_eq!(metric_value(summary, "Commerçants totaux"), "35");
    assert_eq!(metric_value(summary, "Livraisons totales"), "40");
    assert_eq!(metric_value(summary, "Services totaux"), "30");
}

#[test]
fn test_period_scoping_excludes_out_of_range_deliveries() {
    let mut generator = MockDataGenerator::seeded(5);
    let mut deliveries = generator.generate_deliveries(10);
    for delivery in &mut deliveries {
        delivery.created_date = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
    }
    // Push two deliveries outside the requested period
    deliveries[0].created_date = Utc.with_ymd_and_hms(2019, 1, 1, 8, 0, 0).unwrap();
    deliveries[1].created_date = Utc.with_ymd_and_hms(2031, 1, 1, 8, 0, 0).unwrap();

    let data = DashboardData::new(vec![], deliveries, vec![]);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let section = document.section(SectionKind::Deliveries).unwrap();
    assert_eq!(metric_value(section, "Livraisons totales"), "8");
}

#[test]
fn test_top_merchant_ranking_appears_in_section() {
    let mut generator = MockDataGenerator::seeded(6);
    let mut merchants = generator.generate_merchants(7);
    for (i, merchant) in merchants.iter_mut().enumerate() {
        merchant.total_revenue = dec!(1000) * rust_decimal::Decimal::from(i as u64 + 1);
    }
    let best = merchants.last().unwrap().company_name.clone();

    let data = DashboardData::new(merchants, vec![], vec![]);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let section = document.section(SectionKind::Merchants).unwrap();
    let first_ranked = section
        .entries
        .iter()
        .find_map(|entry| match entry {
            SectionEntry::Ranked { rank, label, .. } if *rank == 1 => Some(label.clone()),
            _ => None,
        })
        .expect("ranking missing");
    assert_eq!(first_ranked, best);

    let ranked_count = section
        .entries
        .iter()
        .filter(|e| matches!(e, SectionEntry::Ranked { .. }))
        .count();
    assert_eq!(ranked_count, 5);
}

#[test]
fn test_charts_section_lists_descriptions_only() {
    let data = full_dataset(7);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let charts = document.section(SectionKind::Charts).unwrap();
    let bullets = charts
        .entries
        .iter()
        .filter(|e| matches!(e, SectionEntry::Bullet { .. }))
        .count();
    assert_eq!(bullets, 5);
}

#[test]
fn test_appendix_carries_generation_metadata() {
    let data = full_dataset(8);
    let document = ReportComposer::compose(&data, &wide_request()).unwrap();

    let appendix = document.section(SectionKind::Appendix).unwrap();
    assert!(appendix.entries.iter().any(|e| matches!(
        e,
        SectionEntry::Text { text } if text.starts_with("Rapport généré le:")
    )));
}
