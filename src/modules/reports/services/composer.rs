use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::format::{
    format_count, format_currency, format_distance, format_minutes, format_percent, format_rating,
};
use crate::core::{AppError, Currency, Result};
use crate::modules::dashboard::models::labels;
use crate::modules::dashboard::models::{DashboardData, Delivery, Merchant, Service};
use crate::modules::reports::models::{
    ReportDocument, ReportRequest, Section, SectionEntry, SectionKind,
};

/// Number of entries shown in ranked report lists
const RANKED_LIST_LEN: usize = 5;

const CHART_DESCRIPTIONS: &[&str] = &[
    "Évolution des revenus par mois",
    "Répartition des livraisons par type",
    "Services par catégorie",
    "Clients par région",
    "Taux de satisfaction",
];

const METHODOLOGY_NOTES: &[&str] = &[
    "Les données sont extraites en temps réel de la base de données EcoDeli",
    "Les calculs de performance sont basés sur les transactions terminées",
    "Les notes moyennes excluent les transactions non notées",
    "Les revenus incluent tous les frais et commissions",
];

/// Assembles the ordered section list of a report from a dashboard snapshot.
///
/// Cover, executive summary and appendix are always present; the other
/// sections follow the request's inclusion flags in a fixed order. Deliveries
/// and services are scoped to the requested period; merchants are accounts,
/// not period events, and stay unscoped.
pub struct ReportComposer;

impl ReportComposer {
    /// Composes a report document, or rejects the request when the date
    /// range is inverted.
    pub fn compose(data: &DashboardData, request: &ReportRequest) -> Result<ReportDocument> {
        if request.start_date > request.end_date {
            return Err(AppError::validation(format!(
                "start_date ({}) must be before or equal to end_date ({})",
                request.start_date, request.end_date
            )));
        }

        info!(
            report_type = %request.report_type,
            start = %request.start_date,
            end = %request.end_date,
            "Composing report"
        );

        let report_id = Uuid::new_v4();
        let generated_at = Utc::now();
        let deliveries = scope_by_date(&data.deliveries, |d| d.created_date, request);
        let services = scope_by_date(&data.services, |s| s.scheduled_date, request);

        let mut sections = vec![
            Self::cover(request, generated_at),
            Self::summary(data, &deliveries, &services),
        ];

        if request.options.merchants {
            sections.push(Self::merchants(&data.merchants));
        }
        if request.options.deliveries {
            sections.push(Self::deliveries(&deliveries));
        }
        if request.options.services {
            sections.push(Self::services(&services));
        }
        if request.options.analytics {
            sections.push(Self::analytics(data));
        }
        if request.options.charts {
            sections.push(Self::charts());
        }
        sections.push(Self::appendix(report_id, generated_at));

        Ok(ReportDocument {
            report_id,
            title: "EcoDeli Dashboard Analytics".to_string(),
            report_type: request.report_type.clone(),
            period_start: request.start_date,
            period_end: request.end_date,
            generated_at,
            sections,
        })
    }

    fn cover(request: &ReportRequest, generated_at: DateTime<Utc>) -> Section {
        let mut section = Section::new(SectionKind::Cover, "EcoDeli");
        section.push(SectionEntry::text("Dashboard Analytics"));
        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::text(request.report_type.clone()));
        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::text(format!(
            "Période: {} - {}",
            format_date(request.start_date),
            format_date(request.end_date)
        )));
        section.push(SectionEntry::text(format!(
            "Généré le: {}",
            format_date(generated_at.date_naive())
        )));
        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::text(
            "Rapport généré automatiquement par EcoDeli Desktop Analytics",
        ));
        section
    }

    fn summary(data: &DashboardData, deliveries: &[&Delivery], services: &[&Service]) -> Section {
        let mut section = Section::new(SectionKind::Summary, "RÉSUMÉ EXÉCUTIF");

        let merchant_revenue: Decimal = data.merchants.iter().map(|m| m.total_revenue).sum();
        let delivery_revenue: Decimal = deliveries.iter().map(|d| d.price).sum();
        let service_revenue: Decimal = services.iter().map(|s| s.price).sum();
        let total_revenue = merchant_revenue + delivery_revenue + service_revenue;

        section.push(SectionEntry::metric(
            "Commerçants totaux",
            format_count(data.merchants.len() as u64),
        ));
        section.push(SectionEntry::metric(
            "Livraisons totales",
            format_count(deliveries.len() as u64),
        ));
        section.push(SectionEntry::metric(
            "Services totaux",
            format_count(services.len() as u64),
        ));
        section.push(SectionEntry::metric(
            "Revenus totaux",
            format_currency(total_revenue, Currency::EUR),
        ));

        let completed_deliveries = deliveries.iter().filter(|d| d.is_completed()).count();
        let completed_services = services.iter().filter(|s| s.is_completed()).count();

        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::heading("Indicateurs de Performance"));
        section.push(SectionEntry::metric(
            "Taux de réussite livraisons",
            format_percent(success_rate(completed_deliveries, deliveries.len())),
        ));
        section.push(SectionEntry::metric(
            "Taux de réussite services",
            format_percent(success_rate(completed_services, services.len())),
        ));
        section.push(SectionEntry::metric(
            "Note moyenne livraisons",
            format_rating(mean(deliveries.iter().filter_map(|d| d.rating))),
        ));
        section.push(SectionEntry::metric(
            "Note moyenne services",
            format_rating(mean(services.iter().filter_map(|s| s.rating))),
        ));

        section
    }

    fn merchants(merchants: &[Merchant]) -> Section {
        let mut section = Section::new(SectionKind::Merchants, "ANALYSE DES COMMERÇANTS");

        let total = merchants.len();
        let active = merchants.iter().filter(|m| m.active).count();
        let revenue: Decimal = merchants.iter().map(|m| m.total_revenue).sum();
        let average_revenue = if total == 0 {
            Decimal::ZERO
        } else {
            revenue / Decimal::from(total as u64)
        };

        section.push(SectionEntry::metric(
            "Nombre total de commerçants",
            format_count(total as u64),
        ));
        section.push(SectionEntry::metric(
            "Commerçants actifs",
            format_count(active as u64),
        ));
        section.push(SectionEntry::metric(
            "Revenus moyens par commerçant",
            format_currency(average_revenue, Currency::EUR),
        ));

        if merchants.is_empty() {
            warn!("Merchants section enabled but no merchant data is available");
            section.push(SectionEntry::text("Aucune donnée commerçant disponible"));
            return section;
        }

        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::heading("Top 5 Commerçants par Chiffre d'Affaires"));

        let mut ranked: Vec<&Merchant> = merchants.iter().collect();
        ranked.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        for (rank, merchant) in ranked.iter().take(RANKED_LIST_LEN).enumerate() {
            section.push(SectionEntry::ranked(
                rank + 1,
                merchant.company_name.clone(),
                format!(
                    "{} ({} commandes)",
                    format_currency(merchant.total_revenue, Currency::EUR),
                    format_count(merchant.total_orders)
                ),
            ));
        }

        section
    }

    fn deliveries(deliveries: &[&Delivery]) -> Section {
        let mut section = Section::new(SectionKind::Deliveries, "ANALYSE DES LIVRAISONS");

        let total = deliveries.len();
        let completed = deliveries.iter().filter(|d| d.is_completed()).count();
        let revenue: Decimal = deliveries.iter().map(|d| d.price).sum();
        let average_distance = mean(deliveries.iter().map(|d| d.distance_km));

        section.push(SectionEntry::metric("Livraisons totales", format_count(total as u64)));
        section.push(SectionEntry::metric(
            "Livraisons terminées",
            format_count(completed as u64),
        ));
        section.push(SectionEntry::metric(
            "Revenus des livraisons",
            format_currency(revenue, Currency::EUR),
        ));
        section.push(SectionEntry::metric(
            "Distance moyenne",
            format_distance(average_distance),
        ));

        if deliveries.is_empty() {
            warn!("Deliveries section enabled but no delivery falls in the period");
            section.push(SectionEntry::text("Aucune livraison sur la période"));
            return section;
        }

        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::heading("Répartition par Type de Livraison"));
        for (label, count) in
            counts_descending(deliveries.iter().map(|d| labels::delivery_type_name(d.delivery_type)))
        {
            section.push(SectionEntry::text(format!("{}: {}", label, format_count(count))));
        }

        section
    }

    fn services(services: &[&Service]) -> Section {
        let mut section = Section::new(SectionKind::Services, "ANALYSE DES SERVICES");

        let total = services.len();
        let completed = services.iter().filter(|s| s.is_completed()).count();
        let revenue: Decimal = services.iter().map(|s| s.price).sum();
        let average_duration = mean(services.iter().map(|s| s.duration_minutes as f64));

        section.push(SectionEntry::metric("Services totaux", format_count(total as u64)));
        section.push(SectionEntry::metric(
            "Services terminés",
            format_count(completed as u64),
        ));
        section.push(SectionEntry::metric(
            "Revenus des services",
            format_currency(revenue, Currency::EUR),
        ));
        section.push(SectionEntry::metric(
            "Durée moyenne",
            format_minutes(average_duration),
        ));

        if services.is_empty() {
            warn!("Services section enabled but no service falls in the period");
            section.push(SectionEntry::text("Aucun service sur la période"));
            return section;
        }

        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::heading("Répartition par Catégorie de Service"));
        for (label, count) in
            counts_descending(services.iter().map(|s| labels::service_category_name(s.category)))
        {
            section.push(SectionEntry::text(format!("{}: {}", label, format_count(count))));
        }

        section
    }

    fn analytics(data: &DashboardData) -> Section {
        let mut section = Section::new(SectionKind::Analytics, "ANALYTICS AVANCÉS");
        let analytics = &data.analytics;

        if analytics.top_merchants.is_empty() && analytics.top_services.is_empty() {
            warn!("Analytics section enabled but the snapshot has no rankings");
            section.push(SectionEntry::text("Aucune donnée analytique disponible"));
            return section;
        }

        if !analytics.top_merchants.is_empty() {
            section.push(SectionEntry::heading("Top Commerçants"));
            for (rank, merchant) in analytics.top_merchants.iter().enumerate() {
                section.push(SectionEntry::ranked(
                    rank + 1,
                    merchant.company_name.clone(),
                    format_currency(merchant.total_revenue, Currency::EUR),
                ));
            }
            section.push(SectionEntry::Spacer);
        }

        if !analytics.top_services.is_empty() {
            section.push(SectionEntry::heading("Top Services"));
            for (rank, service) in analytics.top_services.iter().enumerate() {
                section.push(SectionEntry::ranked(
                    rank + 1,
                    service.service_name.clone(),
                    format!("{} réservations", format_count(service.total_bookings)),
                ));
            }
        }

        section
    }

    fn charts() -> Section {
        let mut section = Section::new(SectionKind::Charts, "GRAPHIQUES ET VISUALISATIONS");
        section.push(SectionEntry::text(
            "Les graphiques suivants sont disponibles dans l'interface:",
        ));
        for description in CHART_DESCRIPTIONS {
            section.push(SectionEntry::bullet(*description));
        }
        section
    }

    fn appendix(report_id: Uuid, generated_at: DateTime<Utc>) -> Section {
        let mut section = Section::new(SectionKind::Appendix, "ANNEXES");

        section.push(SectionEntry::heading("Méthodologie"));
        for note in METHODOLOGY_NOTES {
            section.push(SectionEntry::bullet(*note));
        }

        section.push(SectionEntry::Spacer);
        section.push(SectionEntry::heading("Informations Techniques"));
        section.push(SectionEntry::text(format!(
            "Rapport généré le: {}",
            generated_at.format("%d/%m/%Y %H:%M:%S")
        )));
        section.push(SectionEntry::text(format!(
            "Identifiant du rapport: {}",
            report_id
        )));
        section.push(SectionEntry::text(
            "Version de l'application: EcoDeli Desktop Analytics v1.0",
        ));
        section.push(SectionEntry::text("Contact: support@ecodeli.com"));

        section
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Keeps entities whose timestamp date falls inside the inclusive period
fn scope_by_date<'a, T>(
    items: &'a [T],
    date_of: impl Fn(&T) -> DateTime<Utc>,
    request: &ReportRequest,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            let date = date_of(item).date_naive();
            date >= request.start_date && date <= request.end_date
        })
        .collect()
}

/// completed/total as a percentage; 0% when the denominator is zero
fn success_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
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

/// Occurrence counts sorted by count descending; labels tied on count keep
/// alphabetical order
fn counts_descending<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(&'a str, u64)> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut pairs: Vec<(&str, u64)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}
