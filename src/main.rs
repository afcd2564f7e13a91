use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecodeli_analytics::config::Config;
use ecodeli_analytics::modules::api::RpcClient;
use ecodeli_analytics::modules::dashboard::DashboardService;
use ecodeli_analytics::modules::reports::models::{ReportRequest, SectionOptions};
use ecodeli_analytics::modules::reports::services::{render_text, Paginator, ReportComposer};
use ecodeli_analytics::modules::reports::PdfRenderer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecodeli_analytics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting EcoDeli Desktop Analytics");
    tracing::info!("Backend: {}", config.backend.base_url);

    let rpc = RpcClient::new(&config.backend).expect("Failed to build RPC client");
    let service = DashboardService::new(rpc, config.report.clone(), config.generator.clone());

    // Refresh the dashboard; falls back to generated data when the backend
    // is unreachable
    let data = service.refresh().await;
    tracing::info!(
        merchants = data.total_merchants(),
        deliveries = data.total_deliveries(),
        services = data.total_services(),
        "Dashboard snapshot ready"
    );

    // Compose a full report over the trailing 30 days
    let today = Utc::now().date_naive();
    let request = ReportRequest {
        report_type: "Rapport complet".to_string(),
        start_date: today - Duration::days(30),
        end_date: today,
        options: SectionOptions::default(),
    };

    let document = match ReportComposer::compose(&data, &request) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(error = %err, "Report composition failed");
            std::process::exit(1);
        }
    };

    let paginator = Paginator::new();
    let pages = paginator.paginate(&document);
    tracing::info!(
        sections = document.sections.len(),
        pages = pages.len(),
        "Report composed"
    );
    tracing::debug!("Report preview:\n{}", render_text(&pages));

    let output_path = std::path::Path::new(&config.report.output_dir)
        .join(format!("report_{}.pdf", today.format("%Y-%m-%d")));

    match PdfRenderer::new(&config.report).render_to_file(&document, &pages, &output_path) {
        Ok(()) => tracing::info!("Report available at {}", output_path.display()),
        Err(err) => {
            tracing::error!(error = %err, "PDF rendering failed");
            std::process::exit(1);
        }
    }
}
