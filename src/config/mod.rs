use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub report: ReportConfig,
    pub generator: GeneratorConfig,
}

/// Backend RPC endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the RPC endpoint, without a trailing procedure name
    pub base_url: String,
    /// API key forwarded unchanged in the `x-api-key` header
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Report output settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory where generated PDF files are written
    pub output_dir: String,
    /// Directory holding the TTF font family used by the PDF renderer
    pub fonts_dir: String,
    /// Minimum records per domain a report must cover; shorter live data is
    /// padded with synthetic records up to this floor
    pub min_records: usize,
    /// Layout hint: charts listed per page in the charts section
    pub graphs_per_page: u32,
    /// Layout hint: minimum page count a full report is expected to reach
    pub min_pages: u32,
}

/// Mock data generator settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Always use generated data, even when the backend is reachable
    pub demo_mode: bool,
    pub merchant_count: usize,
    pub delivery_count: usize,
    pub service_count: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            backend: BackendConfig {
                base_url: env::var("ECODELI_BACKEND_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/api/trpc".to_string()),
                api_key: env::var("ECODELI_API_KEY").unwrap_or_default(),
                timeout_secs: parse_var("ECODELI_TIMEOUT_SECS", 10)?,
            },
            report: ReportConfig {
                output_dir: env::var("ECODELI_OUTPUT_DIR")
                    .unwrap_or_else(|_| "./reports".to_string()),
                fonts_dir: env::var("ECODELI_FONTS_DIR").unwrap_or_else(|_| "./fonts".to_string()),
                min_records: parse_var("ECODELI_MIN_RECORDS", 30)?,
                graphs_per_page: parse_var("ECODELI_GRAPHS_PER_PAGE", 2)?,
                min_pages: parse_var("ECODELI_MIN_PAGES", 5)?,
            },
            generator: GeneratorConfig {
                demo_mode: env::var("ECODELI_DEMO_MODE")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                merchant_count: parse_var("ECODELI_MOCK_MERCHANTS", 35)?,
                delivery_count: parse_var("ECODELI_MOCK_DELIVERIES", 40)?,
                service_count: parse_var("ECODELI_MOCK_SERVICES", 30)?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(AppError::Configuration(
                "Backend URL must not be empty".to_string(),
            ));
        }

        if self.backend.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.report.min_records == 0 {
            return Err(AppError::Configuration(
                "Minimum record floor must be greater than 0".to_string(),
            ));
        }

        if self.report.graphs_per_page == 0 || self.report.min_pages == 0 {
            return Err(AppError::Configuration(
                "Report layout hints must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}
