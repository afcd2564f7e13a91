pub mod aggregator;
pub mod dashboard_service;
pub mod mock_generator;

pub use aggregator::Aggregator;
pub use dashboard_service::DashboardService;
pub use mock_generator::{MockDataGenerator, PaddingStrategy, TopUpWithSynthetic};
