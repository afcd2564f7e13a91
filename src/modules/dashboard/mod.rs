// Dashboard module: domain records, aggregation and the refresh pipeline

pub mod models;
pub mod services;

pub use models::{Analytics, DashboardData, Delivery, Invoice, Merchant, Service};
pub use services::{Aggregator, DashboardService, MockDataGenerator};
