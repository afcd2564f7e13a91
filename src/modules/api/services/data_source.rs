use async_trait::async_trait;

use super::rpc_client::RpcClient;
use crate::core::Result;
use crate::modules::dashboard::models::{Delivery, Merchant, Service};

/// Source of the three dashboard entity collections.
///
/// The production implementation is [`RpcClient`]; tests substitute fakes to
/// exercise the fallback path without a network.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn fetch_merchants(&self) -> Result<Vec<Merchant>>;
    async fn fetch_deliveries(&self) -> Result<Vec<Delivery>>;
    async fn fetch_services(&self) -> Result<Vec<Service>>;
}

#[async_trait]
impl DashboardSource for RpcClient {
    async fn fetch_merchants(&self) -> Result<Vec<Merchant>> {
        RpcClient::fetch_merchants(self).await
    }

    async fn fetch_deliveries(&self) -> Result<Vec<Delivery>> {
        RpcClient::fetch_deliveries(self).await
    }

    async fn fetch_services(&self) -> Result<Vec<Service>> {
        RpcClient::fetch_services(self).await
    }
}
