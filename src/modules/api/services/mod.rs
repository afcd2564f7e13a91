pub mod data_source;
pub mod rpc_client;

pub use data_source::DashboardSource;
pub use rpc_client::RpcClient;
