// Backend RPC transport

pub mod services;

pub use services::{DashboardSource, RpcClient};
