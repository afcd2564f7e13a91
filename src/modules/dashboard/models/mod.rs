pub mod dashboard_data;
pub mod delivery;
pub mod invoice;
pub mod labels;
pub mod merchant;
pub mod service;

pub use dashboard_data::{Analytics, DashboardData, TopMerchant, TopService};
pub use delivery::{delivery_price, Delivery, DeliveryStatus, DeliveryType, PackageSize, Priority};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use merchant::Merchant;
pub use service::{Service, ServiceCategory, ServiceStatus, ServiceType};
