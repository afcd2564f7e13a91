pub mod currency;
pub mod error;
pub mod format;

pub use currency::Currency;
pub use error::{AppError, Result};
