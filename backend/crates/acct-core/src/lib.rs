pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account_record::AccountRecord;
pub use models::error_kind::ErrorKind;

#[cfg(test)]
mod tests;
