#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{FailingCollection, create_test_account};
pub use test_db::{create_test_collection, create_test_pool, user_info};
