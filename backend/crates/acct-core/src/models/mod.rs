pub mod account_record;
pub mod error_kind;
