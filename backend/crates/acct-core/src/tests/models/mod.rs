mod account_record;
mod error_kind;
