pub mod collection;
pub mod connection;
pub mod error;
pub mod repositories;

pub use collection::collection_name::CollectionName;
pub use collection::document_collection::DocumentCollection;
pub use collection::sqlite_collection::SqliteCollection;
pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
