pub mod collection_name;
pub mod document_collection;
pub mod sqlite_collection;
