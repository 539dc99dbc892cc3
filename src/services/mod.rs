pub mod product_store;
pub mod indexeddb;
pub mod file_reader;

pub use product_store::ProductStore;
pub use indexeddb::IndexedDbService;
pub use file_reader::read_as_data_url;
