pub mod catalog_viewmodel;

pub use catalog_viewmodel::CatalogViewModel;
