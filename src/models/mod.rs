pub mod product;

pub use product::{is_image_mime, sample_products, Product, ProductSummary};
