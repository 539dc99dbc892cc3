pub mod app;
pub mod product_card;
pub mod product_list;
pub mod data_output;

pub use app::{render_app, ToolbarHandlers};
pub use product_card::{render_product_card, CardHandlers};
pub use product_list::{render_product_list, PRODUCTS_CONTAINER_ID};
pub use data_output::{render_data_output, DATA_OUTPUT_ID};
