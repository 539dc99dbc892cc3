use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::set_text_content;
use crate::models::Product;
use crate::viewmodels::catalog_viewmodel::summaries;

pub const DATA_OUTPUT_ID: &str = "data-output";

/// JSON (indentado a 2 espacios) con id, nombre y si tiene foto
pub fn format_data_output(products: &[Product], lang: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&summaries(products, lang))
}

pub fn render_data_output(output: &Element, products: &[Product], lang: &str) -> Result<(), JsValue> {
    let text = format_data_output(products, lang)
        .map_err(|e| JsValue::from_str(&format!("Error serializando datos: {}", e)))?;
    set_text_content(output, &text);
    Ok(())
}
