use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, ElementBuilder, Listeners};
use crate::models::Product;
use crate::utils::i18n::t;
use crate::views::product_card::{render_product_card, CardHandlers};

pub const PRODUCTS_CONTAINER_ID: &str = "products-container";

/// Vacía el contenedor y agrega una card por producto (orden del store)
pub fn render_product_list(
    container: &Element,
    products: &[Product],
    handlers: &CardHandlers,
    listeners: &Listeners,
    lang: &str,
) -> Result<(), JsValue> {
    clear_children(container);

    if products.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty")
            .text(&t("lista_vacia", lang))
            .build();
        return append_child(container, &empty);
    }

    for product in products {
        let card = render_product_card(product, handlers, listeners, lang)?;
        append_child(container, &card)?;
    }
    Ok(())
}
