// ============================================================================
// PRODUCT CARD VIEW
// ============================================================================
// Todo el texto del usuario (nombre, fecha) va por textContent o atributos.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_text_content, ElementBuilder, Listeners};
use crate::models::Product;
use crate::utils::i18n::t;

/// Acciones de la card, reciben el id del producto
#[derive(Clone)]
pub struct CardHandlers {
    pub on_upload: Rc<dyn Fn(u32)>,
    pub on_remove_photo: Rc<dyn Fn(u32)>,
    pub on_delete: Rc<dyn Fn(u32)>,
}

pub fn preview_id(id: u32) -> String {
    format!("preview-{}", id)
}

pub fn file_input_id(id: u32) -> String {
    format!("file-{}", id)
}

/// Renderizar product card
pub fn render_product_card(
    product: &Product,
    handlers: &CardHandlers,
    listeners: &Listeners,
    lang: &str,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("product").build();

    let title = ElementBuilder::new("h3")?.text(&product.name).build();
    let expiry = ElementBuilder::new("p")?
        .text(&format!("{}: {}", t("caducidad", lang), product.expiry_date))
        .build();
    append_child(&card, &title)?;
    append_child(&card, &expiry)?;

    // Sin clave no hay acciones posibles
    let Some(id) = product.id else {
        return Ok(card);
    };

    // Preview
    let preview = ElementBuilder::new("div")?
        .class("image-preview")
        .id(&preview_id(id))?
        .build();
    match product.image.as_deref().filter(|_| product.has_image()) {
        Some(src) => {
            let img = ElementBuilder::new("img")?
                .attr("src", src)?
                .attr("alt", &product.name)?
                .build();
            append_child(&preview, &img)?;
        }
        None => set_text_content(&preview, &t("sin_foto", lang)),
    }
    append_child(&card, &preview)?;

    // Input oculto usado por "subir foto"
    let file_input = ElementBuilder::new("input")?
        .id(&file_input_id(id))?
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .attr("style", "display: none;")?
        .build();
    append_child(&card, &file_input)?;

    let upload_btn = ElementBuilder::new("button")?
        .class("btn-upload")
        .text(&t("subir_foto", lang))
        .build();
    {
        let on_upload = handlers.on_upload.clone();
        on_click(&upload_btn, listeners, move |_e| on_upload(id))?;
    }
    append_child(&card, &upload_btn)?;

    if product.has_image() {
        let remove_btn = ElementBuilder::new("button")?
            .class("btn-remove-photo")
            .text(&t("eliminar_foto", lang))
            .build();
        let on_remove = handlers.on_remove_photo.clone();
        on_click(&remove_btn, listeners, move |_e| on_remove(id))?;
        append_child(&card, &remove_btn)?;
    }

    let delete_btn = ElementBuilder::new("button")?
        .class("btn-delete")
        .attr("style", "margin-top: 10px;")?
        .text(&t("eliminar_producto", lang))
        .build();
    {
        let on_delete = handlers.on_delete.clone();
        on_click(&delete_btn, listeners, move |e| {
            e.stop_propagation();
            on_delete(id);
        })?;
    }
    append_child(&card, &delete_btn)?;

    Ok(card)
}
