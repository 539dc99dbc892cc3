// ============================================================================
// APP VIEW - Layout principal
// ============================================================================
// Toolbar + contenedor de productos + bloque de datos.
// La lista y los datos se rellenan después en App::render().
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{append_child, on_change, on_click, ElementBuilder, Listeners};
use crate::state::AppState;
use crate::utils::i18n::{t, LANGUAGES};
use crate::views::data_output::DATA_OUTPUT_ID;
use crate::views::product_list::PRODUCTS_CONTAINER_ID;

#[derive(Clone)]
pub struct ToolbarHandlers {
    pub on_add_samples: Rc<dyn Fn()>,
    pub on_language: Rc<dyn Fn(String)>,
}

/// Renderizar aplicación completa
pub fn render_app(
    state: &AppState,
    handlers: &ToolbarHandlers,
    listeners: &Listeners,
) -> Result<Element, JsValue> {
    let lang = state.language();

    let title = ElementBuilder::new("h1")?.text(&t("titulo", &lang)).build();
    let container = ElementBuilder::new("div")?
        .id(PRODUCTS_CONTAINER_ID)?
        .class("products")
        .build();
    let data_title = ElementBuilder::new("h2")?.text(&t("datos", &lang)).build();
    let output = ElementBuilder::new("pre")?.id(DATA_OUTPUT_ID)?.build();

    let root = ElementBuilder::new("div")?
        .class("catalog")
        .child(&title)?
        .child(&render_toolbar(&lang, handlers, listeners)?)?
        .child(&container)?
        .child(&data_title)?
        .child(&output)?
        .build();

    Ok(root)
}

fn render_toolbar(lang: &str, handlers: &ToolbarHandlers, listeners: &Listeners) -> Result<Element, JsValue> {
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();

    let add_btn = ElementBuilder::new("button")?
        .id("add-samples")?
        .text(&t("agregar_ejemplos", lang))
        .build();
    {
        let on_add = handlers.on_add_samples.clone();
        on_click(&add_btn, listeners, move |_e| on_add())?;
    }
    append_child(&toolbar, &add_btn)?;

    let label = ElementBuilder::new("label")?
        .attr("for", "language-select")?
        .text(&t("idioma", lang))
        .build();
    let select = ElementBuilder::new("select")?.id("language-select")?.build();
    for (code, name) in LANGUAGES {
        let mut option = ElementBuilder::new("option")?.attr("value", code)?.text(name);
        if *code == lang {
            option = option.attr("selected", "selected")?;
        }
        append_child(&select, &option.build())?;
    }
    {
        let on_language = handlers.on_language.clone();
        on_change(&select, listeners, move |e| {
            if let Some(select) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            {
                on_language(select.value());
            }
        })?;
    }
    append_child(&toolbar, &label)?;
    append_child(&toolbar, &select)?;

    Ok(toolbar)
}
