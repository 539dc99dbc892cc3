//! Tests en navegador: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use product_catalog_pwa::config::DbConfig;
use product_catalog_pwa::dom::{create_element, on_dom_ready, Listeners};
use product_catalog_pwa::models::{sample_products, Product};
use product_catalog_pwa::services::indexeddb::{DATE_INDEX, NAME_INDEX};
use product_catalog_pwa::services::{IndexedDbService, ProductStore};
use product_catalog_pwa::state::AppState;
use product_catalog_pwa::utils::storage::load_string_pref;
use product_catalog_pwa::viewmodels::CatalogViewModel;
use product_catalog_pwa::views::data_output::format_data_output;
use product_catalog_pwa::views::{
    render_app, render_product_card, render_product_list, CardHandlers, ToolbarHandlers,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Base nueva por test para no compartir claves
fn fresh_config(tag: &str) -> DbConfig {
    DbConfig {
        name: format!("Products-test-{}-{}", tag, js_sys::Date::now() as u64),
        ..DbConfig::default()
    }
}

#[wasm_bindgen_test]
async fn open_creates_store_and_both_indexes() {
    let db = IndexedDbService::open(&fresh_config("schema")).await.unwrap();
    assert_eq!(db.store_name(), "products");

    let mut indexes = db.index_names().unwrap();
    indexes.sort();
    assert_eq!(indexes, vec![DATE_INDEX.to_string(), NAME_INDEX.to_string()]);
    db.close();
}

#[wasm_bindgen_test]
async fn reopening_keeps_existing_records() {
    let config = fresh_config("reopen");
    let db = IndexedDbService::open(&config).await.unwrap();
    db.add(&Product::new("Молоко", "2025-12-25")).await.unwrap();
    db.close();

    let db = IndexedDbService::open(&config).await.unwrap();
    assert_eq!(db.get_all().await.unwrap().len(), 1);
    db.close();
}

#[wasm_bindgen_test]
async fn crud_by_key() {
    let db = IndexedDbService::open(&fresh_config("crud")).await.unwrap();

    let first = db.add(&Product::new("Молоко", "2025-12-25")).await.unwrap();
    let second = db.add(&Product::new("Йогурт", "2025-12-15")).await.unwrap();
    assert!(second > first);

    let mut milk = db.get(first).await.unwrap().unwrap();
    assert_eq!(milk.id, Some(first));
    assert_eq!(milk.image, None);

    milk.image = Some("data:image/png;base64,AA==".to_string());
    db.put(&milk).await.unwrap();
    assert!(db.get(first).await.unwrap().unwrap().has_image());

    db.delete(first).await.unwrap();
    db.delete(first).await.unwrap();
    assert!(db.get(first).await.unwrap().is_none());

    let remaining = db.get_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Йогурт");
    db.close();
}

#[wasm_bindgen_test]
async fn viewmodel_flow_over_indexeddb() {
    let db = IndexedDbService::open(&fresh_config("vm")).await.unwrap();
    let vm = CatalogViewModel::new(db);

    let ids = vm.add_sample_products().await.unwrap();
    assert_eq!(ids.len(), sample_products().len());

    assert!(vm.attach_photo(ids[0], "data:image/png;base64,AA==".to_string()).await.unwrap());
    let products = vm.load_products().await.unwrap();
    let output = format_data_output(&products, "RU").unwrap();
    assert!(output.contains("\"hasImage\": \"Да\""));
    assert!(output.contains("\"hasImage\": \"Нет\""));

    assert!(vm.remove_photo(ids[0]).await.unwrap());
    vm.delete_product(ids[1]).await.unwrap();
    let products = vm.load_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert!(!products[0].has_image());
    vm.store().close();
}

// ----------------------------------------------------------------------------
// Vistas
// ----------------------------------------------------------------------------

fn noop_handlers() -> CardHandlers {
    CardHandlers {
        on_upload: Rc::new(|_id: u32| {}),
        on_remove_photo: Rc::new(|_id: u32| {}),
        on_delete: Rc::new(|_id: u32| {}),
    }
}

fn stored(id: u32, name: &str, image: Option<&str>) -> Product {
    Product {
        id: Some(id),
        image: image.map(str::to_string),
        ..Product::new(name, "2025-12-25")
    }
}

fn find(card: &Element, selector: &str) -> Option<Element> {
    card.query_selector(selector).unwrap()
}

fn text_of(card: &Element, selector: &str) -> String {
    find(card, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn card_renders_name_as_text_not_markup() {
    let listeners = Listeners::new();
    let card = render_product_card(&stored(7, "<b>x</b>", None), &noop_handlers(), &listeners, "RU").unwrap();

    assert_eq!(card.class_name(), "product");
    assert_eq!(text_of(&card, "h3"), "<b>x</b>");
    assert!(find(&card, "b").is_none());
    assert_eq!(text_of(&card, "p"), "Срок: 2025-12-25");
}

#[wasm_bindgen_test]
fn card_without_photo_shows_placeholder_and_no_remove_button() {
    let listeners = Listeners::new();
    let card = render_product_card(&stored(7, "Молоко", None), &noop_handlers(), &listeners, "RU").unwrap();

    let preview = find(&card, "#preview-7").unwrap();
    assert_eq!(preview.class_name(), "image-preview");
    assert_eq!(preview.text_content().unwrap(), "Нет фото");
    assert!(find(&preview, "img").is_none());

    let input = find(&card, "#file-7").unwrap();
    assert_eq!(input.tag_name(), "INPUT");
    assert_eq!(input.get_attribute("type").as_deref(), Some("file"));
    assert_eq!(input.get_attribute("accept").as_deref(), Some("image/*"));

    assert!(find(&card, ".btn-upload").is_some());
    assert!(find(&card, ".btn-remove-photo").is_none());
    assert!(find(&card, ".btn-delete").is_some());
    // upload + delete
    assert_eq!(listeners.len(), 2);
}

#[wasm_bindgen_test]
fn card_with_photo_shows_image_and_remove_button() {
    let src = "data:image/png;base64,AA==";
    let removed = Rc::new(Cell::new(None));
    let seen = removed.clone();
    let handlers = CardHandlers {
        on_remove_photo: Rc::new(move |id: u32| seen.set(Some(id))),
        ..noop_handlers()
    };
    let listeners = Listeners::new();
    let card = render_product_card(&stored(3, "Йогурт", Some(src)), &handlers, &listeners, "RU").unwrap();

    let img = find(&card, "#preview-3 img").unwrap();
    assert_eq!(img.get_attribute("src").as_deref(), Some(src));
    assert_eq!(img.get_attribute("alt").as_deref(), Some("Йогурт"));
    assert_eq!(listeners.len(), 3);

    let remove: HtmlElement = find(&card, ".btn-remove-photo").unwrap().unchecked_into();
    remove.click();
    assert_eq!(removed.get(), Some(3));
}

#[wasm_bindgen_test]
fn empty_list_renders_placeholder() {
    let container = create_element("div").unwrap();
    let listeners = Listeners::new();
    render_product_list(&container, &[], &noop_handlers(), &listeners, "RU").unwrap();

    assert_eq!(text_of(&container, "p.empty"), "Нет продуктов");
    assert!(find(&container, ".product").is_none());
    assert!(listeners.is_empty());
}

#[wasm_bindgen_test]
fn rerendering_list_releases_previous_listeners() {
    let container = create_element("div").unwrap();
    let listeners = Listeners::new();
    let products = vec![stored(1, "Молоко", None), stored(2, "Йогурт", Some("data:image/gif;base64,R0lG"))];

    render_product_list(&container, &products, &noop_handlers(), &listeners, "RU").unwrap();
    assert_eq!(container.query_selector_all(".product").unwrap().length(), 2);
    assert_eq!(listeners.len(), 5);

    listeners.clear();
    render_product_list(&container, &products[..1], &noop_handlers(), &listeners, "RU").unwrap();
    assert_eq!(container.query_selector_all(".product").unwrap().length(), 1);
    assert_eq!(listeners.len(), 2);
}

#[wasm_bindgen_test]
fn layout_has_toolbar_list_and_data_output() {
    let state = AppState::with_language("RU".to_string());
    let handlers = ToolbarHandlers {
        on_add_samples: Rc::new(|| {}),
        on_language: Rc::new(|_lang: String| {}),
    };
    let listeners = Listeners::new();
    let root = render_app(&state, &handlers, &listeners).unwrap();

    assert_eq!(text_of(&root, "h1"), "Продукты");
    assert_eq!(text_of(&root, "#add-samples"), "Добавить тестовые продукты");
    assert!(find(&root, "#language-select option[value=RU][selected]").is_some());
    assert!(find(&root, "div#products-container").is_some());
    assert_eq!(find(&root, "#data-output").unwrap().tag_name(), "PRE");
    // add-samples + language select
    assert_eq!(listeners.len(), 2);
}

#[wasm_bindgen_test]
fn dom_ready_runs_immediately_after_load() {
    let ran = Rc::new(Cell::new(false));
    let flag = ran.clone();
    on_dom_ready(move || flag.set(true)).unwrap();
    assert!(ran.get());
}

// ----------------------------------------------------------------------------
// Idioma
// ----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn set_language_before_boot_is_ignored() {
    // Sin App no hay nada que re-renderizar; solo se registra el aviso
    product_catalog_pwa::set_language("ES".to_string());
}

#[wasm_bindgen_test]
fn language_change_is_saved_and_notifies() {
    let state = AppState::with_language("RU".to_string());
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    state.subscribe_to_changes(move || counter.set(counter.get() + 1));

    state.set_language(" es ");
    assert_eq!(state.language(), "ES");
    assert_eq!(load_string_pref("language").as_deref(), Some("ES"));
    assert_eq!(calls.get(), 1);

    state.set_language("RU");
}
