// ============================================================================
// PRODUCT CATALOG - FRONTEND MVVM (RUST PURO + INDEXEDDB)
// ============================================================================
// - Views: funciones que construyen DOM (sin lógica)
// - ViewModels: lógica del catálogo sobre un ProductStore
// - Services: IndexedDB y FileReader
// - State: State Management con Rc<RefCell>
// - Models: registros del object store
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_dom_ready;
use crate::error::CatalogError;

// Instancia global de App (la crea boot() cuando la base está abierta)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Product Catalog - Rust Puro + IndexedDB");

    on_dom_ready(|| spawn_local(boot()))
}

/// Abrir base de datos y mostrar productos
async fn boot() {
    match App::start().await {
        Ok(app) => {
            APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));
            app.refresh().await;
            log::info!("✅ [APP] Catálogo listo");
        }
        Err(e) => log::error!("❌ [APP] No se pudo iniciar el catálogo: {}", e),
    }
}

fn with_app<F: FnOnce(&App)>(f: F) {
    let app = APP.with(|cell| cell.borrow().clone());
    match app {
        Some(app) => f(&app),
        None => log::warn!("⚠️ [APP] {}", CatalogError::DatabaseNotOpen),
    }
}

// Funciones llamables desde JavaScript (onclick en HTML escrito a mano)

#[wasm_bindgen]
pub fn upload_photo(product_id: u32) {
    with_app(|app| app.upload_photo(product_id));
}

#[wasm_bindgen]
pub fn remove_photo(product_id: u32) {
    with_app(|app| app.remove_photo(product_id));
}

#[wasm_bindgen]
pub fn delete_product_from_db(product_id: u32) {
    with_app(|app| app.delete_product(product_id));
}

#[wasm_bindgen]
pub fn add_sample_products() {
    with_app(|app| app.add_sample_products());
}

/// Cambia el idioma (RU, ES, EN); se guarda en localStorage y re-renderiza
#[wasm_bindgen]
pub fn set_language(lang: String) {
    with_app(|app| app.set_language(&lang));
}

/// Re-render completo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app() {
    with_app(|app| {
        if let Err(e) = app.render() {
            log::error!("❌ [APP] Error re-renderizando: {:?}", e);
        }
    });
}
