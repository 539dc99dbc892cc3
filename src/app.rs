// ============================================================================
// APP - Controlador: conecta estado, viewmodel y vistas
// ============================================================================
// Cada acción se ejecuta con spawn_local y termina en refresh(): se vuelve a
// leer el store completo y el subscriber re-renderiza toda la app.
// Los closures de cada render viven en `listeners` hasta el render siguiente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{
    append_child, clear_children, create_image_file_input, get_element_by_id, require_element, Listeners,
};
use crate::error::{CatalogError, Result};
use crate::models::is_image_mime;
use crate::services::{read_as_data_url, IndexedDbService, ProductStore};
use crate::state::AppState;
use crate::utils::dialogs::{alert, confirm};
use crate::utils::i18n::t;
use crate::viewmodels::CatalogViewModel;
use crate::views::product_card::file_input_id;
use crate::views::{
    render_app, render_data_output, render_product_list, CardHandlers, ToolbarHandlers,
    DATA_OUTPUT_ID, PRODUCTS_CONTAINER_ID,
};

pub type Catalog = CatalogViewModel<IndexedDbService>;

/// Aplicación principal
#[derive(Clone)]
pub struct App {
    state: AppState,
    catalog: Catalog,
    root: Element,
    listeners: Listeners,
    // onchange del selector de fotos; el siguiente upload lo reemplaza
    upload_listener: Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>>,
}

impl App {
    /// Abre la base, monta el layout y se suscribe a cambios de estado
    pub async fn start() -> Result<Self> {
        let root = require_element(&CONFIG.ui.root_id).map_err(|e| CatalogError::dom(&e))?;
        let state = AppState::new();

        let store = IndexedDbService::open(&CONFIG.db).await?;
        state.set_db_ready(true);

        let app = Self {
            state,
            catalog: CatalogViewModel::new(store),
            root,
            listeners: Listeners::new(),
            upload_listener: Rc::new(RefCell::new(None)),
        };

        // Batchear varios cambios seguidos en un solo render
        let app_for_render = app.clone();
        app.state.subscribe_to_changes(move || {
            let app = app_for_render.clone();
            Timeout::new(0, move || {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                }
            })
            .forget();
        });

        app.render().map_err(|e| CatalogError::dom(&e))?;
        Ok(app)
    }

    /// Re-render completo con el estado actual
    pub fn render(&self) -> std::result::Result<(), JsValue> {
        let lang = self.state.language();
        let products = self.state.products();

        clear_children(&self.root);
        self.listeners.clear();
        let view = render_app(&self.state, &self.toolbar_handlers(), &self.listeners)?;
        append_child(&self.root, &view)?;

        let container = require_element(PRODUCTS_CONTAINER_ID)?;
        render_product_list(&container, &products, &self.card_handlers(), &self.listeners, &lang)?;

        let output = require_element(DATA_OUTPUT_ID)?;
        render_data_output(&output, &products, &lang)?;

        log::debug!("[APP] Render completo: {} productos", products.len());
        Ok(())
    }

    /// Vuelve a leer todos los productos; el subscriber re-renderiza
    pub async fn refresh(&self) {
        match self.catalog.load_products().await {
            Ok(products) => self.state.set_products(products),
            Err(e) => {
                log::error!("❌ [APP] Error mostrando productos: {}", e);
                self.state.set_error(e.to_string());
            }
        }
    }

    pub fn upload_photo(&self, id: u32) {
        let app = self.clone();
        spawn_local(async move {
            if let Err(e) = app.pick_photo(id).await {
                log::error!("❌ [APP] Error subiendo foto: {}", e);
            }
        });
    }

    pub fn remove_photo(&self, id: u32) {
        let app = self.clone();
        spawn_local(async move {
            match app.catalog.remove_photo(id).await {
                Ok(true) => app.refresh().await,
                Ok(false) => {}
                Err(e) => log::error!("❌ [APP] Error eliminando foto: {}", e),
            }
        });
    }

    /// Pide confirmación antes de borrar
    pub fn delete_product(&self, id: u32) {
        if !confirm(&t("confirmar_eliminar", &self.state.language())) {
            return;
        }

        let app = self.clone();
        spawn_local(async move {
            match app.catalog.delete_product(id).await {
                Ok(()) => app.refresh().await,
                Err(e) => log::error!("❌ [APP] Error eliminando producto: {}", e),
            }
        });
    }

    pub fn add_sample_products(&self) {
        let app = self.clone();
        spawn_local(async move {
            if let Err(e) = app.catalog.add_sample_products().await {
                log::error!("❌ [APP] Error agregando productos de prueba: {}", e);
            }
            // Lo agregado antes del error también se muestra
            app.refresh().await;
        });
    }

    pub fn set_language(&self, lang: &str) {
        log::info!("🌐 [APP] Idioma: {}", lang);
        self.state.set_language(lang);
    }

    /// Abre el selector de ficheros para el producto `id`
    async fn pick_photo(&self, id: u32) -> Result<()> {
        if self.catalog.store().get(id).await?.is_none() {
            log::warn!("⚠️ [APP] Producto {} no encontrado", id);
            return Ok(());
        }

        let input = self.file_input(id)?;
        // Permite elegir el mismo fichero dos veces seguidas
        input.set_value("");

        let app = self.clone();
        let change_input = input.clone();
        let on_change = Closure::wrap(Box::new(move |_e: Event| {
            let Some(file) = change_input.files().and_then(|files| files.get(0)) else {
                return;
            };

            if !is_image_mime(&file.type_()) {
                alert(&t("elegir_imagen", &app.state.language()));
                return;
            }

            let app = app.clone();
            spawn_local(async move {
                let saved = match read_as_data_url(&file).await {
                    Ok(data_url) => app.catalog.attach_photo(id, data_url).await,
                    Err(e) => Err(e),
                };
                match saved {
                    Ok(true) => app.refresh().await,
                    Ok(false) => {}
                    Err(e) => log::error!("❌ [APP] Error guardando foto: {}", e),
                }
            });
        }) as Box<dyn FnMut(Event)>);
        input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        // Suelta el handler del upload anterior (cancelado o ya usado)
        *self.upload_listener.borrow_mut() = Some(on_change);
        input.click();
        Ok(())
    }

    /// Input oculto de la card; si no está en el DOM se crea uno suelto
    fn file_input(&self, id: u32) -> Result<HtmlInputElement> {
        if let Some(input) = get_element_by_id(&file_input_id(id))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            return Ok(input);
        }
        create_image_file_input().map_err(|e| CatalogError::dom(&e))
    }

    fn card_handlers(&self) -> CardHandlers {
        let upload_app = self.clone();
        let remove_app = self.clone();
        let delete_app = self.clone();
        CardHandlers {
            on_upload: Rc::new(move |id: u32| upload_app.upload_photo(id)),
            on_remove_photo: Rc::new(move |id: u32| remove_app.remove_photo(id)),
            on_delete: Rc::new(move |id: u32| delete_app.delete_product(id)),
        }
    }

    fn toolbar_handlers(&self) -> ToolbarHandlers {
        let samples_app = self.clone();
        let language_app = self.clone();
        ToolbarHandlers {
            on_add_samples: Rc::new(move || samples_app.add_sample_products()),
            on_language: Rc::new(move |lang: String| language_app.set_language(&lang)),
        }
    }
}
