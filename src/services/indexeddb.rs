// ============================================================================
// INDEXEDDB SERVICE - Object store de productos sobre web-sys
// ============================================================================
// Cada request de IndexedDB (callbacks onsuccess/onerror) se convierte en un
// future resuelto por un canal oneshot. Una transacción por operación.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures_channel::oneshot;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, IdbDatabase, IdbIndexParameters, IdbObjectStore, IdbObjectStoreParameters, IdbRequest,
    IdbTransactionMode, IdbVersionChangeEvent,
};

use crate::config::DbConfig;
use crate::error::{describe_js, CatalogError, Result};
use crate::models::Product;
use crate::services::ProductStore;

pub const KEY_PATH: &str = "id";
pub const NAME_INDEX: &str = "name_idx";
pub const DATE_INDEX: &str = "date_idx";

/// Conexión abierta a la base de productos
#[derive(Clone, Debug)]
pub struct IndexedDbService {
    db: IdbDatabase,
    store_name: String,
}

impl IndexedDbService {
    /// Abrir (o crear) la base. El store y sus índices se crean solo si no existen.
    pub async fn open(config: &DbConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(CatalogError::NoWindow)?;
        let factory = window
            .indexed_db()
            .map_err(|_| CatalogError::IndexedDbUnavailable)?
            .ok_or(CatalogError::IndexedDbUnavailable)?;

        let open_request = factory
            .open_with_u32(&config.name, config.version)
            .map_err(|e| CatalogError::Open(describe_js(&e)))?;

        let upgrade_request = open_request.clone();
        let store_name = config.store_name.clone();
        let on_upgrade = Closure::wrap(Box::new(move |_event: IdbVersionChangeEvent| {
            let db = match upgrade_request
                .result()
                .and_then(|value| value.dyn_into::<IdbDatabase>())
            {
                Ok(db) => db,
                Err(e) => {
                    log::error!("❌ [DB] upgradeneeded sin base de datos: {}", describe_js(&e));
                    return;
                }
            };

            match ensure_schema(&db, &store_name) {
                Ok(true) => log::info!("🗄️ [DB] Store '{}' creado", store_name),
                Ok(false) => log::debug!("[DB] Store '{}' ya existe", store_name),
                Err(e) => log::error!("❌ [DB] Error creando store: {}", describe_js(&e)),
            }
        }) as Box<dyn FnMut(IdbVersionChangeEvent)>);
        open_request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

        let opened = await_request(&open_request, "open").await;
        open_request.set_onupgradeneeded(None);
        drop(on_upgrade);

        let db = match opened {
            Ok(value) => value
                .dyn_into::<IdbDatabase>()
                .map_err(|e| CatalogError::Open(describe_js(&e)))?,
            Err(e) => {
                log::error!("❌ [DB] Error abriendo la base '{}': {}", config.name, e);
                return Err(CatalogError::Open(e.to_string()));
            }
        };

        log::info!("✅ [DB] Base de datos '{}' v{} abierta", config.name, config.version);
        Ok(Self {
            db,
            store_name: config.store_name.clone(),
        })
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Índices declarados en el store
    pub fn index_names(&self) -> Result<Vec<String>> {
        let store = self.object_store(IdbTransactionMode::Readonly)?;
        let names = store.index_names();
        Ok((0..names.length()).filter_map(|i| names.item(i)).collect())
    }

    pub fn close(&self) {
        self.db.close();
    }

    fn object_store(&self, mode: IdbTransactionMode) -> Result<IdbObjectStore> {
        let transaction = self
            .db
            .transaction_with_str_and_mode(&self.store_name, mode)
            .map_err(|e| CatalogError::request("transaction", &e))?;
        transaction
            .object_store(&self.store_name)
            .map_err(|e| CatalogError::request("object_store", &e))
    }
}

#[async_trait(?Send)]
impl ProductStore for IndexedDbService {
    async fn add(&self, product: &Product) -> Result<u32> {
        let value = to_js(product)?;
        let store = self.object_store(IdbTransactionMode::Readwrite)?;
        let request = store.add(&value).map_err(|e| CatalogError::request("add", &e))?;

        let key = await_request(&request, "add").await.inspect_err(|e| {
            log::error!("❌ [DB] Error agregando producto: {}", e);
        })?;
        let id = key
            .as_f64()
            .ok_or_else(|| CatalogError::Serialization(format!("clave no numérica: {:?}", key)))
            .and_then(key_to_id)?;

        log::info!("➕ [DB] Producto agregado, id: {}", id);
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let store = self.object_store(IdbTransactionMode::Readonly)?;
        let request = store.get_all().map_err(|e| CatalogError::request("get_all", &e))?;

        let value = await_request(&request, "get_all").await.inspect_err(|e| {
            log::error!("❌ [DB] Error obteniendo productos: {}", e);
        })?;
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    async fn get(&self, id: u32) -> Result<Option<Product>> {
        let store = self.object_store(IdbTransactionMode::Readonly)?;
        let request = store
            .get(&JsValue::from(id))
            .map_err(|e| CatalogError::request("get", &e))?;

        let value = await_request(&request, "get").await.inspect_err(|e| {
            log::error!("❌ [DB] Error obteniendo producto {}: {}", id, e);
        })?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_wasm_bindgen::from_value(value)?))
    }

    async fn put(&self, product: &Product) -> Result<()> {
        let value = to_js(product)?;
        let store = self.object_store(IdbTransactionMode::Readwrite)?;
        let request = store.put(&value).map_err(|e| CatalogError::request("put", &e))?;

        await_request(&request, "put").await.inspect_err(|e| {
            log::error!("❌ [DB] Error actualizando producto: {}", e);
        })?;
        log::info!("✏️ [DB] Producto actualizado");
        Ok(())
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let store = self.object_store(IdbTransactionMode::Readwrite)?;
        let request = store
            .delete(&JsValue::from(id))
            .map_err(|e| CatalogError::request("delete", &e))?;

        await_request(&request, "delete").await.inspect_err(|e| {
            log::error!("❌ [DB] Error eliminando producto {}: {}", id, e);
        })?;
        log::info!("🗑️ [DB] Producto {} eliminado", id);
        Ok(())
    }
}

/// Crea el store (keyPath `id`, autoIncrement) y los índices no únicos.
/// Devuelve false si el store ya existía.
fn ensure_schema(db: &IdbDatabase, store_name: &str) -> std::result::Result<bool, JsValue> {
    if db.object_store_names().contains(store_name) {
        return Ok(false);
    }

    let params = IdbObjectStoreParameters::new();
    params.set_key_path(&JsValue::from_str(KEY_PATH));
    params.set_auto_increment(true);
    let store = db.create_object_store_with_optional_parameters(store_name, &params)?;

    let index_params = IdbIndexParameters::new();
    index_params.set_unique(false);
    store.create_index_with_str_and_optional_parameters(NAME_INDEX, "name", &index_params)?;
    store.create_index_with_str_and_optional_parameters(DATE_INDEX, "expiryDate", &index_params)?;

    Ok(true)
}

/// Esperar el resultado de un IdbRequest
async fn await_request(request: &IdbRequest, op: &'static str) -> Result<JsValue> {
    let (tx, rx) = oneshot::channel::<Result<JsValue>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let success_tx = tx.clone();
    let success_request = request.clone();
    let on_success = Closure::wrap(Box::new(move |_event: Event| {
        let result = success_request
            .result()
            .map_err(|e| CatalogError::request(op, &e));
        if let Some(sender) = success_tx.borrow_mut().take() {
            let _ = sender.send(result);
        }
    }) as Box<dyn FnMut(Event)>);

    let error_request = request.clone();
    let on_error = Closure::wrap(Box::new(move |event: Event| {
        // Evita que el error aborte la transacción al burbujear
        event.prevent_default();
        let message = match error_request.error() {
            Ok(Some(exception)) => format!("{}: {}", exception.name(), exception.message()),
            Ok(None) => "error desconocido".to_string(),
            Err(e) => describe_js(&e),
        };
        if let Some(sender) = tx.borrow_mut().take() {
            let _ = sender.send(Err(CatalogError::Request {
                op: op.to_string(),
                message,
            }));
        }
    }) as Box<dyn FnMut(Event)>);

    request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
    request.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let outcome = rx.await.map_err(|_| CatalogError::ChannelClosed(op));

    request.set_onsuccess(None);
    request.set_onerror(None);
    drop(on_success);
    drop(on_error);

    outcome?
}

/// Las claves del generador son enteros positivos; cualquier otra cosa no
/// cabe en el `u32` del modelo.
fn key_to_id(key: f64) -> Result<u32> {
    if key.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&key) {
        return Err(CatalogError::Serialization(format!("clave fuera de rango: {}", key)));
    }
    Ok(key as u32)
}

/// Serializa como objeto JS plano: `None` => null, mapas => objetos
fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
