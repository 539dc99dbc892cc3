// ============================================================================
// FILE READER - Leer un File como data URL
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, ProgressEvent};

use crate::error::{CatalogError, Result};

/// Lee el fichero completo y devuelve `data:<mime>;base64,...`
pub async fn read_as_data_url(file: &File) -> Result<String> {
    let reader = FileReader::new().map_err(|e| CatalogError::dom(&e))?;

    let (tx, rx) = oneshot::channel::<Result<String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let load_tx = tx.clone();
    let load_reader = reader.clone();
    let on_load = Closure::wrap(Box::new(move |_event: ProgressEvent| {
        let result = load_reader
            .result()
            .map_err(|e| CatalogError::dom(&e))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| CatalogError::Dom("FileReader no devolvió texto".to_string()))
            });
        if let Some(sender) = load_tx.borrow_mut().take() {
            let _ = sender.send(result);
        }
    }) as Box<dyn FnMut(ProgressEvent)>);

    let on_error = Closure::wrap(Box::new(move |_event: ProgressEvent| {
        if let Some(sender) = tx.borrow_mut().take() {
            let _ = sender.send(Err(CatalogError::Dom("Error leyendo el fichero".to_string())));
        }
    }) as Box<dyn FnMut(ProgressEvent)>);

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| CatalogError::dom(&e))?;

    let outcome = rx.await.map_err(|_| CatalogError::ChannelClosed("read_as_data_url"));

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);

    outcome?
}
