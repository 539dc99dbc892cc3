// ============================================================================
// ERRORES - Tipo de error único del catálogo
// ============================================================================

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No hay objeto window (¿fuera del navegador?)")]
    NoWindow,

    #[error("IndexedDB no está disponible en este navegador")]
    IndexedDbUnavailable,

    #[error("La base de datos no está abierta")]
    DatabaseNotOpen,

    #[error("Error abriendo la base de datos: {0}")]
    Open(String),

    #[error("Error en la operación '{op}': {message}")]
    Request { op: String, message: String },

    #[error("Error de serialización: {0}")]
    Serialization(String),

    #[error("Error de DOM: {0}")]
    Dom(String),

    #[error("La operación '{0}' terminó sin respuesta")]
    ChannelClosed(&'static str),
}

impl CatalogError {
    /// Error de request IndexedDB a partir del JsValue devuelto por web-sys
    pub fn request(op: &str, value: &JsValue) -> Self {
        Self::Request {
            op: op.to_string(),
            message: describe_js(value),
        }
    }

    pub fn dom(value: &JsValue) -> Self {
        Self::Dom(describe_js(value))
    }
}

/// Texto legible de un error JS (DOMException, Error, string u otro)
pub fn describe_js(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{:?}", value)
}

impl From<serde_wasm_bindgen::Error> for CatalogError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<CatalogError> for JsValue {
    fn from(err: CatalogError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_operation() {
        let err = CatalogError::Request {
            op: "add".to_string(),
            message: "ConstraintError: Key already exists".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error en la operación 'add': ConstraintError: Key already exists"
        );
        assert_eq!(
            CatalogError::ChannelClosed("get_all").to_string(),
            "La operación 'get_all' terminó sin respuesta"
        );
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let err: CatalogError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
