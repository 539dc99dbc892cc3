// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::Product;
use crate::utils::i18n::normalize_language;
use crate::utils::storage::{load_string_pref, save_string_pref};

const LANGUAGE_PREF_KEY: &str = "language";

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Última lectura completa del store
    pub products: Rc<RefCell<Vec<Product>>>,
    pub language: Rc<RefCell<String>>,
    pub db_ready: Rc<RefCell<bool>>,
    pub last_error: Rc<RefCell<Option<String>>>,

    // Reactivity: callbacks tras reemplazar la lista de productos
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear estado; el idioma sale de localStorage o de CONFIG
    pub fn new() -> Self {
        let language = load_string_pref(LANGUAGE_PREF_KEY)
            .map(|lang| normalize_language(&lang))
            .unwrap_or_else(|| normalize_language(&CONFIG.ui.default_language));
        Self::with_language(language)
    }

    pub fn with_language(language: String) -> Self {
        Self {
            products: Rc::new(RefCell::new(Vec::new())),
            language: Rc::new(RefCell::new(language)),
            db_ready: Rc::new(RefCell::new(false)),
            last_error: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Establecer language y guardar en localStorage
    pub fn set_language(&self, lang: &str) {
        let lang = normalize_language(lang);
        *self.language.borrow_mut() = lang.clone();
        if let Err(e) = save_string_pref(LANGUAGE_PREF_KEY, &lang) {
            log::warn!("⚠️ [STATE] No se pudo guardar el idioma: {}", e);
        }
        self.notify_subscribers();
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// Reemplaza la lista y notifica
    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
        *self.last_error.borrow_mut() = None;
        self.notify_subscribers();
    }

    pub fn set_db_ready(&self, ready: bool) {
        *self.db_ready.borrow_mut() = ready;
    }

    pub fn is_db_ready(&self) -> bool {
        *self.db_ready.borrow()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        *self.last_error.borrow_mut() = Some(message.into());
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        // Copia para que un callback pueda suscribir sin doble borrow
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_products_notifies_and_clears_error() {
        let state = AppState::with_language("RU".to_string());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        state.set_error("boom");
        state.set_products(vec![Product::new("Молоко", "2025-12-25")]);

        assert_eq!(calls.get(), 1);
        assert_eq!(state.products().len(), 1);
        assert!(state.last_error.borrow().is_none());
    }

    #[test]
    fn clones_share_the_same_cells() {
        let state = AppState::with_language("ES".to_string());
        let other = state.clone();
        other.set_db_ready(true);
        other.set_products(vec![Product::new("Йогурт", "2025-12-15")]);

        assert!(state.is_db_ready());
        assert_eq!(state.products()[0].name, "Йогурт");
        assert_eq!(state.language(), "ES");
    }
}
