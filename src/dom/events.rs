// ============================================================================
// EVENT HANDLING
// ============================================================================
// Los closures de los listeners viven en un `Listeners`. Quien renderiza lo
// vacía antes de volver a montar el DOM, y con eso suelta los closures de las
// cards anteriores.
// DOMContentLoaded se registra una sola vez (once_into_js).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

type Listener = Closure<dyn FnMut(Event)>;

/// Dueño de los closures registrados durante un render
#[derive(Clone, Default)]
pub struct Listeners {
    closures: Rc<RefCell<Vec<Listener>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    fn keep(&self, closure: Listener) {
        self.closures.borrow_mut().push(closure);
    }

    pub fn len(&self) -> usize {
        self.closures.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Suelta todos los closures. Los elementos que los usaban ya no deben
    /// estar en el DOM.
    pub fn clear(&self) {
        self.closures.borrow_mut().clear();
    }
}

fn listen(element: &Element, event: &str, listeners: &Listeners, closure: Listener) -> Result<(), JsValue> {
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    listeners.keep(closure);
    Ok(())
}

/// Click handler simple
pub fn on_click<F>(element: &Element, listeners: &Listeners, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| handler(e.unchecked_into::<MouseEvent>()))
        as Box<dyn FnMut(Event)>);
    listen(element, "click", listeners, closure)
}

/// Change handler (select, input file)
pub fn on_change<F>(element: &Element, listeners: &Listeners, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    listen(element, "change", listeners, closure)
}

/// Ejecuta `callback` cuando el DOM está listo (inmediatamente si ya lo está)
pub fn on_dom_ready<F>(callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let document = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;

    // readyState: "loading" | "interactive" | "complete"
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let closure = Closure::once_into_js(move |_e: Event| callback());
    document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
}
