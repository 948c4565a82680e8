// ============================================================================
// EVENT HANDLING - Listeners de los campos en edición
// ============================================================================
// closure.forget() es seguro acá: los listeners cuelgan de inputs que se
// reemplazan con replaceWith, y el navegador los limpia junto con el nodo.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, FocusEvent, HtmlElement, KeyboardEvent};

/// Handler para blur
pub fn on_blur<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(FocusEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(FocusEvent)>);
    element.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Handler para keydown
pub fn on_keydown<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Enter hace blur del elemento: el guardado queda a cargo del handler de blur
pub fn blur_on_enter(element: &Element) -> Result<(), JsValue> {
    let target = element.clone();
    on_keydown(element, move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            log::debug!("⏎ Enter presionado en {}", target.id());
            if let Some(html) = target.dyn_ref::<HtmlElement>() {
                if let Err(e) = html.blur() {
                    log::warn!("⚠️ No se pudo hacer blur de {}: {:?}", html.id(), e);
                }
            }
        }
    })
}
