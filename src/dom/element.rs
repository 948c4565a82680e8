// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID ya casteado (`HtmlInputElement`, `HtmlSelectElement`, ...)
pub fn get_typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Crear elemento ya casteado
pub fn create_typed<T: JsCast>(tag: &str) -> Result<T, JsValue> {
    create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{}> no tiene el tipo esperado", tag)))
}

/// Reemplazar un nodo por otro en el mismo lugar (display <-> edición)
pub fn replace_with(old: &Element, new: &Element) -> Result<(), JsValue> {
    old.replace_with_with_node_1(new)
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Texto del elemento (vacío si no tiene)
pub fn text_content(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

/// Dar foco (si es un HtmlElement)
pub fn focus(element: &Element) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .focus()
}

/// Alerta bloqueante
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if win.alert_with_message(message).is_err() {
            log::error!("❌ No se pudo mostrar alert: {}", message);
        }
    }
}

/// Prompt bloqueante. `None` si el usuario cancela.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}

/// Navegar a otra URL (redirect de pago)
pub fn navigate(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}

/// Volver a cargar la URL actual (`location.href = location.href`)
pub fn reload() -> Result<(), JsValue> {
    let location = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location();
    let href = location.href()?;
    location.set_href(&href)
}
