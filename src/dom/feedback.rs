// ============================================================================
// FEEDBACK VISUAL - Clases transitorias y avisos temporizados
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{add_class, remove_class};

/// Agrega `class` y la quita después de `millis`
pub fn flash_class(element: &Element, class: &str, millis: u32) -> Result<(), JsValue> {
    add_class(element, class)?;
    let element = element.clone();
    let class = class.to_string();
    Timeout::new(millis, move || {
        if let Err(e) = remove_class(&element, &class) {
            log::warn!("⚠️ No se pudo quitar la clase {}: {:?}", class, e);
        }
    })
    .forget();
    Ok(())
}

/// Muestra el elemento (`display: block`) y lo oculta después de `millis`
pub fn show_temporarily(element: &Element, millis: u32) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .clone();
    html.style().set_property("display", "block")?;
    Timeout::new(millis, move || {
        if let Err(e) = html.style().set_property("display", "none") {
            log::warn!("⚠️ No se pudo ocultar #{}: {:?}", html.id(), e);
        }
    })
    .forget();
    Ok(())
}
