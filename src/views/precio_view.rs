// ============================================================================
// PRECIO VIEW - Estados display (span) y edición (input) del precio
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{create_typed, remove_class, ElementBuilder};
use crate::utils::{format_price, input_precio_id, precio_id};

/// Input numérico de edición, prellenado con el valor mostrado
pub fn render_precio_input(id: &str, valor: &str) -> Result<HtmlInputElement, JsValue> {
    let ui = &CONFIG.ui_config;
    let input: HtmlInputElement = create_typed("input")?;
    input.set_type("number");
    input.set_value(valor);
    input.set_class_name(&ui.precio_input_class);
    input.style().set_property("width", &ui.precio_input_width)?;
    input.set_id(&input_precio_id(id));
    Ok(input)
}

/// Span con el precio confirmado. Hereda las clases del input (sin la de inválido).
pub fn render_precio_span(id: &str, precio: f64, class_name: &str) -> Result<Element, JsValue> {
    let span = ElementBuilder::new("span")?
        .id(&precio_id(id))
        .class(class_name)
        .text(&format_price(precio))
        .build();
    remove_class(&span, &CONFIG.ui_config.invalid_class)?;
    Ok(span)
}
