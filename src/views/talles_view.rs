// ============================================================================
// TALLES VIEW - Select / span de talles
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlOptionElement, HtmlSelectElement};

use crate::config::CONFIG;
use crate::dom::{create_typed, remove_class, ElementBuilder};
use crate::utils::{join_talles_display, talle_select_id, talles_id};

/// `<select id=talle_<id>>` con una opción por talle, en orden
pub fn render_talles_select(id: &str, talles: &[String]) -> Result<HtmlSelectElement, JsValue> {
    let select: HtmlSelectElement = create_typed("select")?;
    select.set_id(&talle_select_id(id));
    select.set_class_name(&CONFIG.ui_config.talles_select_class);
    for talle in talles {
        let option: HtmlOptionElement = create_typed("option")?;
        option.set_value(talle);
        option.set_text_content(Some(talle));
        select.append_child(&option)?;
    }
    Ok(select)
}

/// Span `talles_<id>` con los talles separados por ", "
pub fn render_talles_span(id: &str, talles: &[String], class_name: &str) -> Result<Element, JsValue> {
    let span = ElementBuilder::new("span")?
        .id(&talles_id(id))
        .class(class_name)
        .text(&join_talles_display(talles))
        .build();
    remove_class(&span, &CONFIG.ui_config.invalid_class)?;
    Ok(span)
}

/// Valores de las opciones de un select, en orden
pub fn select_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|node| node.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}
