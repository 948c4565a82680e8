// ============================================================================
// TESTS EN NAVEGADOR - Funciones exportadas sobre un DOM real
// ============================================================================
// wasm-pack test --headless --chrome
// Todos los tests comparten la misma página y la misma App.
// ============================================================================

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use tienda_preview::config::CONFIG;
use tienda_preview::dom::{flash_class, show_temporarily};
use tienda_preview::error::EditorError;
use tienda_preview::views::{render_precio_span, render_talles_select, select_values};
use tienda_preview::{
    actualizar_precio_en_carrito, agregar_al_carrito, editar_precio, eliminar_producto,
    obtener_carrito, registrar_render_carrito, sincronizar_precios_del_carrito, total_carrito,
    vaciar_carrito,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn montar_span(id: &str, texto: &str) -> Element {
    let span = document().create_element("span").unwrap();
    span.set_id(id);
    span.set_class_name("precio fw-bold");
    span.set_text_content(Some(texto));
    document().body().unwrap().append_child(&span).unwrap();
    span
}

fn item(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

fn cantidad_en_carrito() -> u32 {
    obtener_carrito().unwrap().unchecked_into::<js_sys::Array>().length()
}

#[wasm_bindgen_test]
fn editar_precio_swaps_span_for_prefilled_input() {
    montar_span("precio_W1", "$1500.00");

    editar_precio("W1").unwrap();

    assert!(document().get_element_by_id("precio_W1").is_none());
    let input: HtmlInputElement = document()
        .get_element_by_id("input_precio_W1")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(input.type_(), "number");
    assert_eq!(input.value(), "1500.00");
}

#[wasm_bindgen_test]
fn editar_precio_without_span_does_nothing() {
    editar_precio("NO_EXISTE").unwrap();
    assert!(document().get_element_by_id("input_precio_NO_EXISTE").is_none());
}

#[wasm_bindgen_test]
fn talles_select_has_one_option_per_size_in_order() {
    let talles = vec!["S".to_string(), "M".to_string(), "L".to_string()];

    let select = render_talles_select("T1", &talles).unwrap();

    assert_eq!(select.id(), "talle_T1");
    assert_eq!(select.class_name(), CONFIG.ui_config.talles_select_class);
    assert_eq!(select.options().length(), 3);
    assert_eq!(select_values(&select), talles);
}

#[wasm_bindgen_test]
fn precio_span_formats_and_drops_invalid_class() {
    let span = render_precio_span("W2", 1500.0, "form-control is-invalid").unwrap();

    assert_eq!(span.id(), "precio_W2");
    assert_eq!(span.text_content().as_deref(), Some("$1500.00"));
    assert!(span.class_list().contains("form-control"));
    assert!(!span.class_list().contains(&CONFIG.ui_config.invalid_class));
}

#[wasm_bindgen_test]
fn cart_exports_keep_items_and_total_in_sync() {
    vaciar_carrito();

    agregar_al_carrito(item(r#"{"id_base":"C1","nombre":"Remera","precio":1000,"talle":"M"}"#)).unwrap();
    agregar_al_carrito(item(r#"{"id_base":"C1","nombre":"Remera","precio":1000,"talle":"M","cantidad":2}"#)).unwrap();
    agregar_al_carrito(item(r#"{"id_base":"C2","nombre":"Gorra Negra","precio":"500","talle":"U"}"#)).unwrap();

    assert_eq!(cantidad_en_carrito(), 2);
    assert_eq!(total_carrito(), 3500.0);

    assert!(actualizar_precio_en_carrito("Gorra Negra", JsValue::from_str("750")));
    assert!(!actualizar_precio_en_carrito("Gorra Negra", JsValue::from_str("abc")));
    assert_eq!(total_carrito(), 3750.0);

    eliminar_producto("C1", "M", None);
    assert_eq!(cantidad_en_carrito(), 1);
    assert_eq!(total_carrito(), 750.0);

    vaciar_carrito();
    assert_eq!(cantidad_en_carrito(), 0);
    assert_eq!(total_carrito(), 0.0);
}

#[wasm_bindgen_test]
fn zero_cantidad_from_page_counts_as_one() {
    vaciar_carrito();

    agregar_al_carrito(item(r#"{"id_base":"Z1","nombre":"Gorra","precio":800,"talle":"U","cantidad":0}"#)).unwrap();

    assert_eq!(total_carrito(), 800.0);
    let cantidad = js_sys::Reflect::get(&obtener_carrito().unwrap().unchecked_into::<js_sys::Array>().get(0), &"cantidad".into()).unwrap();
    assert_eq!(cantidad.as_f64(), Some(1.0));

    vaciar_carrito();
}

#[wasm_bindgen_test]
fn dom_exceptions_become_dom_errors_and_back() {
    let err = EditorError::from(JsValue::from_str("NotFoundError"));
    assert_eq!(err, EditorError::Dom("NotFoundError".to_string()));

    let js: JsValue = err.into();
    assert_eq!(js.as_string().as_deref(), Some("DOM: NotFoundError"));
}

#[wasm_bindgen_test]
fn sincronizar_reads_displayed_prices() {
    vaciar_carrito();
    montar_span("precio_S1", "$250.00");
    montar_span("precio_Buzo_Azul", "$1200.50");

    agregar_al_carrito(item(r#"{"id_base":"S1","nombre":"Short","precio":100,"talle":"M"}"#)).unwrap();
    agregar_al_carrito(item(r#"{"nombre":"Buzo Azul","precio":900}"#)).unwrap();
    agregar_al_carrito(item(r#"{"id_base":"S9","nombre":"Sin span","precio":10,"talle":"L"}"#)).unwrap();

    assert_eq!(sincronizar_precios_del_carrito(), 2);
    assert_eq!(total_carrito(), 250.0 + 1200.5 + 10.0);

    vaciar_carrito();
}

#[wasm_bindgen_test]
fn render_hook_runs_on_each_mutation() {
    vaciar_carrito();
    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &"__renders".into(), &0.into()).unwrap();
    registrar_render_carrito(js_sys::Function::new_no_args("window.__renders += 1"));

    agregar_al_carrito(item(r#"{"id_base":"R1","nombre":"Medias","precio":350,"talle":"U"}"#)).unwrap();
    eliminar_producto("R1", "U", None);
    vaciar_carrito();

    let renders = js_sys::Reflect::get(&window, &"__renders".into()).unwrap();
    assert_eq!(renders.as_f64(), Some(3.0));
}

#[wasm_bindgen_test]
fn feedback_helpers_apply_immediately() {
    let span = montar_span("aviso_test", "Guardado");

    flash_class(&span, "text-success", 1000).unwrap();
    assert!(span.class_list().contains("text-success"));

    show_temporarily(&span, 2000).unwrap();
    let display = span.unchecked_ref::<HtmlElement>().style().get_property_value("display").unwrap();
    assert_eq!(display, "block");
}
