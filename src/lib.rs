// ============================================================================
// TIENDA PREVIEW - CAPA DE INTERACCIÓN (RUST + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que crean nodos DOM (sin lógica)
// - ViewModels: Validación + reconciliación de la página
// - Services: SOLO comunicación con el backend
// - State: Carrito y hooks con Rc<RefCell>
// - Models: Bodies y respuestas del backend
// ============================================================================
// La página HTML sigue llamando a las mismas funciones globales
// (`editarPrecio`, `guardarTalles`, `pagarConMercadoPago`, ...): acá se
// exportan con esos nombres vía `js_name`.
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod dom;
pub mod views;
pub mod viewmodels;
pub mod utils;
pub mod app;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use web_sys::Event;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::Hook;

// Una sola App por página, compartida por todos los handlers
thread_local! {
    static APP: App = App::new();
}

fn with_app<R>(f: impl FnOnce(&App) -> R) -> R {
    APP.with(f)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Tienda preview - Rust + WASM ({}) → {}",
        CONFIG.environment,
        CONFIG.backend_url
    );

    Ok(())
}

// ============================================================================
// PRECIO
// ============================================================================

#[wasm_bindgen(js_name = editarPrecio)]
pub fn editar_precio(id: &str) -> Result<(), JsValue> {
    Ok(with_app(|app| app.precio().editar(id))?)
}

#[wasm_bindgen(js_name = guardarPrecio)]
pub fn guardar_precio(id: &str) {
    with_app(|app| app.precio().guardar(id))
}

#[wasm_bindgen(js_name = mostrarAvisoPrecio)]
pub fn mostrar_aviso_precio() {
    viewmodels::mostrar_aviso_precio();
}

// ============================================================================
// TALLES
// ============================================================================

#[wasm_bindgen(js_name = editarTalles)]
pub fn editar_talles(id: &str) -> Result<(), JsValue> {
    Ok(with_app(|app| app.talles().editar(id))?)
}

#[wasm_bindgen(js_name = guardarTalles)]
pub fn guardar_talles(id: &str) {
    with_app(|app| app.talles().guardar(id))
}

// ============================================================================
// FIRESTORE + LOGIN
// ============================================================================

#[wasm_bindgen(js_name = actualizarFirestore)]
pub fn actualizar_firestore(id: String, datos: JsValue) -> Result<(), JsValue> {
    let datos: serde_json::Value = serde_wasm_bindgen::from_value(datos)?;
    with_app(|app| app.firestore().actualizar(id, datos));
    Ok(())
}

#[wasm_bindgen(js_name = loginAdmin)]
pub fn login_admin(event: Event) {
    with_app(|app| app.login().login(&event))
}

// ============================================================================
// CARRITO
// ============================================================================

#[wasm_bindgen(js_name = agregarAlCarrito)]
pub fn agregar_al_carrito(item: JsValue) -> Result<(), JsValue> {
    with_app(|app| app.carrito().agregar(item))
}

#[wasm_bindgen(js_name = eliminarProducto)]
pub fn eliminar_producto(id_base: &str, talle: &str, event: Option<Event>) {
    with_app(|app| app.carrito().eliminar(id_base, talle, event.as_ref()))
}

#[wasm_bindgen(js_name = vaciarCarrito)]
pub fn vaciar_carrito() {
    with_app(|app| app.carrito().vaciar())
}

#[wasm_bindgen(js_name = actualizarPrecioEnCarrito)]
pub fn actualizar_precio_en_carrito(nombre: &str, nuevo_precio: JsValue) -> bool {
    with_app(|app| app.carrito().actualizar_precio(nombre, &nuevo_precio))
}

#[wasm_bindgen(js_name = sincronizarPreciosDelCarrito)]
pub fn sincronizar_precios_del_carrito() -> usize {
    with_app(|app| app.carrito().sincronizar_precios())
}

#[wasm_bindgen(js_name = obtenerCarrito)]
pub fn obtener_carrito() -> Result<JsValue, JsValue> {
    with_app(|app| app.carrito().snapshot())
}

#[wasm_bindgen(js_name = totalCarrito)]
pub fn total_carrito() -> f64 {
    with_app(|app| app.carrito().total())
}

#[wasm_bindgen(js_name = pagarConMercadoPago)]
pub fn pagar_con_mercado_pago() {
    with_app(|app| app.carrito().pagar())
}

// ============================================================================
// HOOKS DE LA PÁGINA
// ============================================================================

fn registrar(hook: &Hook, nombre: &'static str, callback: js_sys::Function) {
    hook.set(move || {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log::error!("❌ Error en el hook {}: {:?}", nombre, e);
        }
    });
    log::debug!("🔗 Hook {} registrado", nombre);
}

/// Re-render del carrito después de cada mutación
#[wasm_bindgen(js_name = registrarRenderCarrito)]
pub fn registrar_render_carrito(callback: js_sys::Function) {
    with_app(|app| registrar(app.cart().render_hook(), "renderCarrito", callback))
}

/// Reemplaza el aviso por defecto (`#avisoPrecio`) tras guardar un precio
#[wasm_bindgen(js_name = registrarAvisoPrecio)]
pub fn registrar_aviso_precio(callback: js_sys::Function) {
    with_app(|app| registrar(&app.hooks().aviso_precio, "avisoPrecio", callback))
}

#[wasm_bindgen(js_name = registrarAvisoFirestore)]
pub fn registrar_aviso_firestore(callback: js_sys::Function) {
    with_app(|app| registrar(&app.hooks().aviso_firestore, "avisoFirestore", callback))
}
