// ============================================================================
// CART VIEWMODEL - Carrito + pago con Mercado Pago
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::dom::{alert, get_element_by_id, navigate, text_content};
use crate::error::EditorResult;
use crate::models::CartItem;
use crate::services::{ApiClient, Transport};
use crate::state::CartState;
use crate::utils::messages::PAGO_ERROR;
use crate::utils::parse_float;

/// Precio que manda la página: número o texto numérico ("500")
pub fn precio_desde_js(value: &JsValue) -> Option<f64> {
    if let Some(n) = value.as_f64() {
        return Some(n).filter(|n| n.is_finite());
    }
    value.as_string().and_then(|s| parse_float(&s))
}

/// Pide la preferencia de pago con el carrito completo
pub async fn iniciar_pago<T: Transport>(api: &ApiClient<T>, cart: &CartState) -> EditorResult<String> {
    let items = cart.items();
    api.pagar(&items).await
}

#[derive(Clone)]
pub struct CartViewModel {
    api: ApiClient,
    cart: CartState,
}

impl CartViewModel {
    pub fn new(api: ApiClient, cart: CartState) -> Self {
        Self { api, cart }
    }

    pub fn agregar(&self, item: JsValue) -> Result<(), JsValue> {
        let item: CartItem = serde_wasm_bindgen::from_value(item)?;
        self.cart.add(item);
        Ok(())
    }

    /// El stopPropagation evita que el click cierre el carrito
    pub fn eliminar(&self, id_base: &str, talle: &str, event: Option<&Event>) {
        if let Some(event) = event {
            event.stop_propagation();
        }
        self.cart.remove(id_base, talle);
    }

    pub fn vaciar(&self) {
        self.cart.clear();
    }

    pub fn actualizar_precio(&self, nombre: &str, nuevo_precio: &JsValue) -> bool {
        match precio_desde_js(nuevo_precio) {
            Some(precio) => self.cart.update_price_by_name(nombre, precio),
            None => {
                log::warn!("⚠️ Precio no numérico para {}: {:?}", nombre, nuevo_precio);
                false
            }
        }
    }

    /// Lee los precios mostrados en la página y los copia al carrito
    pub fn sincronizar_precios(&self) -> usize {
        self.cart
            .sync_prices_from_display(|id| get_element_by_id(id).map(|span| text_content(&span)))
    }

    /// Items como array JS de objetos planos
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(serde::Serialize::serialize(&self.cart.items(), &serializer)?)
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// `pagarConMercadoPago`: redirige al `init_point` o avisa del error
    pub fn pagar(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match iniciar_pago(&vm.api, &vm.cart).await {
                Ok(init_point) => {
                    log::info!("💳 Redirigiendo a Mercado Pago");
                    if let Err(e) = navigate(&init_point) {
                        log::error!("❌ No se pudo redirigir al pago: {:?}", e);
                        alert(PAGO_ERROR);
                    }
                }
                Err(e) => {
                    log::error!("❌ Error al generar pago: {}", e);
                    alert(PAGO_ERROR);
                }
            }
        });
    }
}
