// ============================================================================
// PRECIO VIEWMODEL - Ciclo display → edición → validar → guardar → display
// ============================================================================

use web_sys::{Element, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{
    alert, blur_on_enter, flash_class, focus, get_element_by_id, get_typed_by_id, on_blur, replace_with,
    text_content,
};
use crate::error::{EditorError, EditorResult};
use crate::services::{ApiClient, Transport};
use crate::state::{CartState, PageHooks};
use crate::utils::messages::{PRECIO_ERROR_RED, PRECIO_ERROR_SERVIDOR, PRECIO_INVALIDO};
use crate::utils::{input_precio_id, parse_float, precio_id, strip_currency};
use crate::viewmodels::{mostrar_aviso_precio, reportar_error};
use crate::views::{render_precio_input, render_precio_span};

/// Valida el texto del input como precio (`parseFloat`)
pub fn validar_precio(raw: &str) -> EditorResult<f64> {
    parse_float(raw).ok_or_else(|| EditorError::Validation(format!("precio no numérico: {:?}", raw)))
}

/// Valida y, solo si es número, envía al backend. Devuelve el precio confirmado.
pub async fn confirmar_precio<T: Transport>(api: &ApiClient<T>, id: &str, raw: &str) -> EditorResult<f64> {
    let precio = validar_precio(raw)?;
    log::info!("🧪 Precio validado para {} → {}", id, precio);
    api.actualizar_precio(id, precio).await?;
    Ok(precio)
}

#[derive(Clone)]
pub struct PrecioViewModel {
    api: ApiClient,
    cart: CartState,
    hooks: PageHooks,
}

impl PrecioViewModel {
    pub fn new(api: ApiClient, cart: CartState, hooks: PageHooks) -> Self {
        Self { api, cart, hooks }
    }

    /// `editarPrecio`: cambia el span `precio_<id>` por un input numérico
    pub fn editar(&self, id: &str) -> EditorResult<()> {
        let Some(span) = get_element_by_id(&precio_id(id)) else {
            log::warn!("❌ No se encontró el span con id: {}", precio_id(id));
            return Ok(());
        };

        let valor_actual = strip_currency(&text_content(&span));
        log::info!("🧪 Editando precio para: {} | Valor actual: {}", id, valor_actual);

        let input = render_precio_input(id, &valor_actual)?;

        let vm = self.clone();
        let id_owned = id.to_string();
        on_blur(&input, move |_| {
            log::debug!("📤 onblur: guardando precio para {}", id_owned);
            vm.guardar(&id_owned);
        })?;
        blur_on_enter(&input)?;

        replace_with(&span, &input)?;
        focus(&input)?;
        Ok(())
    }

    /// `guardarPrecio`: valida, envía y reconcilia el DOM según la respuesta
    pub fn guardar(&self, id: &str) {
        log::info!("🟡 Iniciando guardarPrecio para: {}", id);

        let Some(input) = get_typed_by_id::<HtmlInputElement>(&input_precio_id(id)) else {
            log::warn!("❌ No se encontró el input con id: {}", input_precio_id(id));
            return;
        };

        let vm = self.clone();
        let id = id.to_string();
        let raw = input.value();
        wasm_bindgen_futures::spawn_local(async move {
            match confirmar_precio(&vm.api, &id, &raw).await {
                Ok(precio) => {
                    if let Err(e) = vm.mostrar_confirmado(&id, &input, precio) {
                        log::error!("❌ Error actualizando DOM del precio {}: {}", id, e);
                    }
                }
                Err(EditorError::Validation(detalle)) => {
                    log::warn!("⚠️ Valor ingresado no es un número válido: {}", detalle);
                    alert(PRECIO_INVALIDO);
                }
                Err(e) => {
                    let campo: &Element = &input;
                    reportar_error(&e, PRECIO_ERROR_SERVIDOR, PRECIO_ERROR_RED, Some(campo));
                }
            }
        });
    }

    fn mostrar_confirmado(&self, id: &str, input: &HtmlInputElement, precio: f64) -> EditorResult<()> {
        log::info!("✅ Precio confirmado para {}", id);

        let span = render_precio_span(id, precio, &input.class_name())?;
        replace_with(input, &span)?;
        flash_class(&span, &CONFIG.ui_config.success_class, CONFIG.ui_config.success_flash_ms)?;

        self.cart.apply_confirmed_price(id, precio);

        if !self.hooks.aviso_precio.fire() {
            mostrar_aviso_precio();
        }
        Ok(())
    }
}
