// ============================================================================
// TALLES VIEWMODEL - Edición de talles por prompt y por input
// ============================================================================
// Dos caminos hacia el mismo endpoint con bodies distintos:
//   editar  -> {id, talles: [...]}
//   guardar -> {id_base, nuevoTalles: "a,b,c"}
// ============================================================================

use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::config::CONFIG;
use crate::dom::{flash_class, get_element_by_id, get_typed_by_id, prompt, replace_with, text_content};
use crate::error::EditorResult;
use crate::services::{ApiClient, Transport};
use crate::utils::messages::{TALLES_ERROR_RED, TALLES_ERROR_SERVIDOR, TALLES_PROMPT};
use crate::utils::{join_talles_display, parse_talles, talle_select_id, talles_id};
use crate::viewmodels::reportar_error;
use crate::views::{render_talles_select, render_talles_span, select_values};

/// Parsea la entrada del prompt y la envía como array
pub async fn confirmar_talles<T: Transport>(api: &ApiClient<T>, id: &str, entrada: &str) -> EditorResult<Vec<String>> {
    let talles = parse_talles(entrada);
    log::info!("✅ Nuevos talles ingresados: {:?}", talles);
    api.actualizar_talles(id, &talles).await?;
    Ok(talles)
}

/// Parsea el input y lo envía como CSV
pub async fn confirmar_talles_csv<T: Transport>(api: &ApiClient<T>, id_base: &str, entrada: &str) -> EditorResult<Vec<String>> {
    let talles = parse_talles(entrada);
    log::info!("🧪 Talles capturados para {} → {:?}", id_base, talles);
    api.actualizar_talles_csv(id_base, &talles).await?;
    Ok(talles)
}

/// De dónde salen los talles actuales
enum FuenteTalles {
    Select(HtmlSelectElement),
    Span(Element),
}

impl FuenteTalles {
    fn buscar(id: &str) -> Option<Self> {
        if let Some(select) = get_typed_by_id::<HtmlSelectElement>(&talle_select_id(id)) {
            return Some(Self::Select(select));
        }
        get_element_by_id(&talles_id(id)).map(Self::Span)
    }

    fn talles_actuales(&self) -> String {
        match self {
            Self::Select(select) => join_talles_display(&select_values(select)),
            Self::Span(span) => text_content(span),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Self::Select(select) => select.as_ref(),
            Self::Span(span) => span,
        }
    }
}

#[derive(Clone)]
pub struct TallesViewModel {
    api: ApiClient,
}

impl TallesViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `editarTalles`: prompt, envío y select nuevo en lugar del anterior
    pub fn editar(&self, id: &str) -> EditorResult<()> {
        let Some(fuente) = FuenteTalles::buscar(id) else {
            log::warn!("❌ No se encontró selector ni span para: {}", id);
            return Ok(());
        };

        let Some(entrada) = prompt(TALLES_PROMPT, &fuente.talles_actuales()) else {
            log::debug!("Edición de talles cancelada para {}", id);
            return Ok(());
        };

        let api = self.api.clone();
        let id = id.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match confirmar_talles(&api, &id, &entrada).await {
                Ok(talles) => {
                    log::info!("✅ Talles confirmados para {}", id);
                    if let Err(e) = reemplazar_por_select(&id, fuente.element(), &talles) {
                        log::error!("❌ Error actualizando DOM de talles {}: {}", id, e);
                    }
                }
                // Sin marca de inválido: solo alerta
                Err(e) => reportar_error(&e, TALLES_ERROR_SERVIDOR, TALLES_ERROR_RED, None),
            }
        });
        Ok(())
    }

    /// `guardarTalles`: lee el input `talles_<id>` y lo deja como span
    pub fn guardar(&self, id: &str) {
        log::info!("🟡 Iniciando guardarTalles para: {}", id);

        let Some(input) = get_typed_by_id::<HtmlInputElement>(&talles_id(id)) else {
            log::warn!("❌ No se encontró el input con id: {}", talles_id(id));
            return;
        };

        let api = self.api.clone();
        let id = id.to_string();
        let entrada = input.value();
        wasm_bindgen_futures::spawn_local(async move {
            match confirmar_talles_csv(&api, &id, &entrada).await {
                Ok(talles) => {
                    log::info!("✅ Talles confirmados para {}", id);
                    if let Err(e) = reemplazar_por_span(&id, &input, &talles) {
                        log::error!("❌ Error actualizando DOM de talles {}: {}", id, e);
                    }
                }
                Err(e) => {
                    let campo: &Element = &input;
                    reportar_error(&e, TALLES_ERROR_SERVIDOR, TALLES_ERROR_RED, Some(campo));
                }
            }
        });
    }
}

fn reemplazar_por_select(id: &str, anterior: &Element, talles: &[String]) -> EditorResult<()> {
    let select = render_talles_select(id, talles)?;
    replace_with(anterior, &select)?;
    flash_class(&select, &CONFIG.ui_config.success_class, CONFIG.ui_config.success_flash_ms)?;
    Ok(())
}

fn reemplazar_por_span(id: &str, input: &HtmlInputElement, talles: &[String]) -> EditorResult<()> {
    let span = render_talles_span(id, talles, &input.class_name())?;
    replace_with(input, &span)?;
    flash_class(&span, &CONFIG.ui_config.success_class, CONFIG.ui_config.success_flash_ms)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::mock::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn prompt_input_is_trimmed_and_sent_as_array() {
        let mock = MockTransport::default().respond(Ok(json!({"status": "ok"})));
        let api = ApiClient::with_transport("", mock.clone());

        let talles = block_on(confirmar_talles(&api, "P1", " S, M ,L")).unwrap();

        assert_eq!(talles, vec!["S", "M", "L"]);
        assert_eq!(
            mock.calls(),
            vec![("/actualizar-talles".to_string(), json!({"id": "P1", "talles": ["S", "M", "L"]}))]
        );
    }

    #[test]
    fn input_path_sends_csv_shape() {
        let mock = MockTransport::default().respond(Ok(json!({"status": "ok"})));
        let api = ApiClient::with_transport("", mock.clone());

        let talles = block_on(confirmar_talles_csv(&api, "P1", "38, 39,,40")).unwrap();

        assert_eq!(talles, vec!["38", "39", "40"]);
        assert_eq!(mock.calls()[0].1, json!({"id_base": "P1", "nuevoTalles": "38,39,40"}));
    }

    #[test]
    fn failed_save_returns_error() {
        let mock = MockTransport::default().respond(Ok(json!({"error": "Datos incompletos"})));
        let api = ApiClient::with_transport("", mock.clone());

        let err = block_on(confirmar_talles_csv(&api, "P1", "S")).unwrap_err();
        assert_eq!(err.server_message(), Some("Datos incompletos"));
    }
}
