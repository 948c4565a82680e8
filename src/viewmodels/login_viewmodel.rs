use web_sys::{Event, HtmlInputElement};

use crate::dom::{alert, get_typed_by_id, reload};
use crate::error::{EditorError, EditorResult};
use crate::services::{ApiClient, Transport};
use crate::utils::messages::{LOGIN_ERROR, LOGIN_OK};
use crate::utils::{CLAVE_LOGIN_ID, USUARIO_LOGIN_ID};

pub async fn iniciar_sesion<T: Transport>(api: &ApiClient<T>, usuario: &str, clave: &str) -> EditorResult<()> {
    api.login_admin(usuario.trim(), clave.trim()).await
}

/// Texto del alert para un login fallido
pub fn mensaje_error_login(error: &EditorError) -> String {
    match error.server_message() {
        Some(message) => format!("❌ {}", message),
        None => LOGIN_ERROR.to_string(),
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    api: ApiClient,
}

impl LoginViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `loginAdmin`: en éxito recarga la página; la sesión la maneja el backend
    pub fn login(&self, event: &Event) {
        event.prevent_default();

        let (Some(usuario), Some(clave)) = (
            get_typed_by_id::<HtmlInputElement>(USUARIO_LOGIN_ID),
            get_typed_by_id::<HtmlInputElement>(CLAVE_LOGIN_ID),
        ) else {
            log::warn!("❌ Faltan los inputs {} / {}", USUARIO_LOGIN_ID, CLAVE_LOGIN_ID);
            return;
        };

        let api = self.api.clone();
        let usuario = usuario.value();
        let clave = clave.value();
        wasm_bindgen_futures::spawn_local(async move {
            match iniciar_sesion(&api, &usuario, &clave).await {
                Ok(()) => {
                    log::info!("✅ Login admin correcto");
                    alert(LOGIN_OK);
                    if let Err(e) = reload() {
                        log::error!("❌ No se pudo recargar la página: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ Error en login: {}", e);
                    alert(&mensaje_error_login(&e));
                }
            }
        });
    }
}
