use serde_json::{Map, Value};

use crate::error::{EditorError, EditorResult};
use crate::services::{ApiClient, Transport};
use crate::state::PageHooks;
use crate::utils::messages::{FIRESTORE_ERROR_RED, FIRESTORE_ERROR_SERVIDOR};
use crate::viewmodels::reportar_error;

/// `id` no vacío y `datos` un objeto con al menos un campo
pub fn validar_datos<'a>(id: &str, datos: &'a Value) -> EditorResult<&'a Map<String, Value>> {
    match datos.as_object() {
        Some(campos) if !id.is_empty() && !campos.is_empty() => Ok(campos),
        _ => Err(EditorError::Validation(format!(
            "Datos incompletos para actualizar Firestore: id={:?} datos={}",
            id, datos
        ))),
    }
}

pub async fn enviar_actualizacion<T: Transport>(api: &ApiClient<T>, id: &str, datos: &Value) -> EditorResult<()> {
    let campos = validar_datos(id, datos)?;
    api.actualizar_firestore(id, campos).await
}

/// Primitiva de sincronización genérica: no toca el DOM
#[derive(Clone)]
pub struct FirestoreViewModel {
    api: ApiClient,
    hooks: PageHooks,
}

impl FirestoreViewModel {
    pub fn new(api: ApiClient, hooks: PageHooks) -> Self {
        Self { api, hooks }
    }

    pub fn actualizar(&self, id: String, datos: Value) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match enviar_actualizacion(&vm.api, &id, &datos).await {
                Ok(()) => {
                    log::info!("✅ Firestore actualizado para {}", id);
                    vm.hooks.aviso_firestore.fire();
                }
                // Datos incompletos: solo warning, como un guard
                Err(EditorError::Validation(detalle)) => log::warn!("⚠️ {}", detalle),
                Err(e) => reportar_error(&e, FIRESTORE_ERROR_SERVIDOR, FIRESTORE_ERROR_RED, None),
            }
        });
    }
}
