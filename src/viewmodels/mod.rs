// ============================================================================
// VIEWMODELS - Lógica de edición inline, login y carrito
// ============================================================================
// Cada viewmodel separa un núcleo async sin DOM (testeable con un Transport
// falso) del flujo que lee inputs, hace spawn_local y reconcilia la página.
// ============================================================================

pub mod precio_viewmodel;
pub mod talles_viewmodel;
pub mod firestore_viewmodel;
pub mod login_viewmodel;
pub mod cart_viewmodel;

pub use precio_viewmodel::PrecioViewModel;
pub use talles_viewmodel::TallesViewModel;
pub use firestore_viewmodel::FirestoreViewModel;
pub use login_viewmodel::LoginViewModel;
pub use cart_viewmodel::CartViewModel;

use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{add_class, alert, get_element_by_id, show_temporarily};
use crate::error::EditorError;
use crate::utils::AVISO_PRECIO_ID;

/// Loguea el error, marca el campo como inválido y avisa al usuario.
/// Los errores de red y los rechazos del backend llevan mensajes distintos.
pub(crate) fn reportar_error(error: &EditorError, msg_servidor: &str, msg_red: &str, campo: Option<&Element>) {
    log::error!("❌ {}", error);

    if let Some(campo) = campo {
        if let Err(e) = add_class(campo, &CONFIG.ui_config.invalid_class) {
            log::warn!("⚠️ No se pudo marcar el campo como inválido: {:?}", e);
        }
    }

    if error.is_network() {
        alert(msg_red);
    } else {
        alert(msg_servidor);
    }
}

/// Aviso por defecto tras guardar un precio: muestra `#avisoPrecio` un rato
pub fn mostrar_aviso_precio() {
    let Some(aviso) = get_element_by_id(AVISO_PRECIO_ID) else {
        log::warn!("⚠️ No hay elemento #{} en la página", AVISO_PRECIO_ID);
        return;
    };

    if let Err(e) = show_temporarily(&aviso, CONFIG.ui_config.aviso_precio_ms) {
        log::error!("❌ Error mostrando aviso de precio: {:?}", e);
    }
}
