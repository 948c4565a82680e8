// ============================================================================
// CONSTANTES - Endpoints y convenciones de IDs del DOM
// ============================================================================

// Endpoints del backend (rutas relativas a CONFIG.backend_url)
pub const ENDPOINT_PRECIO: &str = "/actualizar-precio";
pub const ENDPOINT_TALLES: &str = "/actualizar-talles";
pub const ENDPOINT_FIRESTORE: &str = "/actualizar-firestore";
pub const ENDPOINT_LOGIN: &str = "/login-admin";
pub const ENDPOINT_PAGAR: &str = "/pagar";

// IDs fijos de la página
pub const USUARIO_LOGIN_ID: &str = "usuario_login";
pub const CLAVE_LOGIN_ID: &str = "clave_login";
pub const AVISO_PRECIO_ID: &str = "avisoPrecio";

pub const STATUS_OK: &str = "ok";

/// Span de precio: `precio_<id>`
pub fn precio_id(id: &str) -> String {
    format!("precio_{}", id)
}

/// Input de edición de precio: `input_precio_<id>`
pub fn input_precio_id(id: &str) -> String {
    format!("input_precio_{}", id)
}

/// Select de talles: `talle_<id>`
pub fn talle_select_id(id: &str) -> String {
    format!("talle_{}", id)
}

/// Span o input de talles: `talles_<id>`
pub fn talles_id(id: &str) -> String {
    format!("talles_{}", id)
}

/// ID del span de precio para un item del carrito: usa `id_base`, o el
/// nombre con espacios reemplazados por `_` si no hay `id_base`
pub fn precio_id_for_item(id_base: &str, nombre: &str) -> String {
    if id_base.is_empty() {
        precio_id(&nombre.replace(' ', "_"))
    } else {
        precio_id(id_base)
    }
}
