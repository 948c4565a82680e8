use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{EditorError, EditorResult};
use crate::models::CartItem;
use crate::utils::STATUS_OK;

/// `/actualizar-precio`
#[derive(Debug, Serialize)]
pub struct PrecioRequest<'a> {
    pub id: &'a str,
    #[serde(rename = "nuevoPrecio")]
    pub nuevo_precio: f64,
}

/// `/actualizar-talles` desde el editor con prompt
#[derive(Debug, Serialize)]
pub struct TallesRequest<'a> {
    pub id: &'a str,
    pub talles: &'a [String],
}

/// `/actualizar-talles` desde el input `talles_<id>` (forma CSV)
#[derive(Debug, Serialize)]
pub struct TallesCsvRequest<'a> {
    pub id_base: &'a str,
    #[serde(rename = "nuevoTalles")]
    pub nuevo_talles: String,
}

/// `/actualizar-firestore`: `{id, ...datos}`
#[derive(Debug, Serialize)]
pub struct FirestoreRequest<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub datos: Map<String, Value>,
}

impl<'a> FirestoreRequest<'a> {
    /// Un `id` dentro de `datos` nunca pisa el `id` del producto
    pub fn new(id: &'a str, datos: &Map<String, Value>) -> Self {
        let mut datos = datos.clone();
        datos.remove("id");
        Self { id, datos }
    }
}

/// `/login-admin`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub usuario: &'a str,
    pub clave: &'a str,
}

/// `/pagar`
#[derive(Debug, Serialize)]
pub struct PagarRequest<'a> {
    pub carrito: &'a [CartItem],
}

/// Respuesta común de los endpoints de edición y login.
/// En errores el backend a veces manda `{error: "..."}` sin `status`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }

    pub fn into_result(self) -> EditorResult<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(EditorError::backend(self.message.or(self.error)))
        }
    }
}

/// Respuesta de `/pagar`
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PagoResponse {
    #[serde(default)]
    pub init_point: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PagoResponse {
    /// URL de Mercado Pago, si vino una no vacía
    pub fn into_result(self) -> EditorResult<String> {
        match self.init_point {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(EditorError::backend(self.error)),
        }
    }
}
