// ============================================================================
// ERRORES - Tres tipos de falla + errores de DOM
// ============================================================================
// Validación local: aborta antes de la red
// Backend: status != "ok" (trae el mensaje del servidor si hubo)
// Red: transporte o respuesta ilegible
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// Entrada inválida o nodo del DOM faltante
    #[error("Validación: {0}")]
    Validation(String),

    /// El backend respondió algo distinto de `status: "ok"`
    #[error("Backend: {}", .message.as_deref().unwrap_or("respuesta sin status ok"))]
    Backend { message: Option<String> },

    /// Falla de transporte o de parseo de la respuesta
    #[error("Red: {0}")]
    Network(String),

    /// Una llamada al DOM lanzó excepción
    #[error("DOM: {0}")]
    Dom(String),
}

impl EditorError {
    pub fn backend(message: Option<String>) -> Self {
        Self::Backend { message }
    }

    /// Mensaje que devolvió el servidor, si lo hubo
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<gloo_net::Error> for EditorError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Network(format!("Parse error: {}", e))
    }
}

impl From<JsValue> for EditorError {
    fn from(e: JsValue) -> Self {
        Self::Dom(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}

impl From<EditorError> for JsValue {
    fn from(e: EditorError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
