// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO toca el DOM ni el carrito: arma el body, hace el POST y traduce
// la respuesta a Ok / EditorError
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::CONFIG;
use crate::error::EditorResult;
use crate::models::{
    CartItem, FirestoreRequest, LoginRequest, PagarRequest, PagoResponse, PrecioRequest,
    StatusResponse, TallesCsvRequest, TallesRequest,
};
use crate::services::transport::{HttpTransport, Transport};
use crate::utils::{
    join_talles_csv, ENDPOINT_FIRESTORE, ENDPOINT_LOGIN, ENDPOINT_PAGAR, ENDPOINT_PRECIO,
    ENDPOINT_TALLES,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn new() -> Self {
        Self::with_transport(CONFIG.backend_url.clone(), HttpTransport)
    }
}

impl Default for ApiClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> EditorResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let body = serde_json::to_value(body)?;
        let payload = self.transport.post_json(&url, &body).await?;
        log::debug!("📨 Payload recibido de {}: {}", path, payload);
        Ok(serde_json::from_value(payload)?)
    }

    /// Actualizar precio de un producto
    pub async fn actualizar_precio(&self, id: &str, nuevo_precio: f64) -> EditorResult<()> {
        log::info!("💰 Actualizando precio: {} → {}", id, nuevo_precio);
        self.post::<_, StatusResponse>(ENDPOINT_PRECIO, &PrecioRequest { id, nuevo_precio })
            .await?
            .into_result()
    }

    /// Actualizar talles (forma `{id, talles: [...]}`)
    pub async fn actualizar_talles(&self, id: &str, talles: &[String]) -> EditorResult<()> {
        log::info!("👟 Actualizando talles: {} → {:?}", id, talles);
        self.post::<_, StatusResponse>(ENDPOINT_TALLES, &TallesRequest { id, talles })
            .await?
            .into_result()
    }

    /// Actualizar talles (forma `{id_base, nuevoTalles: "a,b,c"}`)
    pub async fn actualizar_talles_csv(&self, id_base: &str, talles: &[String]) -> EditorResult<()> {
        let request = TallesCsvRequest {
            id_base,
            nuevo_talles: join_talles_csv(talles),
        };
        log::info!("👟 Actualizando talles (csv): {} → {}", id_base, request.nuevo_talles);
        self.post::<_, StatusResponse>(ENDPOINT_TALLES, &request)
            .await?
            .into_result()
    }

    /// Update genérico de campos del producto
    pub async fn actualizar_firestore(&self, id: &str, datos: &Map<String, Value>) -> EditorResult<()> {
        log::info!("📡 Enviando actualización a Firestore para {} → {:?}", id, datos);
        self.post::<_, StatusResponse>(ENDPOINT_FIRESTORE, &FirestoreRequest::new(id, datos))
            .await?
            .into_result()
    }

    /// Login del administrador
    pub async fn login_admin(&self, usuario: &str, clave: &str) -> EditorResult<()> {
        log::info!("🔐 Login admin para usuario: {}", usuario);
        self.post::<_, StatusResponse>(ENDPOINT_LOGIN, &LoginRequest { usuario, clave })
            .await?
            .into_result()
    }

    /// Crear preferencia de pago; devuelve el `init_point`
    pub async fn pagar(&self, carrito: &[CartItem]) -> EditorResult<String> {
        log::info!("🛒 Iniciando pago con {} items", carrito.len());
        self.post::<_, PagoResponse>(ENDPOINT_PAGAR, &PagarRequest { carrito })
            .await?
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::services::transport::mock::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::with_transport("", mock.clone())
    }

    #[test]
    fn actualizar_precio_posts_once() {
        let mock = MockTransport::default().respond(Ok(json!({"status": "ok"})));

        block_on(client(&mock).actualizar_precio("P1", 1999.9)).unwrap();

        assert_eq!(
            mock.calls(),
            vec![("/actualizar-precio".to_string(), json!({"id": "P1", "nuevoPrecio": 1999.9}))]
        );
    }

    #[test]
    fn base_url_prefixes_endpoint() {
        let mock = MockTransport::default().respond(Ok(json!({"status": "ok"})));
        let api = ApiClient::with_transport("https://tienda.example", mock.clone());

        block_on(api.login_admin("admin@tienda.com", "secreta")).unwrap();

        let (url, body) = &mock.calls()[0];
        assert_eq!(url, "https://tienda.example/login-admin");
        assert_eq!(body, &json!({"usuario": "admin@tienda.com", "clave": "secreta"}));
    }

    #[test]
    fn backend_error_status_is_reported() {
        let mock = MockTransport::default()
            .respond(Ok(json!({"status": "error", "message": "Usuario no registrado"})));

        let err = block_on(client(&mock).login_admin("x@y.com", "1")).unwrap_err();
        assert_eq!(err.server_message(), Some("Usuario no registrado"));
    }

    #[test]
    fn network_error_passes_through() {
        let mock = MockTransport::default()
            .respond(Err(EditorError::Network("Network error: failed to fetch".to_string())));

        let err = block_on(client(&mock).actualizar_talles("P1", &["S".to_string()])).unwrap_err();
        assert!(err.is_network());
    }

    #[test]
    fn talles_csv_joins_without_spaces() {
        let mock = MockTransport::default().respond(Ok(json!({"status": "ok"})));
        let talles = vec!["38".to_string(), "39".to_string()];

        block_on(client(&mock).actualizar_talles_csv("P7", &talles)).unwrap();

        assert_eq!(
            mock.calls()[0].1,
            json!({"id_base": "P7", "nuevoTalles": "38,39"})
        );
    }

    #[test]
    fn pagar_sends_whole_cart_and_returns_init_point() {
        let mock = MockTransport::default()
            .respond(Ok(json!({"init_point": "https://mp.example/init"})));
        let carrito = vec![
            CartItem::new("P1", "Remera", 1500.0, "M"),
            CartItem::new("P2", "Buzo", 3000.0, "L").with_cantidad(2),
        ];

        let url = block_on(client(&mock).pagar(&carrito)).unwrap();

        assert_eq!(url, "https://mp.example/init");
        let body = &mock.calls()[0].1;
        assert_eq!(body["carrito"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["carrito"][1]["cantidad"], json!(2));
    }

    #[test]
    fn pagar_without_init_point_fails() {
        let mock = MockTransport::default()
            .respond(Ok(json!({"error": "Error interno al generar el pago"})));

        let err = block_on(client(&mock).pagar(&[])).unwrap_err();
        assert_eq!(err.server_message(), Some("Error interno al generar el pago"));
    }
}
