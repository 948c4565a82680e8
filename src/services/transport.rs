// ============================================================================
// TRANSPORTE - POST JSON -> JSON
// ============================================================================
// ApiClient habla con el backend a través de este trait: en el navegador
// usa gloo-net, en los tests un transporte que graba las llamadas
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::error::EditorResult;

// Los futures no son Send: todo corre con spawn_local en el hilo principal
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> EditorResult<Value>;
}

/// Transporte real (fetch del navegador vía gloo-net)
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> EditorResult<Value> {
        log::debug!("📡 POST {} con: {}", url, body);

        let response = Request::post(url).json(body)?.send().await?;

        let status = response.status();
        log::debug!("📬 Respuesta recibida del backend: {}", status);

        // Los 4xx/5xx también traen JSON con el mensaje del servidor
        let text = response.text().await?;
        Ok(serde_json::from_str::<Value>(&text)?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use crate::error::EditorError;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Graba cada POST y responde en orden con lo encolado
    #[derive(Clone, Default)]
    pub struct MockTransport {
        calls: Rc<RefCell<Vec<(String, Value)>>>,
        responses: Rc<RefCell<VecDeque<EditorResult<Value>>>>,
    }

    impl MockTransport {
        pub fn respond(self, response: EditorResult<Value>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }

        pub fn calls(&self) -> Vec<(String, Value)> {
            self.calls.borrow().clone()
        }
    }

    impl Transport for MockTransport {
        async fn post_json(&self, url: &str, body: &Value) -> EditorResult<Value> {
            self.calls.borrow_mut().push((url.to_string(), body.clone()));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(EditorError::Network("sin respuesta encolada".to_string())))
        }
    }
}
