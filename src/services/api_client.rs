// ============================================================================
// API CLIENT - Todas las peticiones de la página pasan por aquí
// ============================================================================
// - Antes de enviar: interceptor anti-CSRF
// - Si falla (transporte, status no 2xx o JSON inválido): ErrorReporter
// Los componentes no tienen manejo de errores propio.
// ============================================================================

use std::rc::Rc;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::services::csrf::CsrfInterceptor;
use crate::services::error_reporter::ErrorReporter;

#[derive(Clone)]
pub struct ApiClient {
    interceptor: Rc<CsrfInterceptor>,
    reporter: Rc<ErrorReporter>,
}

fn parse_method(method: &str) -> Option<Method> {
    let method = match method.trim().to_ascii_uppercase().as_str() {
        "GET" => Method::GET,
        "HEAD" => Method::HEAD,
        "OPTIONS" => Method::OPTIONS,
        "TRACE" => Method::TRACE,
        "POST" => Method::POST,
        "PUT" => Method::PUT,
        "PATCH" => Method::PATCH,
        "DELETE" => Method::DELETE,
        _ => return None,
    };
    Some(method)
}

impl ApiClient {
    pub fn new(interceptor: CsrfInterceptor, reporter: Rc<ErrorReporter>) -> Self {
        Self {
            interceptor: Rc::new(interceptor),
            reporter,
        }
    }

    /// GET que devuelve JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.send("GET", url).await?;
        self.decode(response).await
    }

    /// GET que devuelve un fragmento HTML
    pub async fn get_text(&self, url: &str) -> Result<String, ClientError> {
        let response = self.send("GET", url).await?;
        response
            .text()
            .await
            .map_err(|e| self.fail(ClientError::Decode(e.to_string())))
    }

    /// POST sin cuerpo que devuelve JSON
    pub async fn post_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.send("POST", url).await?;
        self.decode(response).await
    }

    /// Envía la petición; cualquier fallo ya está reportado cuando vuelve `Err`
    pub async fn send(&self, method: &str, url: &str) -> Result<Response, ClientError> {
        let http_method = parse_method(method).ok_or_else(|| {
            self.fail(ClientError::Network(format!("unsupported method {}", method)))
        })?;

        let mut request = RequestBuilder::new(url).method(http_method);
        if let Some((name, token)) = self.interceptor.header_for(method, url) {
            request = request.header(name, token);
        }

        log::debug!("🌐 {} {}", method, url);

        let response = request
            .send()
            .await
            .map_err(|e| self.fail(ClientError::Network(e.to_string())))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.fail(ClientError::Status { status, body }));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| self.fail(ClientError::Decode(e.to_string())))
    }

    fn fail(&self, error: ClientError) -> ClientError {
        self.reporter.report(&error);
        error
    }
}
