// ============================================================================
// INTERCEPTOR ANTI-CSRF
// ============================================================================
// Añade la cabecera del token a toda petición que modifica estado y va al
// mismo origen que la página. GET/HEAD/OPTIONS/TRACE y peticiones a otros
// orígenes salen sin cabecera.
// ============================================================================

use url::Url;

use crate::utils::SAFE_METHODS;

#[derive(Clone, Debug)]
pub struct CsrfInterceptor {
    header: String,
    token: Option<String>,
    page_url: String,
}

impl CsrfInterceptor {
    pub fn new(header: impl Into<String>, token: Option<String>, page_url: impl Into<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        if token.is_none() {
            log::warn!("⚠️ CSRF: la página no define token, las peticiones POST irán sin cabecera");
        }
        Self {
            header: header.into(),
            token,
            page_url: page_url.into(),
        }
    }

    /// Cabecera `(nombre, valor)` a adjuntar, si corresponde
    pub fn header_for(&self, method: &str, target: &str) -> Option<(&str, &str)> {
        if is_safe_method(method) || !is_same_origin(target, &self.page_url) {
            return None;
        }
        self.token
            .as_deref()
            .map(|token| (self.header.as_str(), token))
    }
}

pub fn is_safe_method(method: &str) -> bool {
    SAFE_METHODS
        .iter()
        .any(|safe| safe.eq_ignore_ascii_case(method.trim()))
}

/// Resuelve `target` contra la URL de la página y compara orígenes
pub fn is_same_origin(target: &str, page_url: &str) -> bool {
    match Url::parse(page_url) {
        Ok(base) => base
            .join(target)
            .map(|resolved| resolved.origin() == base.origin())
            .unwrap_or(false),
        // Sin URL base solo se puede confiar en rutas relativas
        Err(_) => Url::parse(target).is_err() && !target.starts_with("//"),
    }
}
