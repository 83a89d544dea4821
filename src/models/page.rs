// ============================================================================
// CONTEXTO DE PÁGINA - Valores globales que inyecta el template del servidor
// ============================================================================

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::config::CONFIG;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PageContext {
    pub csrf_token: Option<String>,
    pub is_authenticated: bool,
    /// URL completa de la página; base para resolver URLs relativas
    pub page_url: String,
    pub lang: String,
}

impl PageContext {
    /// Lee `window.csrf_token`, `window.is_authenticated` y el idioma del documento.
    /// El token cae a `<meta name="csrf-token">` si el template no define la variable.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let csrf_token = Reflect::get(&window, &JsValue::from_str("csrf_token"))
            .ok()
            .and_then(|v| v.as_string())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                document
                    .query_selector("meta[name='csrf-token']")
                    .ok()
                    .flatten()
                    .and_then(|meta| meta.get_attribute("content"))
            });

        let is_authenticated = Reflect::get(&window, &JsValue::from_str("is_authenticated"))
            .ok()
            .map(|v| truthy(&v))
            .unwrap_or(false);

        let page_url = window.location().href().unwrap_or_default();

        let lang = document
            .document_element()
            .and_then(|root| root.get_attribute("lang"))
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| CONFIG.default_lang.clone());

        Some(Self {
            csrf_token,
            is_authenticated,
            page_url,
            lang,
        })
    }
}

/// Los templates escriben `true`/`false` de Jinja o `"True"`/`"False"` como cadena
fn truthy(value: &JsValue) -> bool {
    if let Some(b) = value.as_bool() {
        return b;
    }
    match value.as_string() {
        Some(s) => parse_flag(&s),
        None => value.as_f64().map(|n| n != 0.0).unwrap_or(false),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_strings_from_templates() {
        assert!(parse_flag("True"));
        assert!(parse_flag(" true "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("False"));
        assert!(!parse_flag(""));
    }
}
