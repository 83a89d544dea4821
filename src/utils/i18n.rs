// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma.
/// Acepta etiquetas BCP 47 ("zh-CN", "en-US"): solo cuenta el idioma principal.
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let primary = lang
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match primary.as_str() {
        "en" => {
            translations.insert("server_error", "Server response error, please retry later.");
        }
        "es" => {
            translations.insert("server_error", "Error en la respuesta del servidor, reintenta más tarde.");
        }
        _ => {
            // Idioma del servidor
            translations.insert("server_error", "服务器响应错误，请稍后重试。");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_chinese() {
        assert_eq!(t("server_error", "zh-CN"), "服务器响应错误，请稍后重试。");
        assert_eq!(t("server_error", "fr"), "服务器响应错误，请稍后重试。");
    }

    #[test]
    fn regional_tags_use_primary_language() {
        assert_eq!(t("server_error", "en-US"), "Server response error, please retry later.");
        assert_eq!(t("server_error", "ES"), t("server_error", "es_MX"));
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", "en"), "no_such_key");
    }
}
