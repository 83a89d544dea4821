// ============================================================================
// IMAGE FALLBACK - Placeholder para imágenes rotas
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::dom;
use crate::utils::FALLBACK_APPLIED_ATTR;

/// Una sola sustitución por imagen; si el placeholder también falla no hay bucle
pub fn should_apply_fallback(current_src: &str, already_applied: bool, fallback: &str) -> bool {
    !already_applied && !current_src.ends_with(fallback)
}

/// Listener en captura sobre `document`: cubre también imágenes añadidas después
pub fn bind_image_fallback(fallback: String) -> Result<(), JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;

    dom::on_event_capture(&document, "error", move |event| {
        let Some(img) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };

        let already_applied = img.has_attribute(FALLBACK_APPLIED_ATTR);
        if !should_apply_fallback(&img.src(), already_applied, &fallback) {
            return;
        }

        log::debug!("🖼️ Imagen rota, usando placeholder: {}", img.src());
        // Sin la marca, la comprobación del src sigue cortando el bucle
        if let Err(e) = img.set_attribute(FALLBACK_APPLIED_ATTR, "true") {
            log::error!("❌ Error marcando imagen: {:?}", e);
        }
        img.set_src(&fallback);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "/static/imgs/default.jpg";

    #[test]
    fn broken_image_gets_placeholder_once() {
        assert!(should_apply_fallback("https://blog.example.com/avatars/1.png", false, FALLBACK));
        assert!(!should_apply_fallback("https://blog.example.com/avatars/1.png", true, FALLBACK));
    }

    #[test]
    fn missing_placeholder_does_not_loop() {
        assert!(!should_apply_fallback(
            "https://blog.example.com/static/imgs/default.jpg",
            false,
            FALLBACK
        ));
    }

    #[test]
    fn unmarked_placeholder_is_still_left_alone() {
        // Placeholder relativo resuelto a absoluto por el navegador
        assert!(!should_apply_fallback("http://localhost:5000/static/imgs/default.jpg", false, FALLBACK));
        assert!(should_apply_fallback("http://localhost:5000/static/imgs/other.jpg", false, FALLBACK));
    }
}
