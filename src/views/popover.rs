// ============================================================================
// POPOVER VIEW - Tarjeta flotante anclada al disparador
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;
use crate::utils::{POPOVER_CLASS, POPOVER_CONTENT_CLASS, POPOVER_OFFSET_PX};

/// Crea el popover con el HTML del servidor y lo posiciona bajo `anchor`
pub fn render_popover(anchor: &Element, html: &str) -> Result<Element, JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;

    let popover = dom::create_element("div")?;
    popover.set_class_name(&format!("{} bottom", POPOVER_CLASS));
    popover.set_attribute("role", "tooltip")?;

    let content = dom::create_element("div")?;
    content.set_class_name(POPOVER_CONTENT_CLASS);
    content.set_inner_html(html);
    popover.append_child(&content)?;

    dom::set_style(&popover, "position", "absolute")?;
    dom::set_style(&popover, "display", "block")?;
    body.append_child(&popover)?;

    position_below(anchor, &popover)?;
    Ok(popover)
}

fn position_below(anchor: &Element, popover: &Element) -> Result<(), JsValue> {
    let window = dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let rect = anchor.get_bounding_client_rect();
    let scroll_x = window.scroll_x()?;
    let scroll_y = window.scroll_y()?;

    let (top, left) = popover_origin(
        rect.left(),
        rect.bottom(),
        rect.width(),
        f64::from(popover.client_width()),
        scroll_x,
        scroll_y,
    );
    dom::set_style(popover, "top", &format!("{}px", top))?;
    dom::set_style(popover, "left", &format!("{}px", left))
}

/// Centrado horizontal bajo el disparador, sin salirse por la izquierda
fn popover_origin(
    anchor_left: f64,
    anchor_bottom: f64,
    anchor_width: f64,
    popover_width: f64,
    scroll_x: f64,
    scroll_y: f64,
) -> (f64, f64) {
    let top = anchor_bottom + scroll_y + POPOVER_OFFSET_PX;
    let left = anchor_left + scroll_x + anchor_width / 2.0 - popover_width / 2.0;
    (top, left.max(scroll_x))
}

pub fn remove_popover(popover: &Element) {
    popover.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_below_anchor_including_scroll() {
        let (top, left) = popover_origin(100.0, 40.0, 60.0, 200.0, 0.0, 500.0);
        assert_eq!(top, 40.0 + 500.0 + POPOVER_OFFSET_PX);
        assert_eq!(left, 100.0 + 30.0 - 100.0);
    }

    #[test]
    fn never_overflows_left_edge() {
        let (_, left) = popover_origin(5.0, 10.0, 20.0, 300.0, 0.0, 0.0);
        assert_eq!(left, 0.0);
    }
}
