// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular el DOM del servidor
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::utils::HIDDEN_CLASS;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Leer un atributo `data-*` (sin el prefijo)
pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(&format!("data-{}", name))
        .filter(|v| !v.is_empty())
}

/// Establecer una propiedad de estilo inline
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property(property, value)
}

/// Mostrar elemento: quita `.hidden` y el `display: none` inline
pub fn show(element: &Element) -> Result<(), JsValue> {
    remove_class(element, HIDDEN_CLASS)?;
    set_style(element, "display", "")
}

/// Ocultar elemento con `display: none`
pub fn hide(element: &Element) -> Result<(), JsValue> {
    set_style(element, "display", "none")
}

/// Verificar si el puntero está sobre el elemento
pub fn is_hovered(element: &Element) -> bool {
    element.matches(":hover").unwrap_or(false)
}

/// Query selector (buscar elemento por selector CSS)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector all, devuelto como Vec de `Element`
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Query selector dentro de un elemento
pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}
