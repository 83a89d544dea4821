// ============================================================================
// EVENT HANDLING - Registro de listeners sobre el markup del servidor
// ============================================================================
// Los listeners viven lo mismo que la página: closure.forget() mantiene vivo el
// closure y el navegador limpia el listener si el elemento se destruye.
// Los listeners sobre `document` solo se registran una vez, en App::mount().
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent};

/// Listener genérico sobre cualquier EventTarget
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener en fase de captura; necesario para eventos que no burbujean (`error` de <img>)
pub fn on_event_capture<F>(
    target: &EventTarget,
    event_type: &str,
    handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_capture(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// mouseenter + mouseleave sobre el mismo elemento (equivalente a `.hover(in, out)`)
pub fn on_hover<E, L>(target: &EventTarget, on_enter: E, on_leave: L) -> Result<(), JsValue>
where
    E: FnMut(Event) + 'static,
    L: FnMut(Event) + 'static,
{
    on_event(target, "mouseenter", on_enter)?;
    on_event(target, "mouseleave", on_leave)
}
