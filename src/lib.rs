// ============================================================================
// BLOG CLIENT - Capa de interacción del blog (Rust + WASM)
// ============================================================================
// - Services: peticiones HTTP (CSRF + reporte de errores centralizado)
// - State: máquinas de estado puras (toast, popover, badge)
// - ViewModels: estado + temporizadores sobre elementos del DOM
// - Views: enlaces directos DOM → servidor (modales, imágenes, notificaciones)
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::models::ToastCategory;

pub use crate::error::ClientError;

// Instancia única montada sobre la página
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Blog client - Rust + WASM");

    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if dom_still_loading(&document.ready_state()) {
        dom::on_event(&document, "DOMContentLoaded", |_| {
            if let Err(e) = mount_app() {
                log::error!("❌ Error montando la app: {:?}", e);
            }
        })
    } else {
        mount_app()
    }
}

/// `document.readyState` mientras el parser no ha terminado
fn dom_still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn mount_app() -> Result<(), JsValue> {
    let already_mounted = APP.with(|cell| cell.borrow().is_some());
    if already_mounted {
        log::warn!("⚠️ App ya montada, ignorando");
        return Ok(());
    }

    let app = App::new()?;
    app.mount()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

/// Mostrar un toast desde scripts inline de los templates
#[wasm_bindgen]
pub fn blog_toast(message: &str, category: Option<String>) {
    let category = category
        .as_deref()
        .map(ToastCategory::parse)
        .unwrap_or_default();
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.toast().show(message, category),
        None => log::warn!("⚠️ blog_toast antes de montar la app"),
    });
}

/// Forzar un sondeo del badge de notificaciones
#[wasm_bindgen]
pub fn blog_refresh_notifications() {
    APP.with(|cell| {
        if let Some(poller) = cell.borrow().as_ref().and_then(|app| app.poller()) {
            poller.refresh();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_waits_only_while_parsing() {
        assert!(dom_still_loading("loading"));
        assert!(!dom_still_loading("interactive"));
        assert!(!dom_still_loading("complete"));
    }
}
