// ============================================================================
// APP - Monta la capa de interacción sobre la página del servidor
// ============================================================================
// Orden: interceptor CSRF + reporter de errores → listeners → sondeo de
// notificaciones (solo con sesión iniciada).
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom;
use crate::models::PageContext;
use crate::services::{ApiClient, CsrfInterceptor, ErrorReporter};
use crate::utils::t;
use crate::viewmodels::{NotificationPoller, ProfilePopoverController, ToastPresenter};
use crate::views::{bind_dismiss_controls, bind_image_fallback, bind_modals, bind_tooltips, DismissContext};

/// Aplicación principal
pub struct App {
    page: PageContext,
    toast: ToastPresenter,
    client: ApiClient,
    poller: Option<NotificationPoller>,
    popovers: ProfilePopoverController,
}

impl App {
    /// Crear la aplicación; no registra listeners todavía
    pub fn new() -> Result<Self, JsValue> {
        let page = PageContext::from_window()
            .ok_or_else(|| JsValue::from_str("No window/document"))?;

        let toast_element = match dom::get_element_by_id(&CONFIG.selectors.toast_id) {
            Some(element) => element,
            None => create_toast_element()?,
        };
        let toast = ToastPresenter::new(toast_element);

        let reporter = Rc::new(ErrorReporter::new(
            Rc::new(toast.clone()),
            t("server_error", &page.lang),
        ));
        let interceptor = CsrfInterceptor::new(
            CONFIG.csrf_header.clone(),
            page.csrf_token.clone(),
            page.page_url.clone(),
        );
        let client = ApiClient::new(interceptor, reporter);

        let poller = dom::get_element_by_id(&CONFIG.selectors.badge_id)
            .map(|badge| NotificationPoller::new(badge, client.clone()));
        if poller.is_none() {
            log::debug!("🔔 Página sin badge de notificaciones");
        }

        let popovers = ProfilePopoverController::new(client.clone());

        Ok(Self {
            page,
            toast,
            client,
            poller,
            popovers,
        })
    }

    /// Registrar listeners y arrancar el sondeo
    pub fn mount(&self) -> Result<(), JsValue> {
        bind_image_fallback(CONFIG.fallback_image.clone())?;

        let profiles = self.popovers.bind_all(&CONFIG.selectors.profile_trigger)?;
        let modals = bind_modals()?;
        let dismiss = bind_dismiss_controls(
            &CONFIG.selectors.dismiss_control,
            DismissContext {
                client: self.client.clone(),
                toast: self.toast.clone(),
                poller: self.poller.clone(),
            },
        )?;
        let tooltips = bind_tooltips(&CONFIG.selectors.tooltip)?;

        log::info!(
            "✅ Listeners: {} perfiles, {} modales, {} notificaciones, {} fechas",
            profiles,
            modals,
            dismiss,
            tooltips
        );

        if self.page.is_authenticated {
            if let Some(poller) = &self.poller {
                poller.start(CONFIG.timing.poll_interval_ms);
            }
        }
        Ok(())
    }

    pub fn toast(&self) -> &ToastPresenter {
        &self.toast
    }

    pub fn poller(&self) -> Option<&NotificationPoller> {
        self.poller.as_ref()
    }
}

/// Banner mínimo si el template no incluye `#toast`
fn create_toast_element() -> Result<Element, JsValue> {
    let body = dom::document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let toast = dom::create_element("div")?;
    toast.set_id(&CONFIG.selectors.toast_id);
    for (property, value) in [
        ("display", "none"),
        ("position", "fixed"),
        ("bottom", "24px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("padding", "8px 16px"),
        ("border-radius", "4px"),
        ("color", "#fff"),
        ("z-index", "1060"),
    ] {
        dom::set_style(&toast, property, value)?;
    }
    body.append_child(&toast)?;
    Ok(toast)
}
