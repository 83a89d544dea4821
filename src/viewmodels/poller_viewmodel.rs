// ============================================================================
// POLLER VIEWMODEL - Badge de notificaciones no leídas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom;
use crate::services::{fetch_unread_count, ApiClient};
use crate::state::BadgeUpdate;

#[derive(Clone)]
pub struct NotificationPoller {
    inner: Rc<PollerInner>,
}

struct PollerInner {
    badge: Element,
    client: ApiClient,
    interval: RefCell<Option<Interval>>,
}

impl NotificationPoller {
    pub fn new(badge: Element, client: ApiClient) -> Self {
        Self {
            inner: Rc::new(PollerInner {
                badge,
                client,
                interval: RefCell::new(None),
            }),
        }
    }

    /// Sondeo periódico; sin llamada inicial inmediata
    pub fn start(&self, interval_ms: u32) {
        if self.inner.interval.borrow().is_some() {
            log::warn!("⚠️ NotificationPoller: start ya fue llamado, ignorando");
            return;
        }
        let poller = self.clone();
        let interval = Interval::new(interval_ms, move || poller.refresh());
        *self.inner.interval.borrow_mut() = Some(interval);
        log::info!("⏰ Sondeo de notificaciones cada {} ms", interval_ms);
    }

    /// Un fallo deja el badge como estaba; el toast lo muestra ApiClient
    pub fn refresh(&self) {
        let Some(url) = dom::data_attr(&self.inner.badge, "href") else {
            log::warn!("⚠️ El badge de notificaciones no tiene data-href");
            return;
        };
        let inner = self.inner.clone();
        spawn_local(async move {
            if let Ok(count) = fetch_unread_count(&inner.client, &url).await {
                if let Err(e) = apply_update(&inner.badge, BadgeUpdate::from(count)) {
                    log::error!("❌ Error actualizando badge: {:?}", e);
                }
            }
        });
    }
}

fn apply_update(badge: &Element, update: BadgeUpdate) -> Result<(), JsValue> {
    match update {
        BadgeUpdate::Hide => dom::hide(badge),
        BadgeUpdate::Show(text) => {
            dom::show(badge)?;
            badge.set_text_content(Some(&text));
            Ok(())
        }
    }
}
