// ============================================================================
// POPOVER VIEWMODEL - Tarjetas de perfil al pasar el puntero
// ============================================================================
// Un único hueco de apertura compartido por toda la página: solo un popover
// puede estar en proceso de abrirse a la vez. Cada disparador tiene su propio
// PopoverState y su temporizador de cierre.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::config::CONFIG;
use crate::dom;
use crate::services::{fetch_profile_card, ApiClient};
use crate::state::{PopoverAction, PopoverState};
use crate::views::popover::{remove_popover, render_popover};

#[derive(Clone)]
pub struct ProfilePopoverController {
    inner: Rc<ControllerInner>,
}

struct ControllerInner {
    client: ApiClient,
    open_slot: RefCell<Option<(usize, Timeout)>>,
    triggers: RefCell<Vec<Rc<Trigger>>>,
    open_delay_ms: u32,
    close_delay_ms: u32,
}

struct Trigger {
    index: usize,
    element: Element,
    state: RefCell<PopoverState>,
    popover: RefCell<Option<Element>>,
    hide_timer: RefCell<Option<Timeout>>,
}

impl ProfilePopoverController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                client,
                open_slot: RefCell::new(None),
                triggers: RefCell::new(Vec::new()),
                open_delay_ms: CONFIG.timing.popover_open_delay_ms,
                close_delay_ms: CONFIG.timing.popover_close_delay_ms,
            }),
        }
    }

    /// Registra todos los elementos que coinciden con `selector`
    pub fn bind_all(&self, selector: &str) -> Result<usize, JsValue> {
        let elements = dom::query_selector_all(selector)?;
        let count = elements.len();
        for element in elements {
            self.bind(element)?;
        }
        log::debug!("👤 {} disparadores de perfil registrados", count);
        Ok(count)
    }

    pub fn bind(&self, element: Element) -> Result<(), JsValue> {
        let trigger = {
            let mut triggers = self.inner.triggers.borrow_mut();
            let trigger = Rc::new(Trigger {
                index: triggers.len(),
                element,
                state: RefCell::new(PopoverState::new()),
                popover: RefCell::new(None),
                hide_timer: RefCell::new(None),
            });
            triggers.push(trigger.clone());
            trigger
        };

        let on_enter = {
            let weak = Rc::downgrade(&self.inner);
            let trigger = trigger.clone();
            move |_: Event| {
                let action = trigger.state.borrow_mut().pointer_enter();
                ControllerInner::apply(&weak, &trigger, action);
            }
        };
        let on_leave = {
            let weak = Rc::downgrade(&self.inner);
            let trigger = trigger.clone();
            move |_: Event| {
                let action = trigger.state.borrow_mut().pointer_leave();
                ControllerInner::apply(&weak, &trigger, action);
            }
        };
        dom::on_hover(&trigger.element, on_enter, on_leave)
    }
}

impl ControllerInner {
    fn apply(weak: &Weak<Self>, trigger: &Rc<Trigger>, action: PopoverAction) {
        let Some(this) = weak.upgrade() else {
            return;
        };
        match action {
            PopoverAction::StartOpenTimer => this.start_open_timer(weak, trigger),
            PopoverAction::CancelOpenTimer => this.cancel_open_timer(trigger.index),
            PopoverAction::Fetch => this.fetch(weak, trigger),
            PopoverAction::ScheduleHide => this.schedule_hide(weak, trigger),
            PopoverAction::CancelHide => {
                trigger.hide_timer.borrow_mut().take();
            }
            PopoverAction::Hide => {
                if let Some(popover) = trigger.popover.borrow_mut().take() {
                    remove_popover(&popover);
                }
            }
            // Render y Discard solo salen de la respuesta del fetch
            PopoverAction::Render | PopoverAction::Discard | PopoverAction::None => {}
        }
    }

    fn start_open_timer(&self, weak: &Weak<Self>, trigger: &Rc<Trigger>) {
        let previous = self.open_slot.borrow_mut().take();
        if let Some((owner, _timer)) = previous {
            if owner != trigger.index {
                if let Some(other) = self.triggers.borrow().get(owner) {
                    other.state.borrow_mut().open_timer_preempted();
                }
            }
        }

        let weak_cb = weak.clone();
        let trigger_cb = trigger.clone();
        let timer = Timeout::new(self.open_delay_ms, move || {
            let action = trigger_cb.state.borrow_mut().open_timer_fired();
            ControllerInner::apply(&weak_cb, &trigger_cb, action);
        });
        *self.open_slot.borrow_mut() = Some((trigger.index, timer));
    }

    fn cancel_open_timer(&self, index: usize) {
        let mut slot = self.open_slot.borrow_mut();
        if matches!(slot.as_ref(), Some((owner, _)) if *owner == index) {
            slot.take();
        }
    }

    fn fetch(&self, weak: &Weak<Self>, trigger: &Rc<Trigger>) {
        let Some(url) = dom::data_attr(&trigger.element, "href") else {
            log::warn!("⚠️ Disparador de perfil sin data-href");
            trigger.state.borrow_mut().fetch_failed();
            return;
        };

        let client = self.client.clone();
        let weak = weak.clone();
        let trigger = trigger.clone();
        spawn_local(async move {
            match fetch_profile_card(&client, &url).await {
                Ok(html) => {
                    let action = trigger.state.borrow_mut().fetch_succeeded();
                    match action {
                        PopoverAction::Render => {
                            if let Err(e) = ControllerInner::render(&weak, &trigger, &html) {
                                log::error!("❌ Error renderizando popover: {:?}", e);
                            }
                        }
                        _ => log::debug!("👤 Perfil recibido tras salir del disparador, descartado"),
                    }
                }
                Err(_) => {
                    trigger.state.borrow_mut().fetch_failed();
                }
            }
        });
    }

    fn render(weak: &Weak<Self>, trigger: &Rc<Trigger>, html: &str) -> Result<(), JsValue> {
        if let Some(old) = trigger.popover.borrow_mut().take() {
            remove_popover(&old);
        }

        let popover = render_popover(&trigger.element, html)?;

        let weak_cb = weak.clone();
        let trigger_cb = trigger.clone();
        dom::on_event(&popover, "mouseleave", move |_| {
            let action = trigger_cb.state.borrow_mut().popover_leave();
            ControllerInner::apply(&weak_cb, &trigger_cb, action);
        })?;

        *trigger.popover.borrow_mut() = Some(popover);
        Ok(())
    }

    fn schedule_hide(&self, weak: &Weak<Self>, trigger: &Rc<Trigger>) {
        let weak_cb = weak.clone();
        let trigger_cb = trigger.clone();
        let timer = Timeout::new(self.close_delay_ms, move || {
            let over_popover = trigger_cb
                .popover
                .borrow()
                .as_ref()
                .map(dom::is_hovered)
                .unwrap_or(false);
            let action = trigger_cb.state.borrow_mut().hide_timer_fired(over_popover);
            ControllerInner::apply(&weak_cb, &trigger_cb, action);
        });
        *trigger.hide_timer.borrow_mut() = Some(timer);
    }
}
