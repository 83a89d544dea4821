// ============================================================================
// TOAST VIEWMODEL - Banner transitorio de estado
// ============================================================================
// Un presentador por región de toast. Sin cola: cada show() reemplaza el
// mensaje y reinicia el temporizador de ocultado.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{self, BrowserTimers, TimerHost};
use crate::models::ToastCategory;
use crate::services::ToastSink;
use crate::state::ToastState;

/// Operaciones visuales del banner
pub trait ToastSurface {
    fn set_content(&self, message: &str, category: ToastCategory) -> Result<(), JsValue>;
    /// Visible con opacidad 0, listo para la transición
    fn begin_fade_in(&self, fade_ms: u32) -> Result<(), JsValue>;
    fn reveal(&self) -> Result<(), JsValue>;
    fn fade_out(&self) -> Result<(), JsValue>;
    fn hide(&self) -> Result<(), JsValue>;
}

impl ToastSurface for Element {
    fn set_content(&self, message: &str, category: ToastCategory) -> Result<(), JsValue> {
        dom::set_style(self, "background-color", category.background())?;
        self.set_text_content(Some(message));
        Ok(())
    }

    fn begin_fade_in(&self, fade_ms: u32) -> Result<(), JsValue> {
        dom::set_style(self, "transition", &format!("opacity {}ms", fade_ms))?;
        dom::set_style(self, "opacity", "0")?;
        dom::show(self)?;
        dom::set_style(self, "display", "block")
    }

    fn reveal(&self) -> Result<(), JsValue> {
        dom::set_style(self, "opacity", "1")
    }

    fn fade_out(&self) -> Result<(), JsValue> {
        dom::set_style(self, "opacity", "0")
    }

    fn hide(&self) -> Result<(), JsValue> {
        dom::hide(self)
    }
}

pub struct ToastPresenter<S = Element, T = BrowserTimers>
where
    S: ToastSurface + 'static,
    T: TimerHost + 'static,
{
    inner: Rc<ToastInner<S, T>>,
}

impl<S: ToastSurface + 'static, T: TimerHost + 'static> Clone for ToastPresenter<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct ToastInner<S, T: TimerHost> {
    surface: S,
    timers: T,
    state: RefCell<ToastState>,
    reveal_timer: RefCell<Option<T::Handle>>,
    hide_timer: RefCell<Option<T::Handle>>,
    fade_timer: RefCell<Option<T::Handle>>,
    duration_ms: u32,
    fade_ms: u32,
}

impl ToastPresenter<Element, BrowserTimers> {
    pub fn new(element: Element) -> Self {
        Self::with_parts(
            element,
            BrowserTimers,
            CONFIG.timing.toast_duration_ms,
            CONFIG.timing.toast_fade_ms,
        )
    }
}

impl<S: ToastSurface + 'static, T: TimerHost + 'static> ToastPresenter<S, T> {
    pub fn with_parts(surface: S, timers: T, duration_ms: u32, fade_ms: u32) -> Self {
        Self {
            inner: Rc::new(ToastInner {
                surface,
                timers,
                state: RefCell::new(ToastState::new()),
                reveal_timer: RefCell::new(None),
                hide_timer: RefCell::new(None),
                fade_timer: RefCell::new(None),
                duration_ms,
                fade_ms,
            }),
        }
    }

    pub fn show(&self, message: &str, category: ToastCategory) {
        let inner = &self.inner;

        // Cancelar cualquier ocultado pendiente
        inner.hide_timer.borrow_mut().take();
        inner.fade_timer.borrow_mut().take();

        let was_visible = inner.state.borrow().is_visible();
        let generation = inner.state.borrow_mut().show(message, category);

        if let Err(e) = inner.surface.set_content(message, category) {
            log::error!("❌ Error mostrando toast: {:?}", e);
            return;
        }

        if !was_visible {
            if let Err(e) = inner.surface.begin_fade_in(inner.fade_ms) {
                log::error!("❌ Error mostrando toast: {:?}", e);
                return;
            }
            // opacity:1 en la siguiente tarea, si no la transición no arranca
            let weak: Weak<ToastInner<S, T>> = Rc::downgrade(inner);
            let reveal = inner.timers.after(
                0,
                Box::new(move || {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let current = {
                        let state = inner.state.borrow();
                        state.is_current(generation) && state.is_visible()
                    };
                    if current {
                        if let Err(e) = inner.surface.reveal() {
                            log::error!("❌ Error mostrando toast: {:?}", e);
                        }
                    }
                }),
            );
            *inner.reveal_timer.borrow_mut() = Some(reveal);
        }

        let weak: Weak<ToastInner<S, T>> = Rc::downgrade(inner);
        let timer = inner.timers.after(
            inner.duration_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    ToastInner::fade_out(&inner, generation);
                }
            }),
        );
        *inner.hide_timer.borrow_mut() = Some(timer);
    }
}

impl<S: ToastSurface + 'static, T: TimerHost + 'static> ToastSink for ToastPresenter<S, T> {
    fn show(&self, message: &str, category: ToastCategory) {
        ToastPresenter::show(self, message, category);
    }
}

impl<S: ToastSurface + 'static, T: TimerHost + 'static> ToastInner<S, T> {
    fn fade_out(this: &Rc<Self>, generation: u64) {
        if !this.state.borrow_mut().expire(generation) {
            return;
        }
        if let Err(e) = this.surface.fade_out() {
            log::error!("❌ Error ocultando toast: {:?}", e);
            return;
        }

        // display:none al terminar la transición, si nadie volvió a mostrarlo
        let weak = Rc::downgrade(this);
        let timer = this.timers.after(
            this.fade_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let still_hidden = {
                    let state = inner.state.borrow();
                    state.is_current(generation) && !state.is_visible()
                };
                if still_hidden {
                    if let Err(e) = inner.surface.hide() {
                        log::error!("❌ Error ocultando toast: {:?}", e);
                    }
                }
            }),
        );
        *this.fade_timer.borrow_mut() = Some(timer);
    }
}
