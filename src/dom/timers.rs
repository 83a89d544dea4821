// ============================================================================
// TIMERS - Temporizadores cancelables
// ============================================================================
// Soltar el handle cancela el temporizador, como `gloo_timers::callback::Timeout`.
// ============================================================================

use gloo_timers::callback::Timeout;

pub trait TimerHost {
    type Handle: 'static;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Temporizadores del navegador
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}
