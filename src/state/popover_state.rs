// ============================================================================
// POPOVER STATE - Ciclo de hover de un disparador `.profile-popover`
// ============================================================================
//
//   Idle --enter--> Pending --open timer--> Fetching --ok--> Shown
//    ^                 |                       |               |
//    +-----leave-------+-------leave/error-----+       leave / popover leave
//    ^                                                         v
//    +------------------hide timer (sin hover)-------------- Closing
//
// Closing vuelve a Shown si el puntero entra de nuevo en el disparador o si
// al vencer el temporizador está sobre el contenido del popover.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverPhase {
    #[default]
    Idle,
    Pending,
    Fetching,
    Shown,
    Closing,
}

/// Efecto que el controlador debe ejecutar tras una transición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverAction {
    None,
    StartOpenTimer,
    CancelOpenTimer,
    Fetch,
    Render,
    ScheduleHide,
    CancelHide,
    Hide,
    /// Respuesta que llega fuera de Fetching: se descarta
    Discard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopoverState {
    phase: PopoverPhase,
}

impl PopoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PopoverPhase {
        self.phase
    }

    fn go(&mut self, phase: PopoverPhase, action: PopoverAction) -> PopoverAction {
        self.phase = phase;
        action
    }

    pub fn pointer_enter(&mut self) -> PopoverAction {
        use PopoverPhase::*;
        match self.phase {
            Idle => self.go(Pending, PopoverAction::StartOpenTimer),
            Closing => self.go(Shown, PopoverAction::CancelHide),
            Pending | Fetching | Shown => PopoverAction::None,
        }
    }

    pub fn pointer_leave(&mut self) -> PopoverAction {
        use PopoverPhase::*;
        match self.phase {
            Pending => self.go(Idle, PopoverAction::CancelOpenTimer),
            Fetching => self.go(Idle, PopoverAction::None),
            Shown | Closing => self.go(Closing, PopoverAction::ScheduleHide),
            Idle => PopoverAction::None,
        }
    }

    /// El puntero sale del contenido del popover
    pub fn popover_leave(&mut self) -> PopoverAction {
        use PopoverPhase::*;
        match self.phase {
            Shown | Closing => self.go(Closing, PopoverAction::ScheduleHide),
            _ => PopoverAction::None,
        }
    }

    pub fn open_timer_fired(&mut self) -> PopoverAction {
        match self.phase {
            PopoverPhase::Pending => self.go(PopoverPhase::Fetching, PopoverAction::Fetch),
            _ => PopoverAction::None,
        }
    }

    /// Otro disparador ocupó el único hueco de apertura
    pub fn open_timer_preempted(&mut self) -> PopoverAction {
        match self.phase {
            PopoverPhase::Pending => self.go(PopoverPhase::Idle, PopoverAction::None),
            _ => PopoverAction::None,
        }
    }

    pub fn fetch_succeeded(&mut self) -> PopoverAction {
        match self.phase {
            PopoverPhase::Fetching => self.go(PopoverPhase::Shown, PopoverAction::Render),
            _ => PopoverAction::Discard,
        }
    }

    pub fn fetch_failed(&mut self) -> PopoverAction {
        match self.phase {
            PopoverPhase::Fetching => self.go(PopoverPhase::Idle, PopoverAction::None),
            _ => PopoverAction::None,
        }
    }

    pub fn hide_timer_fired(&mut self, over_popover: bool) -> PopoverAction {
        match (self.phase, over_popover) {
            (PopoverPhase::Closing, true) => self.go(PopoverPhase::Shown, PopoverAction::None),
            (PopoverPhase::Closing, false) => self.go(PopoverPhase::Idle, PopoverAction::Hide),
            _ => PopoverAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PopoverAction::*;

    #[test]
    fn short_hover_makes_no_request() {
        let mut state = PopoverState::new();
        assert_eq!(state.pointer_enter(), StartOpenTimer);
        assert_eq!(state.pointer_leave(), CancelOpenTimer);
        assert_eq!(state.phase(), PopoverPhase::Idle);
        // Un temporizador ya cancelado no puede disparar el fetch
        assert_eq!(state.open_timer_fired(), None);
    }

    #[test]
    fn long_hover_fetches_once_and_shows() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        assert_eq!(state.open_timer_fired(), Fetch);
        assert_eq!(state.open_timer_fired(), None);
        assert_eq!(state.fetch_succeeded(), Render);
        assert_eq!(state.phase(), PopoverPhase::Shown);
    }

    #[test]
    fn leaving_trigger_hides_after_delay() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        state.open_timer_fired();
        state.fetch_succeeded();
        assert_eq!(state.pointer_leave(), ScheduleHide);
        assert_eq!(state.hide_timer_fired(false), Hide);
        assert_eq!(state.phase(), PopoverPhase::Idle);
    }

    #[test]
    fn moving_into_popover_keeps_it_until_popover_leave() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        state.open_timer_fired();
        state.fetch_succeeded();
        state.pointer_leave();
        assert_eq!(state.hide_timer_fired(true), None);
        assert_eq!(state.phase(), PopoverPhase::Shown);

        assert_eq!(state.popover_leave(), ScheduleHide);
        assert_eq!(state.hide_timer_fired(false), Hide);
    }

    #[test]
    fn reentering_trigger_cancels_hide() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        state.open_timer_fired();
        state.fetch_succeeded();
        state.pointer_leave();
        assert_eq!(state.pointer_enter(), CancelHide);
        assert_eq!(state.phase(), PopoverPhase::Shown);
    }

    #[test]
    fn late_response_after_leave_is_discarded() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        state.open_timer_fired();
        assert_eq!(state.pointer_leave(), None);
        assert_eq!(state.fetch_succeeded(), Discard);
        assert_eq!(state.phase(), PopoverPhase::Idle);
    }

    #[test]
    fn failed_fetch_returns_to_idle() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        state.open_timer_fired();
        assert_eq!(state.fetch_failed(), None);
        assert_eq!(state.phase(), PopoverPhase::Idle);
        assert_eq!(state.pointer_enter(), StartOpenTimer);
    }

    #[test]
    fn preempted_pending_trigger_goes_idle() {
        let mut state = PopoverState::new();
        state.pointer_enter();
        state.open_timer_preempted();
        assert_eq!(state.phase(), PopoverPhase::Idle);
    }
}
