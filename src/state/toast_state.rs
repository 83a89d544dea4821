// ============================================================================
// TOAST STATE - El último show() gana
// ============================================================================

use crate::models::ToastCategory;

/// Cada `show()` abre una generación nueva; un temporizador de una generación
/// anterior no puede ocultar el toast actual.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToastState {
    generation: u64,
    visible: bool,
    message: String,
    category: ToastCategory,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza el toast actual y devuelve su generación
    pub fn show(&mut self, message: &str, category: ToastCategory) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.message = message.to_string();
        self.category = category;
        self.generation
    }

    /// Oculta solo si `generation` sigue siendo la actual
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> ToastCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_show_wins_and_first_timer_is_ignored() {
        let mut state = ToastState::new();
        let first = state.show("primero", ToastCategory::Info);
        let second = state.show("segundo", ToastCategory::Error);

        // El temporizador del primero llega tarde
        assert!(!state.expire(first));
        assert!(state.is_visible());
        assert_eq!(state.message(), "segundo");
        assert_eq!(state.category(), ToastCategory::Error);

        assert!(state.expire(second));
        assert!(!state.is_visible());
    }

    #[test]
    fn expire_twice_is_a_no_op() {
        let mut state = ToastState::new();
        let generation = state.show("hola", ToastCategory::Info);
        assert!(state.expire(generation));
        assert!(!state.expire(generation));
    }
}
