// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod events;
pub mod timers;

pub use element::*;
pub use events::*;
pub use timers::*;
