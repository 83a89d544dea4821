// ============================================================================
// STATE MODULE - Estado transitorio de cada controlador
// ============================================================================

pub mod badge_state;
pub mod popover_state;
pub mod toast_state;

pub use badge_state::*;
pub use popover_state::*;
pub use toast_state::*;
