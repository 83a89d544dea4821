pub mod image_fallback;
pub mod modal_binder;
pub mod notification_dismiss;
pub mod popover;
pub mod timestamp_tooltip;

pub use image_fallback::bind_image_fallback;
pub use modal_binder::bind_modals;
pub use notification_dismiss::{bind_dismiss_controls, DismissContext};
pub use timestamp_tooltip::bind_tooltips;
