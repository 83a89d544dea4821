pub mod notification;
pub mod page;
pub mod toast;

pub use notification::{NotificationCount, ServerMessage};
pub use page::PageContext;
pub use toast::ToastCategory;
