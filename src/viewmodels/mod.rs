pub mod poller_viewmodel;
pub mod popover_viewmodel;
pub mod toast_viewmodel;

pub use poller_viewmodel::NotificationPoller;
pub use popover_viewmodel::ProfilePopoverController;
pub use toast_viewmodel::ToastPresenter;
