pub mod api_client;
pub mod csrf;
pub mod error_reporter;
pub mod notification_service;
pub mod profile_service;

pub use api_client::ApiClient;
pub use csrf::CsrfInterceptor;
pub use error_reporter::{ErrorReporter, ToastSink};
pub use notification_service::*;
pub use profile_service::*;
