// ============================================================================
// ERROR REPORTER - Punto único de reporte de peticiones fallidas
// ============================================================================

use std::rc::Rc;

use serde_json::Value;

use crate::error::ClientError;
use crate::models::ToastCategory;

/// Destino visible de los mensajes (el toast de la página)
pub trait ToastSink {
    fn show(&self, message: &str, category: ToastCategory);
}

pub struct ErrorReporter {
    sink: Rc<dyn ToastSink>,
    default_message: String,
}

impl ErrorReporter {
    pub fn new(sink: Rc<dyn ToastSink>, default_message: impl Into<String>) -> Self {
        Self {
            sink,
            default_message: default_message.into(),
        }
    }

    /// Siempre produce exactamente un toast de categoría error
    pub fn report(&self, error: &ClientError) {
        log::warn!("❌ Petición fallida: {}", error);
        let message = extract_message(error.body(), &self.default_message);
        self.sink.show(&message, ToastCategory::Error);
    }
}

/// Mensaje legible a partir del cuerpo de una respuesta fallida.
/// Usa `message` si el cuerpo es JSON con ese campo; si no, `default`.
pub fn extract_message(body: &str, default: &str) -> String {
    if body.trim().is_empty() {
        return default.to_string();
    }

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return default.to_string();
    };

    match json.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const DEFAULT: &str = "服务器响应错误，请稍后重试。";

    #[derive(Default)]
    struct RecordingSink {
        shown: RefCell<Vec<(String, ToastCategory)>>,
    }

    impl ToastSink for RecordingSink {
        fn show(&self, message: &str, category: ToastCategory) {
            self.shown.borrow_mut().push((message.to_string(), category));
        }
    }

    #[test]
    fn json_message_wins() {
        assert_eq!(extract_message(r#"{"message":"X"}"#, DEFAULT), "X");
        assert_eq!(extract_message(r#"{"message":"请先登录","code":403}"#, DEFAULT), "请先登录");
    }

    #[test]
    fn unparseable_or_empty_body_uses_default() {
        assert_eq!(extract_message("<html>502 Bad Gateway</html>", DEFAULT), DEFAULT);
        assert_eq!(extract_message("", DEFAULT), DEFAULT);
        assert_eq!(extract_message("   ", DEFAULT), DEFAULT);
    }

    #[test]
    fn json_without_message_uses_default() {
        assert_eq!(extract_message(r#"{"error":"nope"}"#, DEFAULT), DEFAULT);
        assert_eq!(extract_message(r#"{"message":null}"#, DEFAULT), DEFAULT);
        assert_eq!(extract_message("[1,2,3]", DEFAULT), DEFAULT);
        assert_eq!(extract_message("\"just a string\"", DEFAULT), DEFAULT);
    }

    #[test]
    fn non_string_message_is_rendered() {
        assert_eq!(extract_message(r#"{"message":42}"#, DEFAULT), "42");
    }

    #[test]
    fn every_failure_produces_one_error_toast() {
        let sink = Rc::new(RecordingSink::default());
        let reporter = ErrorReporter::new(sink.clone(), DEFAULT);

        reporter.report(&ClientError::Status {
            status: 403,
            body: r#"{"message":"X"}"#.to_string(),
        });
        reporter.report(&ClientError::Network("connection refused".into()));
        reporter.report(&ClientError::Decode("expected value".into()));

        let shown = sink.shown.borrow();
        assert_eq!(
            *shown,
            vec![
                ("X".to_string(), ToastCategory::Error),
                (DEFAULT.to_string(), ToastCategory::Error),
                (DEFAULT.to_string(), ToastCategory::Error),
            ]
        );
    }
}
