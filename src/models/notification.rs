use serde::{Deserialize, Serialize};

/// Respuesta de `GET <badge data-href>`
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct NotificationCount {
    pub count: u64,
}

/// Respuesta de `POST <notification data-href>`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ServerMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_payloads() {
        let count: NotificationCount = serde_json::from_str(r#"{"count": 5}"#).unwrap();
        assert_eq!(count, NotificationCount { count: 5 });

        let read: ServerMessage = serde_json::from_str(r#"{"message":"通知已读"}"#).unwrap();
        assert_eq!(read.message, "通知已读");
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(serde_json::from_str::<NotificationCount>(r#"{"count": -1}"#).is_err());
    }
}
