// ============================================================================
// ERRORES DEL CLIENTE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http {status}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Cuerpo de la respuesta fallida, si el servidor devolvió alguno
    pub fn body(&self) -> &str {
        match self {
            ClientError::Status { body, .. } => body,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_status_errors_carry_a_body() {
        let status = ClientError::Status {
            status: 403,
            body: r#"{"message":"请先登录"}"#.to_string(),
        };
        assert_eq!(status.body(), r#"{"message":"请先登录"}"#);
        assert_eq!(status.to_string(), "http 403");
        assert_eq!(ClientError::Network("offline".into()).body(), "");
    }
}
