use serde::{Deserialize, Serialize};

/// Categoría del toast; solo `Error` cambia el color de fondo
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastCategory {
    #[default]
    Info,
    Error,
}

impl ToastCategory {
    /// Acepta las categorías que usan los templates ("error", "info", "success", ...)
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("error") {
            ToastCategory::Error
        } else {
            ToastCategory::Info
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ToastCategory::Error => "red",
            ToastCategory::Info => "#333",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_error_is_red() {
        assert_eq!(ToastCategory::parse("error").background(), "red");
        assert_eq!(ToastCategory::parse("ERROR"), ToastCategory::Error);
        assert_eq!(ToastCategory::parse("success").background(), "#333");
        assert_eq!(ToastCategory::parse(""), ToastCategory::Info);
    }
}
