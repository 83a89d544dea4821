use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub enable_logging: bool,
    pub default_lang: String,
    pub csrf_header: String,
    pub fallback_image: String,
    pub timing: TimingConfig,
    pub selectors: SelectorConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            default_lang: "zh".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            fallback_image: "/static/imgs/default.jpg".to_string(),
            timing: TimingConfig::default(),
            selectors: SelectorConfig::default(),
        }
    }
}

/// Retardos fijos en milisegundos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub toast_duration_ms: u32,
    pub toast_fade_ms: u32,
    pub popover_open_delay_ms: u32,
    pub popover_close_delay_ms: u32,
    pub poll_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3_000,
            toast_fade_ms: 400,
            popover_open_delay_ms: 500,
            popover_close_delay_ms: 200,
            poll_interval_ms: 300_000,
        }
    }
}

/// Selectores del markup que genera el servidor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub toast_id: String,
    pub badge_id: String,
    pub profile_trigger: String,
    pub dismiss_control: String,
    pub tooltip: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            toast_id: "toast".to_string(),
            badge_id: "notification-badge".to_string(),
            profile_trigger: ".profile-popover".to_string(),
            dismiss_control: ".show-notification".to_string(),
            tooltip: "[data-toggle='tooltip'][data-timestamp]".to_string(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl ClientConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BLOG_ENABLE_LOGGING" => option_env!("BLOG_ENABLE_LOGGING"),
            "BLOG_DEFAULT_LANG" => option_env!("BLOG_DEFAULT_LANG"),
            "BLOG_CSRF_HEADER" => option_env!("BLOG_CSRF_HEADER"),
            "BLOG_FALLBACK_IMAGE" => option_env!("BLOG_FALLBACK_IMAGE"),
            "BLOG_TOAST_DURATION_MS" => option_env!("BLOG_TOAST_DURATION_MS"),
            "BLOG_POPOVER_OPEN_DELAY_MS" => option_env!("BLOG_POPOVER_OPEN_DELAY_MS"),
            "BLOG_POPOVER_CLOSE_DELAY_MS" => option_env!("BLOG_POPOVER_CLOSE_DELAY_MS"),
            "BLOG_POLL_INTERVAL_MS" => option_env!("BLOG_POLL_INTERVAL_MS"),
            _ => None,
        })
    }

    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let timing = TimingConfig {
            toast_duration_ms: parse_or(
                lookup("BLOG_TOAST_DURATION_MS"),
                defaults.timing.toast_duration_ms,
            ),
            toast_fade_ms: defaults.timing.toast_fade_ms,
            popover_open_delay_ms: parse_or(
                lookup("BLOG_POPOVER_OPEN_DELAY_MS"),
                defaults.timing.popover_open_delay_ms,
            ),
            popover_close_delay_ms: parse_or(
                lookup("BLOG_POPOVER_CLOSE_DELAY_MS"),
                defaults.timing.popover_close_delay_ms,
            ),
            poll_interval_ms: parse_or(
                lookup("BLOG_POLL_INTERVAL_MS"),
                defaults.timing.poll_interval_ms,
            ),
        };

        Self {
            enable_logging: parse_or(lookup("BLOG_ENABLE_LOGGING"), defaults.enable_logging),
            default_lang: lookup("BLOG_DEFAULT_LANG")
                .map(str::to_string)
                .unwrap_or(defaults.default_lang),
            csrf_header: lookup("BLOG_CSRF_HEADER")
                .map(str::to_string)
                .unwrap_or(defaults.csrf_header),
            fallback_image: lookup("BLOG_FALLBACK_IMAGE")
                .map(str::to_string)
                .unwrap_or(defaults.fallback_image),
            timing,
            selectors: defaults.selectors,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: ClientConfig = ClientConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.timing.toast_duration_ms, 3_000);
        assert_eq!(config.timing.popover_open_delay_ms, 500);
        assert_eq!(config.timing.popover_close_delay_ms, 200);
        assert_eq!(config.timing.poll_interval_ms, 300_000);
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.fallback_image, "/static/imgs/default.jpg");
    }

    #[test]
    fn overrides_are_parsed_and_bad_values_fall_back() {
        let config = ClientConfig::from_lookup(|key| match key {
            "BLOG_POLL_INTERVAL_MS" => Some("60000"),
            "BLOG_TOAST_DURATION_MS" => Some("not-a-number"),
            "BLOG_ENABLE_LOGGING" => Some("false"),
            "BLOG_DEFAULT_LANG" => Some("en"),
            _ => None,
        });
        assert_eq!(config.timing.poll_interval_ms, 60_000);
        assert_eq!(config.timing.toast_duration_ms, 3_000);
        assert!(!config.is_logging_enabled());
        assert_eq!(config.default_lang, "en");
    }
}
