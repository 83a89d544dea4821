// ============================================================================
// TIMESTAMP TOOLTIP - Fecha local legible en el title
// ============================================================================

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use wasm_bindgen::prelude::*;

use crate::dom;

/// Mismo formato que `lll` de moment.js: "Oct 16, 2026 5:31 PM"
const TOOLTIP_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Timestamps sin zona se interpretan como UTC
pub fn format_timestamp(raw: &str, offset: FixedOffset) -> Option<String> {
    let raw = raw.trim();
    let utc = match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.to_utc(),
        Err(_) => ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())?
            .and_utc(),
    };
    Some(utc.with_timezone(&offset).format(TOOLTIP_FORMAT).to_string())
}

/// Offset del navegador (getTimezoneOffset devuelve minutos al oeste de UTC)
fn browser_offset() -> FixedOffset {
    let minutes_west = js_sys::Date::new_0().get_timezone_offset() as i32;
    FixedOffset::west_opt(minutes_west * 60).unwrap_or_else(|| Utc.fix())
}

pub fn bind_tooltips(selector: &str) -> Result<usize, JsValue> {
    let offset = browser_offset();
    let mut titled = 0;
    for element in dom::query_selector_all(selector)? {
        let Some(raw) = dom::data_attr(&element, "timestamp") else {
            continue;
        };
        match format_timestamp(&raw, offset) {
            Some(title) => {
                element.set_attribute("title", &title)?;
                titled += 1;
            }
            None => log::debug!("🕒 Timestamp no reconocido: {}", raw),
        }
    }
    Ok(titled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn formats_like_moment_lll() {
        assert_eq!(
            format_timestamp("2026-10-16T17:31:00Z", utc()).as_deref(),
            Some("Oct 16, 2026 5:31 PM")
        );
    }

    #[test]
    fn applies_local_offset() {
        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(
            format_timestamp("2026-10-16T17:31:00Z", beijing).as_deref(),
            Some("Oct 17, 2026 1:31 AM")
        );
    }

    #[test]
    fn naive_timestamps_are_utc() {
        assert_eq!(
            format_timestamp("2026-01-05 09:05:00.123456", utc()).as_deref(),
            Some("Jan 5, 2026 9:05 AM")
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(format_timestamp("yesterday", utc()), None);
    }
}
