//! Utility functions for the resource view component.
//!
//! - **User Feedback**: temporary "toast" notifications after a save.
//! - **Formatting**: calendar dates and grouped counts for table cells and cards.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a styled `div` appended to `<body>` that removes itself
/// after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("octofit-toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(25, 135, 84, 0.9)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Renders a timestamp as a calendar date, e.g. `Mar 4, 2025`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and plain `YYYY-MM-DD`; anything
/// else is shown unchanged.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.date().format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// Rounds and groups thousands: `12345.4` -> `12,345`.
pub fn format_count(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

/// Like `format_count`, but keeps one decimal for fractional values (distances).
pub fn format_measure(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format_count(value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_as_calendar_days() {
        assert_eq!(format_date("2025-03-04T10:15:00Z"), "Mar 4, 2025");
        assert_eq!(format_date("2025-03-04T10:15:00.123456+00:00"), "Mar 4, 2025");
        assert_eq!(format_date("2024-12-31 23:59:59"), "Dec 31, 2024");
        assert_eq!(format_date("2024-01-09"), "Jan 9, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(12345.4), "12,345");
        assert_eq!(format_measure(5.0), "5");
        assert_eq!(format_measure(7.5), "7.5");
    }
}
