//! Module for handling date parsing.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::DateFormatConfig;

/// Parse a date string with multiple format attempts
///
/// Date-time formats are tried first and their time part dropped, then
/// plain date formats, then heuristic detection when enabled.
///
/// Ambiguous slash dates are read day-first, as pt-BR sheets write them:
/// `05/01/2024` is 5 January 2024.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in &config.datetime_formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, &detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<String> {
    // A date-time string: look only at the date part
    let s = s.split([' ', 'T']).next().unwrap_or(s);

    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d".to_string());
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d".to_string());
            } else if parts[2].len() == 4 {
                if let Ok(first_num) = parts[0].parse::<u8>() {
                    // Day-first unless the second part cannot be a month
                    let second_num = parts[1].parse::<u8>().unwrap_or(0);
                    if first_num <= 12 && second_num > 12 {
                        return Some("%m/%d/%Y".to_string());
                    }
                    return Some("%d/%m/%Y".to_string());
                }
            } else if parts[2].len() == 2 {
                return Some("%d/%m/%y".to_string());
            }
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y".to_string());
        }
    }

    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d".to_string());
    }

    None
}

/// Convert an Excel serial day number to a calendar date
///
/// Counting from 1899-12-30 matches Excel for every serial after its phantom
/// 1900-02-29 (serial 60); earlier serials land one day early.
/// Fractions (time of day) are truncated.
#[must_use]
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > 2_958_465.0 {
        return None;
    }

    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(Duration::days(serial.trunc() as i64))
}
