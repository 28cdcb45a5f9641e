//! Conversions between decimal minutes and clock strings.

use crate::runs::RunDuration;

/// Normalize a run duration to decimal minutes.
///
/// Missing durations and text that does not parse resolve to 0.
pub fn to_minutes(duration: Option<&RunDuration>) -> f64 {
    duration.map_or(0.0, RunDuration::minutes)
}

/// Parse duration text: `"M:SS"` becomes `M + SS/60`, anything without a
/// colon is read as decimal minutes from its leading number (`"12abc"` is 12).
pub fn parse_minutes(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let minutes = match text.split_once(':') {
        Some((min, sec)) => match (parse_part(min), parse_part(sec)) {
            (Some(min), Some(sec)) => min + sec / 60.0,
            _ => 0.0,
        },
        None => leading_number(text).unwrap_or(0.0),
    };

    if minutes.is_finite() {
        minutes
    } else {
        0.0
    }
}

fn parse_part(part: &str) -> Option<f64> {
    // Only the first two fields of "M:SS:..." are read.
    let part = part.split(':').next().unwrap_or("").trim();
    if part.is_empty() {
        Some(0.0)
    } else {
        part.parse::<f64>().ok()
    }
}

/// Longest prefix of `text` that reads as a decimal number.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

/// Format decimal minutes as `M:SS`.
///
/// Minutes are floored and the remainder rounded to whole seconds. Negative
/// or non-finite input formats as `0:00`.
pub fn to_mmss(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return "0:00".to_string();
    }

    let whole = minutes.floor();
    let seconds = ((minutes - whole) * 60.0).round();
    format_clock(whole as u64, seconds as u64)
}

/// Format a duration given in seconds as `M:SS`.
pub fn to_clock_string(total_seconds: f64) -> String {
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
        return "0:00".to_string();
    }

    let minutes = (total_seconds / 60.0).floor();
    let seconds = (total_seconds % 60.0).round();
    format_clock(minutes as u64, seconds as u64)
}

fn format_clock(minutes: u64, seconds: u64) -> String {
    // 59.6s rounds up to a full minute
    let minutes = minutes + seconds / 60;
    let seconds = seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
