//! Time formatting for clip cards

/// Format seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so an hour renders as `60:00`.
/// Fractions are truncated; negative or non-finite input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format a clip's range as `MM:SS → MM:SS`
pub fn format_range(start: f64, end: f64) -> String {
    format!("{} → {}", format_time(start), format_time(end))
}
