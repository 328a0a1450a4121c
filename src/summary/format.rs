/// Placeholder for values that are absent or not computable.
pub(crate) const NO_DATA: &str = "N/A";

/// Rounds to a whole number and groups thousands: `1234567.4` -> `1,234,567`.
pub(crate) fn format_count(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    let len = digits.len();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && len.saturating_sub(idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub(crate) fn format_opt_count(value: Option<f64>) -> String {
    value.map_or_else(|| NO_DATA.to_owned(), format_count)
}

pub(crate) fn format_opt_percent(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(
        || NO_DATA.to_owned(),
        |value| format!("{value:.decimals$}%"),
    )
}

pub(crate) fn format_opt_decimal(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| NO_DATA.to_owned(), |value| format!("{value:.decimals$}"))
}

/// Signed delta with one decimal, e.g. `+12.5` or `-3.0`.
pub(crate) fn format_delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}
