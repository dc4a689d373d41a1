//! Formatting helpers for presenting counts and percentages.

/// Placeholder shown wherever a figure cannot be computed.
pub const UNAVAILABLE: &str = "—";

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Fixed-point rendering, e.g. `format_fixed(52.0, 1) == "52.0"`.
pub fn format_fixed(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    let rounded = round_to(value, decimals);
    // Avoid printing "-0.0" for tiny negative inputs.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.prec$}", prec = usize::from(decimals))
}

/// Integer count with thousands separators: `12345 -> "12,345"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact axis label: `1500 -> "1.5k"`, `2_000_000 -> "2M"`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_zero(format!("{:.1}", value / 1_000_000.0)) + "M"
    } else if abs >= 1_000.0 {
        trim_zero(format!("{:.1}", value / 1_000.0)) + "k"
    } else {
        format!("{value:.0}")
    }
}

fn trim_zero(s: String) -> String {
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}
