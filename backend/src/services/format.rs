//! Locale-free display formatting for dashboard numbers.

/// Text shown in place of an undefined average.
pub const NOT_AVAILABLE: &str = "n/a";

/// Insert `,` every three digits into a plain integer digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render `value` with `decimals` places and a grouped integer part.
fn grouped_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::new();
    // "-0" after rounding is shown as "0"
    if value.is_sign_negative() && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `50000` -> `50,000`
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

/// Whole-currency amount: `1234567.4` -> `$1,234,567`
pub fn format_currency(amount: f64) -> String {
    format!("${}", grouped_decimal(amount, 0))
}

/// Currency with cents: `24.687` -> `$24.69`
pub fn format_currency_cents(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Average fare with the empty-selection policy applied.
pub fn format_average_fare(average: Option<f64>) -> String {
    match average {
        Some(avg) => format_currency_cents(avg),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Ratio as a percentage with one decimal: `0.42` -> `42.0%`
pub fn format_share(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Minutes value as recorded in the metrics document.
///
/// Integer literals stay bare (`7` -> `7 min`); floats keep a fractional part
/// (`8.0` -> `8.0 min`, `7.48` -> `7.48 min`).
pub fn format_minutes(minutes: f64, integral: bool) -> String {
    if integral || minutes.fract() != 0.0 {
        format!("{} min", minutes)
    } else {
        format!("{:.1} min", minutes)
    }
}

/// Signed percentage delta: `-12.0` -> `-12.0%`, `3.5` -> `+3.5%`
pub fn format_delta_pct(delta: f64) -> String {
    format!("{:+.1}%", delta)
}

/// Round to one decimal place, ties to even on the exact stored value.
///
/// `0.25` is exact in binary and rounds to `0.2`; `0.35` is stored as
/// `0.34999..` and rounds to `0.3`. Scaling by ten first would round both up.
pub fn round1(value: f64) -> f64 {
    // fixed-precision formatting rounds the exact decimal expansion
    format!("{:.1}", value).parse().unwrap_or(value)
}
