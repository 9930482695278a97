//! Lexical forms for literal values
//!
//! Existing graphs store doubles as `1.0`, `401.5`, `1.0E7` and arrays as
//! `[1.0, 2.5]`; these helpers produce exactly those strings.

/// Render a double the way stored graphs spell it
///
/// Integral values keep a `.0`, magnitudes in `[1e-3, 1e7)` are plain
/// decimals, everything else uses scientific notation with an upper-case `E`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        // `{:e}` gives the shortest round-trip mantissa, e.g. "1.5e-4"
        let sci = format!("{value:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{mantissa}E{exponent}")
        } else {
            format!("{mantissa}.0E{exponent}")
        }
    }
}

/// Render a list as `[a, b, c]`
pub fn format_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.as_ref());
    }
    out.push(']');
    out
}

/// Render a numeric array as `[a, b, c]`
pub fn format_doubles(values: &[f64]) -> String {
    format_list(values.iter().map(|v| format_double(*v)))
}
