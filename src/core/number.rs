//! Display text <-> `f64`.
//!
//! Results are rendered by direct conversion rather than pretty-printing:
//! whole numbers keep a trailing `.0`, magnitudes outside `[1e-3, 1e7)` use
//! an `E` exponent, and the non-finite values print as `NaN`, `Infinity` and
//! `-Infinity`. Rendered text always parses back to the same value, which
//! is what lets a result be chained as the next left-hand operand.
//!
//! Digits come from Rust's shortest round-trip formatting. For subnormals
//! that can differ from other platforms' output: the smallest subnormal
//! renders as `5.0E-324`, not `4.9E-324`. Both parse to the same value.

/// Render a value the way the display shows it.
///
/// ```rust
/// use reckon::core::number::render;
///
/// assert_eq!(render(16.0), "16.0");
/// assert_eq!(render(0.5), "0.5");
/// assert_eq!(render(1.0e7), "1.0E7");
/// assert_eq!(render(f64::INFINITY), "Infinity");
/// ```
pub fn render(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let mut text = format!("{value}");
        if !text.contains('.') {
            text.push_str(".0");
        }
        return text;
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => text,
    }
}

/// Parse display text as an operand.
///
/// Accepts anything [`render`] produces plus whatever the keypad can type:
/// `"12"`, `"1."`, `".5"`. Returns `None` for text such as `""`, `"."` or
/// `"1.2.3"`.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Serde adapter that stores an `f64` as its display text.
///
/// JSON has no literal for `NaN` or the infinities, and both can legitimately
/// end up in an operand or result. Use with `#[serde(with = "...")]`.
pub mod as_text {
    use super::{parse_operand, render};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&render(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_operand(&text).ok_or_else(|| D::Error::custom(format!("invalid operand text '{text}'")))
    }
}
