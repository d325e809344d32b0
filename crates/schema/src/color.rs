//! `rgb()`/`rgba()` to hex conversion for color-valued properties.

use once_cell::sync::Lazy;
use regex::Regex;

static RGB: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)^rgb\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").ok());

static RGBA: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*[\d.]+\s*\)$").ok()
});

/// Convert `rgb(r, g, b)` or `rgba(r, g, b, a)` to `#rrggbb`, dropping alpha.
///
/// Anything else (`currentColor`, hex, named colors, `hsl()`) is returned unchanged.
pub fn rgb_to_hex(value: &str) -> String {
    let captures = RGB
        .as_ref()
        .and_then(|pattern| pattern.captures(value))
        .or_else(|| RGBA.as_ref().and_then(|pattern| pattern.captures(value)));
    let Some(captures) = captures else {
        return value.to_owned();
    };
    let channel = |index: usize| -> Option<u64> { captures.get(index)?.as_str().parse().ok() };
    let (Some(red), Some(green), Some(blue)) = (channel(1), channel(2), channel(3)) else {
        return value.to_owned();
    };
    // Channels above 255 spill into the neighbouring digits rather than clamping.
    let packed = (1_u64 << 24)
        .saturating_add(red << 16)
        .saturating_add(green << 8)
        .saturating_add(blue);
    let digits = format!("{packed:x}");
    format!("#{}", &digits[1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_becomes_six_digit_hex() {
        assert_eq!(rgb_to_hex("rgb(0,128,255)"), "#0080ff");
        assert_eq!(rgb_to_hex("rgb(0, 128, 255)"), "#0080ff");
        assert_eq!(rgb_to_hex("RGB( 255 , 255 , 255 )"), "#ffffff");
    }

    #[test]
    fn rgba_drops_alpha() {
        assert_eq!(rgb_to_hex("rgba(16, 32, 48, 0.5)"), "#102030");
        assert_eq!(rgb_to_hex("rgba(0, 0, 0, 0)"), "#000000");
    }

    #[test]
    fn other_forms_pass_through() {
        assert_eq!(rgb_to_hex("currentColor"), "currentColor");
        assert_eq!(rgb_to_hex("#abc"), "#abc");
        assert_eq!(rgb_to_hex("rgb(10%, 0, 0)"), "rgb(10%, 0, 0)");
        assert_eq!(rgb_to_hex("rgb(1 2 3)"), "rgb(1 2 3)");
    }
}
