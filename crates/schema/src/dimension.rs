//! Plausibility filter for pixel sizes.
//!
//! Resolved pixel values often carry sub-pixel noise from layout (`313.417px`).
//! Those are not something a designer typed, so only quarter-pixel-aligned
//! values up to [`MAX_DIMENSION_PX`] survive.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::parse_leading_decimal;

/// Largest pixel size still considered intentional.
pub const MAX_DIMENSION_PX: f64 = 800.0;

/// Grid the pixel value must sit on.
const QUARTER: f64 = 0.25;

static PIXELS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^([\d.]+)px$").ok());

/// True when `value` is a "reasonable" size.
///
/// `<number>px` must be at most 800 and within 1e-4 of the quarter-pixel grid
/// (the remainder is compared against `< 0.0001` and `> 0.2499`, an
/// asymmetric window kept exactly as observed). Every other form (`auto`,
/// percentages, bare numbers) is accepted.
pub fn is_reasonable_dimension(value: &str) -> bool {
    let Some(captures) = PIXELS.as_ref().and_then(|pattern| pattern.captures(value)) else {
        return true;
    };
    let number = captures
        .get(1)
        .and_then(|digits| parse_leading_decimal(digits.as_str()))
        .unwrap_or(f64::NAN);
    if number > MAX_DIMENSION_PX {
        return false;
    }
    let remainder = number % QUARTER;
    remainder < 0.0001 || remainder > 0.2499
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_pixel_values_up_to_the_limit_pass() {
        assert!(is_reasonable_dimension("400px"));
        assert!(is_reasonable_dimension("400.25px"));
        assert!(is_reasonable_dimension("0.75px"));
        assert!(is_reasonable_dimension("800px"));
    }

    #[test]
    fn off_grid_or_oversized_pixels_fail() {
        assert!(!is_reasonable_dimension("400.1px"));
        assert!(!is_reasonable_dimension("900px"));
        assert!(!is_reasonable_dimension("800.25px"));
        assert!(!is_reasonable_dimension(".px"));
    }

    #[test]
    fn non_pixel_forms_are_accepted() {
        assert!(is_reasonable_dimension("50%"));
        assert!(is_reasonable_dimension("auto"));
        assert!(is_reasonable_dimension("12"));
        assert!(is_reasonable_dimension("10em"));
        assert!(is_reasonable_dimension("-5px"));
    }
}
