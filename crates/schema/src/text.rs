//! Small text utilities: case conventions and lenient number prefixes.

/// `background-color` → `backgroundColor`.
///
/// Only a hyphen followed by an ASCII lowercase letter is folded; any other
/// hyphen is kept as-is, so `--x` stays `-X`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(character) = chars.next() {
        if character == '-'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
            continue;
        }
        out.push(character);
    }
    out
}

/// `backgroundColor` → `background-color`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for character in name.chars() {
        if character.is_ascii_uppercase() {
            out.push('-');
            out.push(character.to_ascii_lowercase());
        } else {
            out.push(character);
        }
    }
    out
}

/// Leading base-10 integer, ignoring anything after it (`"2.5"` → 2, `"3px"` → 3).
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|character: char| !character.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading unsigned decimal made of digits and at most one dot (`"1.5.2"` → 1.5).
pub fn parse_leading_decimal(input: &str) -> Option<f64> {
    let mut seen_dot = false;
    let end = input
        .char_indices()
        .find(|&(_, character)| {
            if character == '.' && !seen_dot {
                seen_dot = true;
                return false;
            }
            !character.is_ascii_digit()
        })
        .map_or(input.len(), |(index, _)| index);
    let number = &input[..end];
    if number.is_empty() || number == "." {
        return None;
    }
    number.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_folds_hyphen_lowercase_pairs() {
        assert_eq!(camel_case("background-color"), "backgroundColor");
        assert_eq!(camel_case("stroke-dash-offset"), "strokeDashOffset");
        assert_eq!(camel_case("viewBox"), "viewBox");
        assert_eq!(camel_case("data-1x"), "data-1x");
        assert_eq!(camel_case("a--b"), "a-B");
    }

    #[test]
    fn kebab_case_splits_on_uppercase() {
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("color"), "color");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn leading_int_behaves_like_a_lenient_parse() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int(" -3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn leading_decimal_stops_at_second_dot() {
        assert_eq!(parse_leading_decimal("400.25"), Some(400.25));
        assert_eq!(parse_leading_decimal("1.5.2"), Some(1.5));
        assert_eq!(parse_leading_decimal(".5"), Some(0.5));
        assert_eq!(parse_leading_decimal("."), None);
    }
}
