/// Return `true` when `value` is `#` followed by exactly 3 or 6 hex digits.
///
/// Case-insensitive. Surrounding whitespace, a missing `#` or any other
/// character makes the value invalid.
pub fn is_valid_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };

    matches!(digits.len(), 3 | 6) && is_hex_digits(digits)
}

/// Expand the `#abc` shorthand into `#aabbcc`.
///
/// Any input that is not a valid shorthand is returned unchanged, so the
/// function is the identity on 6-digit values.
pub fn expand_short_hex(value: &str) -> String {
    match value.strip_prefix('#') {
        Some(digits) if digits.len() == 3 && is_hex_digits(digits) => {
            let mut expanded = String::with_capacity(7);
            expanded.push('#');
            for ch in digits.chars() {
                expanded.push(ch);
                expanded.push(ch);
            }
            expanded
        },
        _ => value.to_string(),
    }
}

/// Trim surrounding whitespace and make sure the value starts with `#`.
///
/// Neither validates nor re-cases the digits.
pub fn normalize_hex(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

fn is_hex_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::{expand_short_hex, is_valid_hex, normalize_hex};

    /// Hand-written equivalent of `^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$`.
    fn matches_reference_pattern(value: &str) -> bool {
        let chars: Vec<char> = value.chars().collect();
        if chars.first() != Some(&'#') {
            return false;
        }
        let digits = &chars[1..];
        (digits.len() == 3 || digits.len() == 6)
            && digits.iter().all(|ch| {
                ch.is_ascii_digit() || ('a'..='f').contains(ch)
                    || ('A'..='F').contains(ch)
            })
    }

    #[test]
    fn given_reference_inputs_when_validated_then_matches_pattern() {
        let inputs = [
            "#abc", "#ABC", "#aBc", "#123456", "#FF5733", "#ff5733", "abc",
            "123456", "#ab", "#abcd", "#abcde", "#1234567", "#ggg",
            "#12345g", " #abc", "#abc ", "##abc", "#", "", "#-12", "#+12345",
            "#éab", "#ａbc", "#0x1234",
        ];

        for input in inputs {
            assert_eq!(
                is_valid_hex(input),
                matches_reference_pattern(input),
                "mismatch for {input:?}"
            );
        }
    }

    #[test]
    fn given_short_hex_when_expanded_then_each_digit_is_doubled() {
        assert_eq!(expand_short_hex("#abc"), "#aabbcc");
        assert_eq!(expand_short_hex("#F00"), "#FF0000");
        assert_eq!(expand_short_hex("#1a2"), "#11aa22");
    }

    #[test]
    fn given_long_or_invalid_hex_when_expanded_then_input_is_unchanged() {
        for input in ["#FF5733", "#ab", "#abcd", "abc", "#xyz", "", "#"] {
            assert_eq!(expand_short_hex(input), input);
        }
    }

    #[test]
    fn given_raw_text_when_normalized_then_trims_and_prefixes_hash() {
        assert_eq!(normalize_hex("f00"), "#f00");
        assert_eq!(normalize_hex("  #FF5733\t"), "#FF5733");
        assert_eq!(normalize_hex(" 33ff57 "), "#33ff57");
        assert_eq!(normalize_hex(""), "#");
        assert_eq!(normalize_hex("   "), "#");
        assert_eq!(normalize_hex("#"), "#");
    }

    #[test]
    fn given_any_text_when_normalized_twice_then_result_is_stable() {
        for input in [
            "", " ", "#", "abc", " abc ", "#abc", "##abc", "zz z", "\t#1\n",
            "  # ab", "#FF5733",
        ] {
            let once = normalize_hex(input);
            assert_eq!(normalize_hex(&once), once, "not idempotent: {input:?}");
        }
    }

    #[test]
    fn given_normalize_then_expand_when_composed_then_yields_canonical_value() {
        let canonical = expand_short_hex(&normalize_hex(" f00 "));

        assert_eq!(canonical, "#ff0000");
        assert!(is_valid_hex(&canonical));
    }

    #[test]
    fn given_malformed_text_when_composed_then_still_invalid() {
        let value = expand_short_hex(&normalize_hex("zzz"));

        assert_eq!(value, "#zzz");
        assert!(!is_valid_hex(&value));
    }
}
