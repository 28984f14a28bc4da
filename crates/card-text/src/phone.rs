//! Phone input masking

/// Digits in a complete masked number (country code + national number).
const MAX_DIGITS: usize = 11;

/// Digits in the national number after the fixed `+7`.
const NATIONAL_DIGITS: usize = MAX_DIGITS - 1;

/// Format raw user input to the national pattern `+7 (XXX) XXX-XX-XX`.
///
/// Non-digit characters are ignored. The typed digits are the national
/// number, filled in after the fixed `+7` prefix; a leading `8` (the
/// legacy trunk prefix) is dropped, and a leading `7` is dropped when
/// the input already carries the full 11-digit number, so pasting a
/// masked value round-trips. Input is truncated to 10 national digits.
/// Partial input yields a partial mask, e.g. `"70012"` becomes
/// `"+7 (700) 12"`.
pub fn format_phone(input: &str) -> String {
    let mut digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect();

    if digits.is_empty() {
        return String::new();
    }

    match digits.first() {
        Some(&8) => {
            digits.remove(0);
        }
        Some(&7) if digits.len() >= MAX_DIGITS => {
            digits.remove(0);
        }
        _ => {}
    }
    digits.truncate(NATIONAL_DIGITS);

    let digit_at = |i: usize| -> char { (digits[i] + b'0') as char };

    let mut out = String::from("+7");
    if !digits.is_empty() {
        out.push_str(" (");
        for i in 0..digits.len().min(3) {
            out.push(digit_at(i));
        }
    }
    if digits.len() > 3 {
        out.push_str(") ");
        for i in 3..digits.len().min(6) {
            out.push(digit_at(i));
        }
    }
    if digits.len() > 6 {
        out.push('-');
        for i in 6..digits.len().min(8) {
            out.push(digit_at(i));
        }
    }
    if digits.len() > 8 {
        out.push('-');
        for i in 8..digits.len().min(10) {
            out.push(digit_at(i));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_number_with_trunk_prefix() {
        assert_eq!(format_phone("87001234567"), "+7 (700) 123-45-67");
    }

    #[test]
    fn full_number_with_country_code() {
        assert_eq!(format_phone("77001234567"), "+7 (700) 123-45-67");
    }

    #[test]
    fn partial_number() {
        assert_eq!(format_phone("70012"), "+7 (700) 12");
        assert_eq!(format_phone("7"), "+7 (7");
        assert_eq!(format_phone("700"), "+7 (700");
        assert_eq!(format_phone("7001"), "+7 (700) 1");
        assert_eq!(format_phone("7001234"), "+7 (700) 123-4");
        assert_eq!(format_phone("700123456"), "+7 (700) 123-45-6");
    }

    #[test]
    fn partial_trunk_prefix_is_dropped() {
        assert_eq!(format_phone("8700"), "+7 (700");
        assert_eq!(format_phone("8"), "+7");
    }

    #[test]
    fn non_digits_are_ignored() {
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("700-12"), "+7 (700) 12");
    }

    #[test]
    fn masked_value_round_trips() {
        assert_eq!(format_phone("+7 (700) 123-45-67"), "+7 (700) 123-45-67");
    }

    #[test]
    fn leading_digit_need_not_be_seven() {
        assert_eq!(format_phone("9001234567"), "+7 (900) 123-45-67");
    }

    #[test]
    fn excess_digits_truncated() {
        assert_eq!(format_phone("77001234567999999"), "+7 (700) 123-45-67");
    }

    #[test]
    fn empty_input() {
        assert_eq!(format_phone(""), "");
    }
}
