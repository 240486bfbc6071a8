//! Phone input formatting

/// Domestic trunk prefix, rewritten to the country code
const TRUNK_PREFIX: char = '8';
/// Country code that triggers the display mask
const COUNTRY_CODE: char = '7';

/// Reshape raw phone input into the display pattern `+7 (XXX) XXX-XX-XX`.
///
/// All non-digit characters are dropped. A leading `8` becomes `7`. Numbers
/// starting with `7` are masked positionally: short input yields truncated
/// groups with the separators still in place, and digits past the eleventh are
/// discarded. Anything else comes back as bare digits. This says nothing about
/// validity.
pub fn format_phone_input(raw: &str) -> String {
    let mut digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.first() {
        None => return String::new(),
        Some(&TRUNK_PREFIX) => digits[0] = COUNTRY_CODE,
        Some(_) => {}
    }

    if digits[0] != COUNTRY_CODE {
        return digits.into_iter().collect();
    }

    format!(
        "+{} ({}) {}-{}-{}",
        COUNTRY_CODE,
        group(&digits, 1, 4),
        group(&digits, 4, 7),
        group(&digits, 7, 9),
        group(&digits, 9, 11),
    )
}

/// Drop the last digit of a masked phone value along with the separators after it
pub fn drop_last_digit(value: &str) -> String {
    let mut kept = value
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .to_string();
    kept.pop();
    kept
}

/// Slice `digits[start..end]`, clamped to what is available
fn group(digits: &[char], start: usize, end: usize) -> String {
    let end = end.min(digits.len());
    let start = start.min(end);
    digits[start..end].iter().collect()
}
