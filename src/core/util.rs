//! Text helpers shared by every identifier module.

/// Separators accepted in the printed form of most identifiers.
pub const SEPARATORS: &str = " -./";

/// Remove every character in `deletechars` from `number` and strip
/// surrounding whitespace.
///
/// Unicode dash and space look-alikes are mapped to ASCII `-` and ` ` first,
/// so numbers pasted from word processors compact the same way as typed
/// ones. All other characters keep their order and are left untouched.
pub fn clean(number: &str, deletechars: &str) -> String {
    let cleaned: String = number
        .chars()
        .map(normalize_char)
        .filter(|c| !deletechars.contains(*c))
        .collect();
    cleaned.trim().to_string()
}

fn normalize_char(c: char) -> char {
    match c {
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}' => '-',
        '\u{00A0}' | '\u{2000}'..='\u{200B}' | '\u{202F}' | '\u{3000}' => ' ',
        '\u{FF0E}' => '.',
        '\u{FF0F}' => '/',
        _ => c,
    }
}

/// True if `number` is non-empty and consists only of ASCII digits.
///
/// Superscripts and other Unicode digits are rejected so that a number
/// validates the same way regardless of the caller's locale.
pub fn isdigits(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

/// Strip any of the country `prefixes` from the start of `number`.
///
/// Stripping repeats until no prefix is left so that compacting stays
/// idempotent for inputs such as `"RORO123"`.
#[cfg(any(feature = "americas", feature = "europe"))]
pub(crate) fn strip_country_prefix(number: &str, prefixes: &[&str]) -> String {
    let mut rest = number.trim();
    while let Some(stripped) = prefixes.iter().find_map(|p| rest.strip_prefix(p)) {
        rest = stripped.trim();
    }
    rest.to_string()
}

/// Left-pad `number` with zeros to `width` characters.
#[cfg(feature = "europe")]
pub(crate) fn zfill(number: &str, width: usize) -> String {
    format!("{number:0>width$}")
}
