//! United States.

pub mod atin;
pub mod ein;
pub mod itin;
pub mod ptin;
pub mod ssn;
pub mod tin;

use crate::core::isdigits;

/// Split `number` into digit groups of the given sizes, allowing a single
/// optional dash between consecutive groups and nowhere else.
pub(crate) fn split_dashed_groups<'a>(number: &'a str, sizes: &[usize]) -> Option<Vec<&'a str>> {
    let mut rest = number;
    let mut groups = Vec::with_capacity(sizes.len());
    for (i, &size) in sizes.iter().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix('-').unwrap_or(rest);
        }
        let group = rest.get(..size)?;
        if !isdigits(group) {
            return None;
        }
        groups.push(group);
        rest = &rest[size..];
    }
    rest.is_empty().then_some(groups)
}

/// Format nine digits as `NNN-NN-NNNN`, or return `original` unchanged.
pub(crate) fn format_area_group_serial(compacted: &str, original: &str) -> String {
    if compacted.len() != 9 || !isdigits(compacted) {
        return original.to_string();
    }
    format!(
        "{}-{}-{}",
        &compacted[..3],
        &compacted[3..5],
        &compacted[5..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_groups() {
        assert_eq!(
            split_dashed_groups("123-45-6789", &[3, 2, 4]),
            Some(vec!["123", "45", "6789"])
        );
        assert_eq!(
            split_dashed_groups("123456789", &[3, 2, 4]),
            Some(vec!["123", "45", "6789"])
        );
        assert_eq!(split_dashed_groups("12-345-6789", &[3, 2, 4]), None);
        assert_eq!(split_dashed_groups("123--45-6789", &[3, 2, 4]), None);
        assert_eq!(split_dashed_groups("123-45-67890", &[3, 2, 4]), None);
        assert_eq!(split_dashed_groups("-123456789", &[3, 2, 4]), None);
    }
}
