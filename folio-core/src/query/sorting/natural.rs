//! Numeric-aware ordering for free-text series positions.
//!
//! Series volumes are labelled "1", "2", "10", "10.5", "11a" and so on. Plain
//! string comparison would put "10" before "2", so the leading digit run is
//! compared as a number and only the remainder is compared as text.

use std::cmp::Ordering;

/// A sequence label split into its leading digit run and the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SequenceParts<'a> {
    /// Leading ASCII digits with leading zeros removed. Empty means zero.
    digits: &'a str,
    suffix: &'a str,
}

impl<'a> SequenceParts<'a> {
    fn split(raw: &'a str) -> Self {
        let run = raw
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(raw.len());
        let (digits, suffix) = raw.split_at(run);
        Self {
            digits: digits.trim_start_matches('0'),
            suffix,
        }
    }

    fn cmp_numeric(&self, other: &Self) -> Ordering {
        // Leading zeros are gone, so a longer run is a larger number
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
    }
}

/// Compare two sequence labels in natural order.
///
/// Empty labels sort after every non-empty label. Otherwise the leading
/// numbers decide; on a tie a bare number precedes a number with trailing
/// text, and two trailing texts are compared byte-wise. Labels without a
/// leading number count as zero.
pub fn compare_sequence(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let left = SequenceParts::split(a);
    let right = SequenceParts::split(b);

    left.cmp_numeric(&right).then_with(|| {
        match (left.suffix.is_empty(), right.suffix.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => left.suffix.cmp(right.suffix),
        }
    })
}
