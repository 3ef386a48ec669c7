//! Natural-order string comparison: embedded digit runs compare by
//! numerical value instead of character by character, so "img2" sorts
//! ahead of "img10". Kept as a leaf module with no options plumbed in;
//! it is a reusable primitive with exactly this contract.

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

#[derive(Debug, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Compare two strings run by run, leftmost first; the first differing
/// run pair decides. A strict prefix sorts before its extension.
pub fn compare(a: &str, b: &str) -> Ordering {
    for pair in runs(a).into_iter().zip_longest(runs(b)) {
        let ord = match pair {
            EitherOrBoth::Both(Run::Digits(da), Run::Digits(db)) => cmp_digit_runs(da, db),
            EitherOrBoth::Both(Run::Digits(da), Run::Text(tb)) => da.cmp(tb),
            EitherOrBoth::Both(Run::Text(ta), Run::Digits(db)) => ta.cmp(db),
            EitherOrBoth::Both(Run::Text(ta), Run::Text(tb)) => ta.cmp(tb),
            EitherOrBoth::Left(_) => Ordering::Greater,
            EitherOrBoth::Right(_) => Ordering::Less,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

// By value first; leading zeros only break ties, the textually shorter
// run ("7" against "007") sorting first.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let sig_a = a.trim_start_matches('0');
    let sig_b = b.trim_start_matches('0');
    sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
        .then_with(|| a.len().cmp(&b.len()))
}

// Maximal alternating digit / non-digit runs, left to right. Run borders
// always fall on ASCII digits, so the slices stay on char boundaries.
fn runs(s: &str) -> Vec<Run<'_>> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    while start < bytes.len() {
        let is_digit = bytes[start].is_ascii_digit();
        let mut end = start + 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() == is_digit {
            end += 1;
        }
        let text = &s[start..end];
        out.push(if is_digit {
            Run::Digits(text)
        } else {
            Run::Text(text)
        });
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn digit_runs_compare_by_value() {
        assert_eq!(compare("img2", "img10"), Ordering::Less);
        assert_eq!(compare("9", "10"), Ordering::Less);
        assert_eq!(compare("a99b", "a100a"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_break_ties_short_first() {
        assert_eq!(compare("7", "007"), Ordering::Less);
        assert_eq!(compare("007", "7"), Ordering::Greater);
        assert_eq!(compare("a07b", "a7c"), Ordering::Greater);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(compare("img", "img1"), Ordering::Less);
        assert_eq!(compare("img1", "img1a"), Ordering::Less);
        assert_eq!(compare("", "x"), Ordering::Less);
    }

    #[test]
    fn text_runs_use_code_point_order() {
        assert_eq!(compare("apple", "banana"), Ordering::Less);
        assert_eq!(compare("same", "same"), Ordering::Equal);
    }
}
