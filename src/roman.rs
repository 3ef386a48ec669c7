use std::sync::LazyLock;

use regex::Regex;

// Anchored subtractive grammar: thousands, then at most one hundreds,
// tens, and ones group. Matches well-formed numerals only ("viii", "xc",
// "mcmxcix"), never partial spans inside a malformed token.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^m*(cm|cd|d?c{0,3})(xc|xl|l?x{0,3})(ix|iv|v?i{0,3})$").unwrap()
});

/// Decimal value of `token` if it is a well-formed lowercase roman numeral.
pub(crate) fn decode(token: &str) -> Option<u32> {
    if token.is_empty() || !GRAMMAR.is_match(token) {
        return None;
    }
    // Scan right to left; a value below the one just seen is subtractive.
    let mut total: i32 = 0;
    let mut prev = 0;
    for c in token.chars().rev() {
        let value = match c {
            'm' => 1000,
            'd' => 500,
            'c' => 100,
            'l' => 50,
            'x' => 10,
            'v' => 5,
            'i' => 1,
            _ => return None,
        };
        if value < prev {
            total -= value;
        } else {
            total += value;
        }
        prev = value;
    }
    Some(total as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_numerals() {
        assert_eq!(decode("i"), Some(1));
        assert_eq!(decode("viii"), Some(8));
        assert_eq!(decode("xiv"), Some(14));
        assert_eq!(decode("xl"), Some(40));
        assert_eq!(decode("dccc"), Some(800));
        assert_eq!(decode("mmxxv"), Some(2025));
    }

    #[test]
    fn subtractive_pairs() {
        assert_eq!(decode("iv"), Some(4));
        assert_eq!(decode("ix"), Some(9));
        assert_eq!(decode("xc"), Some(90));
        assert_eq!(decode("cm"), Some(900));
        assert_eq!(decode("mcmxcix"), Some(1999));
    }

    #[test]
    fn malformed_tokens_do_not_decode() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("iiii"), None);
        assert_eq!(decode("vx"), None);
        assert_eq!(decode("im"), None);
        assert_eq!(decode("xm"), None);
        assert_eq!(decode("civil"), None);
        assert_eq!(decode("mixup"), None);
    }

    #[test]
    fn ordinary_words_that_happen_to_scan() {
        // All-roman-letter words are numerals to the grammar; "mix" is 1009.
        assert_eq!(decode("mix"), Some(1009));
        assert_eq!(decode("dix"), Some(509));
    }
}
