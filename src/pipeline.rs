use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::options::{NumberPosition, NumberSort, Options, SortMode};
use crate::{roman, spell};

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Reduce `input` to its canonical sort key under `options`.
///
/// The stages must run in this order: the charset fold before anything
/// that looks at spaces, year phrases before the per-position digit
/// rules, and the sort-mode fold last to consume the remaining spaces.
pub(crate) fn normalize(options: &Options, input: &str) -> String {
    let mut s = fold_charset(input);
    if options.ignore_initial_article {
        s = strip_initial_article(s);
    }
    if options.years {
        s = substitute_years(&s);
    }
    if options.roman_numerals {
        s = substitute_roman_numerals(&s);
    }
    s = transform_digit_runs(options, &s);
    match options.sort_mode {
        SortMode::LetterByLetter => s.chars().filter(|c| *c != ' ').collect(),
        // 'A' sorts below every lowercase letter, so a word boundary
        // orders before any letter continuing the same word.
        SortMode::WordByWord => s.replace(' ', "A"),
    }
}

// Lowercase; parentheses count as spaces; everything outside ASCII
// alphanumerics, Latin-1 accented letters, and the space is dropped.
fn fold_charset(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        match c {
            '(' | ')' => out.push(' '),
            ' ' => out.push(c),
            _ if c.is_ascii_alphanumeric() => out.push(c),
            '\u{00c0}'..='\u{00ff}' if c != '\u{00d7}' && c != '\u{00f7}' => out.push(c),
            _ => {}
        }
    }
    out
}

// Exactly one leading "the " or "a " token; "at home" keeps its 'a'.
fn strip_initial_article(s: String) -> String {
    for article in ["the ", "a "] {
        if let Some(rest) = s.strip_prefix(article) {
            return rest.to_string();
        }
    }
    s
}

fn substitute_years(s: &str) -> String {
    replace_digit_runs(s, |run| {
        if run.len() != 4 {
            return None;
        }
        match spell::year_phrase(run) {
            Ok(phrase) => Some(phrase),
            Err(err) => {
                tracing::warn!(run, %err, "year left as digits");
                None
            }
        }
    })
}

// Tokens are space-delimited; after the charset fold that is the only
// boundary left, which also keeps the grammar from firing mid-word.
fn substitute_roman_numerals(s: &str) -> String {
    s.split(' ')
        .map(|token| match roman::decode(token) {
            Some(value) => value.to_string(),
            None => token.to_string(),
        })
        .join(" ")
}

fn transform_digit_runs(options: &Options, s: &str) -> String {
    replace_digit_runs_positioned(s, |run, position| {
        match options.number_sort_for(position) {
            NumberSort::NumericalValue => None,
            NumberSort::NumberName => match spell::spell(run) {
                Ok(words) => Some(words),
                Err(err) => {
                    tracing::warn!(run, %err, "digit run left as digits");
                    None
                }
            },
            NumberSort::NumericalIndex => {
                let lead = run.as_bytes()[0];
                let mut out = String::with_capacity(run.len() + 1);
                if (b'1'..=b'9').contains(&lead) {
                    out.push((b'A' + lead - b'1') as char);
                }
                out.push_str(run);
                Some(out)
            }
        }
    })
}

fn replace_digit_runs(s: &str, mut replace: impl FnMut(&str) -> Option<String>) -> String {
    replace_digit_runs_positioned(s, |run, _| replace(run))
}

// Walk every maximal digit run; `replace` returns the substitution or
// None to keep the run verbatim.
fn replace_digit_runs_positioned(
    s: &str,
    mut replace: impl FnMut(&str, NumberPosition) -> Option<String>,
) -> String {
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;
    for m in DIGIT_RUN.find_iter(s) {
        let position = if m.start() == 0 {
            // A run that is the whole string counts as initial.
            NumberPosition::Initial
        } else if m.end() == s.len() {
            NumberPosition::Terminal
        } else {
            NumberPosition::Internal
        };
        out.push_str(&s[copied..m.start()]);
        match replace(m.as_str(), position) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(m.as_str()),
        }
        copied = m.end();
    }
    out.push_str(&s[copied..]);
    out
}
