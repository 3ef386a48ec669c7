use serde::{Deserialize, Serialize};

/// Whether inter-word spacing takes part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Spaces are dropped; a phrase orders as one unbroken token.
    LetterByLetter,
    /// Word boundaries order before any letter, so "New York" precedes "Newark".
    WordByWord,
}

/// How a digit run is rewritten (or kept) for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberSort {
    /// Replace the run with its spelled-out English name.
    NumberName,
    /// Keep the digits; the comparator orders them by magnitude.
    NumericalValue,
    /// Bucket the run under a letter derived from its leading digit,
    /// the way a printed index shelves "20-29" apart from "2-9".
    NumericalIndex,
}

/// Where a digit run sits in the string being normalized.
/// Derived per run, never configured by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberPosition {
    Initial,
    Internal,
    Terminal,
}

/// One immutable bundle of alphabetization choices.
///
/// Construct a preset with [`Options::book_index`] or [`Options::filename`]
/// and tweak fields before use; nothing mutates an `Options` afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Options {
    pub sort_mode: SortMode,
    pub initial_number_sort: NumberSort,
    pub internal_number_sort: NumberSort,
    pub terminal_number_sort: NumberSort,
    /// Read a bare 4-digit run as a spoken year ("nineteen eighty four").
    pub years: bool,
    /// Rewrite well-formed roman-numeral tokens to decimal digits.
    pub roman_numerals: bool,
    /// Drop a leading "the " or "a " token before anything else.
    pub ignore_initial_article: bool,
}

impl Options {
    /// How a printed non-fiction index orders entries: word-by-word,
    /// articles ignored, numbers named or bucketed, years and roman
    /// numerals read the way an indexer would read them aloud.
    pub fn book_index() -> Self {
        Self {
            sort_mode: SortMode::WordByWord,
            initial_number_sort: NumberSort::NumericalIndex,
            internal_number_sort: NumberSort::NumberName,
            terminal_number_sort: NumberSort::NumberName,
            years: true,
            roman_numerals: true,
            ignore_initial_article: true,
        }
    }

    /// Filename-style "natural" order: letter-by-letter, every digit run
    /// compared by numerical value, no article or numeral rewriting.
    pub fn filename() -> Self {
        Self {
            sort_mode: SortMode::LetterByLetter,
            initial_number_sort: NumberSort::NumericalValue,
            internal_number_sort: NumberSort::NumericalValue,
            terminal_number_sort: NumberSort::NumericalValue,
            years: false,
            roman_numerals: false,
            ignore_initial_article: false,
        }
    }

    pub(crate) fn number_sort_for(&self, position: NumberPosition) -> NumberSort {
        match position {
            NumberPosition::Initial => self.initial_number_sort,
            NumberPosition::Internal => self.internal_number_sort,
            NumberPosition::Terminal => self.terminal_number_sort,
        }
    }

    /// True when any position keeps literal digits in the key, which the
    /// comparator must then order by magnitude rather than code point.
    pub(crate) fn wants_natural_order(&self) -> bool {
        [
            self.initial_number_sort,
            self.internal_number_sort,
            self.terminal_number_sort,
        ]
        .contains(&NumberSort::NumericalValue)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::book_index()
    }
}
