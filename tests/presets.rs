use alphabetizer::{normalize, sort_all, NumberSort, Options, SortMode};

#[test]
fn test_book_preset_shape() {
    let opts = Options::book_index();
    assert_eq!(opts.sort_mode, SortMode::WordByWord);
    assert_eq!(opts.initial_number_sort, NumberSort::NumericalIndex);
    assert_eq!(opts.internal_number_sort, NumberSort::NumberName);
    assert!(opts.roman_numerals);
    assert!(opts.ignore_initial_article);
}

#[test]
fn test_filename_preset_shape() {
    let opts = Options::filename();
    assert_eq!(opts.sort_mode, SortMode::LetterByLetter);
    assert_eq!(opts.initial_number_sort, NumberSort::NumericalValue);
    assert_eq!(opts.internal_number_sort, NumberSort::NumericalValue);
    assert_eq!(opts.terminal_number_sort, NumberSort::NumericalValue);
    assert!(!opts.years);
    assert!(!opts.roman_numerals);
    assert!(!opts.ignore_initial_article);
}

#[test]
fn test_numerical_index_buckets_by_leading_digit() {
    // A printed index shelves 2-9 apart from 20-29: the leading digit's
    // bucket letter decides before any magnitude does.
    let opts = Options::book_index();
    let sorted = sort_all(&opts, ["24 hours", "9 lives", "3 men"]);
    assert_eq!(sorted, ["24 hours", "3 men", "9 lives"]);
}

#[test]
fn test_word_by_word_vs_letter_by_letter() {
    let mut opts = Options::book_index();
    let word = sort_all(&opts, ["New York", "Newark"]);
    assert_eq!(word, ["New York", "Newark"]);

    opts.sort_mode = SortMode::LetterByLetter;
    let letter = sort_all(&opts, ["New York", "Newark"]);
    assert_eq!(letter, ["Newark", "New York"]);
}

#[test]
fn test_number_name_orders_by_spelling() {
    let mut opts = Options::book_index();
    opts.initial_number_sort = NumberSort::NumberName;
    // eight < one hundred < two, alphabetically by name.
    let sorted = sort_all(&opts, ["2 doors", "100 doors", "8 doors"]);
    assert_eq!(sorted, ["8 doors", "100 doors", "2 doors"]);
}

#[test]
fn test_overriding_a_preset_field() {
    let mut opts = Options::filename();
    opts.ignore_initial_article = true;
    assert_eq!(normalize(&opts, "The cat"), normalize(&opts, "cat"));
}
