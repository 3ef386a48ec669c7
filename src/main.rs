use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};

use alphabetizer::{Alphabetizer, Options, SortMode};

/// Sort words and phrases the way a librarian or index compiler would.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Items to sort; read from stdin (one per line) when omitted.
    items: Vec<String>,
    /// Configuration preset to start from.
    #[arg(long, value_enum, default_value = "book")]
    preset: Preset,
    /// Ignore inter-word spacing (letter-by-letter order).
    #[arg(long)]
    letter_by_letter: bool,
    /// Read bare 4-digit runs as spoken years.
    #[arg(long)]
    years: bool,
    /// Convert roman-numeral tokens to decimal before ordering.
    #[arg(long)]
    roman: bool,
    /// Drop a leading "the " or "a ".
    #[arg(long)]
    ignore_article: bool,
    /// Show the computed key next to each item instead of sorting.
    #[arg(long)]
    keys: bool,
    /// Emit the sorted items as a JSON array.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    /// Book-index order: word-by-word, articles ignored, numbers named.
    Book,
    /// Filename order: letter-by-letter, digit runs by numerical value.
    Natural,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Build options: preset first, then individual overrides.
    let mut options = match args.preset {
        Preset::Book => Options::book_index(),
        Preset::Natural => Options::filename(),
    };
    if args.letter_by_letter {
        options.sort_mode = SortMode::LetterByLetter;
    }
    if args.years {
        options.years = true;
    }
    if args.roman {
        options.roman_numerals = true;
    }
    if args.ignore_article {
        options.ignore_initial_article = true;
    }

    // Collect input items.
    let items: Vec<String> = if args.items.is_empty() {
        match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Failed reading stdin: {e}");
                std::process::exit(1);
            }
        }
    } else {
        args.items
    };

    let abz = Alphabetizer::new(options);

    // Show keys without sorting, if requested.
    if args.keys {
        for item in &items {
            println!("{}\t{}", abz.key(item), item);
        }
        return;
    }

    // Sort and print.
    let sorted = abz.sort(items);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&sorted).unwrap());
    } else {
        for item in &sorted {
            println!("{item}");
        }
    }
}
