use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum for failures raised while spelling a digit run as English words
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpellError {
    // Variant for a run that reached the speller with a non-digit in it
    #[error("invalid digit group: {0:?}")]
    InvalidDigits(String),

    // Variant for a run too long to name: no magnitude word covers it
    #[error("no magnitude word for a group with {0} digits after it")]
    UnsupportedMagnitude(usize),
}

// Type alias for results that use `SpellError` as the error type
pub type Result<T> = std::result::Result<T, SpellError>;
