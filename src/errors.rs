use std::error;
use std::fmt;

/// Error returned when the sequence length input is not a positive integer.
///
/// The inner `String` is the rejected input. This type implements
/// `error::Error` and `Display` so it can flow through `anyhow` at the
/// application boundary while staying matchable in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLength(pub String);

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a valid sequence length, please enter a positive integer",
            self.0
        )
    }
}

impl error::Error for InvalidLength {}

/// Parses a user-entered sequence length.
///
/// The input is trimmed and parsed as an integer; parse failures and values
/// less than or equal to zero are both rejected.
///
/// # Arguments
/// * `input` - Raw user input
///
/// # Returns
/// The validated positive length, or [`InvalidLength`] carrying the input
pub fn validate_sequence_length(input: &str) -> Result<usize, InvalidLength> {
    let input = input.trim();

    match input.parse::<i64>() {
        Ok(length) if length > 0 => Ok(length as usize),
        _ => Err(InvalidLength(input.to_string())),
    }
}
