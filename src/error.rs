use thiserror::Error;

#[derive(Error, Debug)]
pub enum LuhnError {
    #[error("Input for Luhn check cannot be absent")]
    NullInput,
    #[error("Input for Luhn check cannot be empty")]
    EmptyInput,
    #[error("Digit {value} at position {index} is outside the range [0,9]")]
    OutOfRange { index: usize, value: u8 },
    #[error("Character {character:?} at position {index} is not an ASCII digit")]
    InvalidCharacter { index: usize, character: char },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LuhnError {
    /// True when the underlying source could not be read at all, as opposed
    /// to a single record failing to decode.
    pub fn is_io_error(&self) -> bool {
        match self {
            LuhnError::Io(_) => true,
            LuhnError::Csv(e) => e.is_io_error(),
            _ => false,
        }
    }

    /// Input line a CSV decoding error was raised on, when csv tracked one.
    pub fn line(&self) -> Option<u64> {
        match self {
            LuhnError::Csv(e) => e.position().map(|pos| pos.line()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LuhnError>;
