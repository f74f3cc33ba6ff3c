pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logger;

pub use domain::digits::{validate_digit_string, validate_sequence};
pub use domain::luhn::{
    check_digit, check_digit_str, checksum, checksum_str, complete_str, is_valid, is_valid_str,
};
pub use error::{LuhnError, Result};
