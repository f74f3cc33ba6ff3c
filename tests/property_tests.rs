use luhn_engine::{
    LuhnError, check_digit, check_digit_str, checksum, checksum_str, complete_str, is_valid,
    is_valid_str,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod common;

const ROUNDS: usize = 2_000;

#[test]
fn test_appending_check_digit_yields_zero_checksum() {
    let mut rng = StdRng::seed_from_u64(0x1u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..=40);
        let mut digits = common::random_digits(&mut rng, len);
        let digit = check_digit(&digits).unwrap();
        assert!(digit <= 9);
        digits.push(digit);
        assert_eq!(checksum(&digits).unwrap(), 0, "digits {digits:?}");
    }
}

#[test]
fn test_is_valid_matches_zero_checksum() {
    let mut rng = StdRng::seed_from_u64(0x2u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..=40);
        let digits = common::random_digits(&mut rng, len);
        let sum = checksum(&digits).unwrap();
        assert!(sum <= 9);
        assert_eq!(is_valid(&digits).unwrap(), sum == 0);
    }
}

#[test]
fn test_sequence_and_string_flavours_agree() {
    let mut rng = StdRng::seed_from_u64(0x3u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..=40);
        let digits = common::random_digits(&mut rng, len);
        let s = common::digits_to_string(&digits);
        assert_eq!(checksum(&digits).unwrap(), checksum_str(&s).unwrap());
        assert_eq!(is_valid(&digits).unwrap(), is_valid_str(&s).unwrap());
        assert_eq!(check_digit(&digits).unwrap(), check_digit_str(&s).unwrap());
    }
}

#[test]
fn test_complete_str_is_always_valid() {
    let mut rng = StdRng::seed_from_u64(0x4u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..=25);
        let s = common::digits_to_string(&common::random_digits(&mut rng, len));
        let completed = complete_str(&s).unwrap();
        assert!(completed.starts_with(&s));
        assert_eq!(completed.len(), s.len() + 1);
        assert!(is_valid_str(&completed).unwrap(), "{completed}");
    }
}

#[test]
fn test_single_digit_substitution_is_detected() {
    let mut rng = StdRng::seed_from_u64(0x5u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(2..=20);
        let mut digits = common::random_digits(&mut rng, len);
        let digit = check_digit(&digits).unwrap();
        digits.push(digit);

        let pos = rng.gen_range(0..digits.len());
        let original = digits[pos];
        let replacement = (original + rng.gen_range(1..10)) % 10;
        digits[pos] = replacement;
        assert!(!is_valid(&digits).unwrap(), "digits {digits:?}");
    }
}

#[test]
fn test_adjacent_transposition_is_detected() {
    let mut rng = StdRng::seed_from_u64(0x6u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(2..=20);
        let mut digits = common::random_digits(&mut rng, len);
        let digit = check_digit(&digits).unwrap();
        digits.push(digit);

        let pos = rng.gen_range(0..digits.len() - 1);
        let (a, b) = (digits[pos], digits[pos + 1]);
        // Equal digits and the 0/9 pair are the documented blind spots
        if a == b || (a.min(b) == 0 && a.max(b) == 9) {
            continue;
        }
        digits.swap(pos, pos + 1);
        assert!(!is_valid(&digits).unwrap(), "digits {digits:?}");
    }
}

#[test]
fn test_out_of_range_digit_is_rejected_anywhere() {
    let mut rng = StdRng::seed_from_u64(0x7u64);
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..=20);
        let mut digits = common::random_digits(&mut rng, len);
        let pos = rng.gen_range(0..len);
        digits[pos] = rng.gen_range(10..=u8::MAX);

        match checksum(&digits) {
            Err(LuhnError::OutOfRange { index, value }) => {
                assert_eq!(index, pos);
                assert_eq!(value, digits[pos]);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        assert!(matches!(
            check_digit(&digits),
            Err(LuhnError::OutOfRange { .. })
        ));
    }
}
