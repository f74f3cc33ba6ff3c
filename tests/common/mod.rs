use rand::Rng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Loads a fixture file, skipping blank lines and `#` comments.
pub fn fixture_numbers(name: &str) -> Vec<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn random_digits<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..10)).collect()
}

pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Writes `rows` random numbers of 12 to 19 digits, one per line.
pub fn generate_numbers<R: Rng>(rng: &mut R, path: &Path, rows: usize) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for _ in 0..rows {
        let len = rng.gen_range(12..=19);
        writeln!(file, "{}", digits_to_string(&random_digits(rng, len)))?;
    }
    file.flush()?;
    Ok(())
}
