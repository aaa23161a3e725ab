//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a random short code of the given length.
///
/// Each character is drawn uniformly and independently from the 62-symbol
/// alphanumeric alphabet (`a-z`, `A-Z`, `0-9`) using a cryptographically
/// secure generator, so existing codes cannot be predicted or enumerated.
/// At the default length of 8 the keyspace is 62^8 ≈ 2.18 * 10^14.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_requested_length() {
        assert_eq!(generate_code(8).len(), 8);
        assert_eq!(generate_code(12).len(), 12);
    }

    #[test]
    fn uses_only_alphanumeric_characters() {
        let code = generate_code(256);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(8));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn covers_the_full_alphabet() {
        // Over a long enough sample every character class must appear.
        let sample = generate_code(4096);
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }
}
