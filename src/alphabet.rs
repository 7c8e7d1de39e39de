//! The character pool passwords are drawn from.

/// Every character a password may contain: lowercase, then uppercase, then digits.
pub static ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
);

/// The alphabet with every character found in `except` taken out.
///
/// Characters of `except` that are not in the alphabet, or that appear more than once, have no
/// effect. Order of the remaining characters is preserved.
pub fn effective_alphabet(except: &str) -> Vec<char> {
    ALPHABET.chars().filter(|ch| !except.contains(*ch)).collect()
}
