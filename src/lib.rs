//! Random alphanumeric password suggestions.
//!
//! Passwords are drawn character by character from `a–z`, `A–Z` and `0–9`, minus any characters
//! the caller excludes (by default, the easily confused `Il1O0q9covy`).
//!
//! ```
//! let password = mkpasswd::mkpasswd(mkpasswd::Options::new().length(12)).unwrap();
//! assert_eq!(password.len(), 12);
//! ```
//!
//! The randomness comes from `rand::thread_rng` and is not meant for generating secrets that
//! must withstand an attacker.

use rand::Rng;

pub mod alphabet;
mod length;
mod options;
mod password;
pub mod password_generation;

pub use length::Length;
pub use options::{Options, DEFAULT_EXCEPT, DEFAULT_LENGTH};
pub use password::Password;
pub use password_generation::Generator;

/// Generate a password from `options`, filling in the defaults for anything not given.
pub fn mkpasswd(options: Options) -> Result<Password, GenerateError> {
    Generator::new(options.with_defaults()).generate()
}

/// Like [`mkpasswd`], drawing randomness from `rng`.
pub fn mkpasswd_with<R>(rng: &mut R, options: Options) -> Result<Password, GenerateError>
where
    R: Rng + ?Sized,
{
    Generator::new(options.with_defaults()).generate_with(rng)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// The length is not a finite number of at least 1.
    #[error("the password length is not a number of at least 1")]
    InvalidLength,
    /// Every character of the alphabet was excluded.
    #[error("every character is excluded; there is nothing to build a password from")]
    EmptyAlphabet,
    /// The length is valid, but a password that long does not fit in memory.
    #[error("the password length is too large to allocate")]
    TooLong,
}

impl GenerateError {
    /// Whether this is the "not a number" outcome of an unusable length.
    pub fn is_not_a_number(&self) -> bool {
        *self == GenerateError::InvalidLength
    }

    /// NaN for an invalid length, for callers that expect a password or NaN.
    pub fn as_nan(&self) -> Option<f64> {
        self.is_not_a_number().then_some(f64::NAN)
    }
}
