//! Utilities for generating passwords.

use log::{debug, trace};
use rand::Rng;

use crate::alphabet::effective_alphabet;
use crate::length::Length;
use crate::options::{Options, DEFAULT_EXCEPT};
use crate::{GenerateError, Password};

/// Generate a password by just randomly sampling the given alphabet, with replacement.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
///
/// Returns an empty password if `alphabet` is empty, and [`GenerateError::TooLong`] if room for
/// `len` characters cannot be allocated.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<Password, GenerateError>
where
    R: Rng + ?Sized,
{
    let mut password = Password(String::new());
    if alphabet.is_empty() {
        return Ok(password);
    }
    password
        .0
        .try_reserve(len)
        .map_err(|_| GenerateError::TooLong)?;
    let species_range = alphabet.len() - 1;
    for _ in 0..len {
        let idx = rng.gen_range(0..=species_range);
        password.0.push(alphabet[idx]);
    }
    Ok(password)
}

/// Generates passwords of one length, leaving out one set of characters.
///
/// Nothing is validated at construction; a bad length is only reported by
/// [`generate`](Generator::generate).
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    length: Length,
    except: String,
}

impl Generator {
    /// Build a generator from `options`, as given.
    ///
    /// A missing (or null) length falls back to 0, which never validates; callers wanting the
    /// usual default of 8 should go through [`Options::with_defaults`] or [`crate::mkpasswd`].
    /// A missing `except` falls back to [`DEFAULT_EXCEPT`].
    pub fn new(options: Options) -> Generator {
        let length = match options.length {
            None | Some(Length::Null) => Length::from(0),
            Some(length) => length,
        };
        Generator {
            length,
            except: options.except.unwrap_or_else(|| DEFAULT_EXCEPT.to_owned()),
        }
    }

    pub fn length(&self) -> &Length {
        &self.length
    }

    pub fn except(&self) -> &str {
        &self.except
    }

    /// Generate a password using the calling thread's random number generator.
    pub fn generate(&self) -> Result<Password, GenerateError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a password, drawing randomness from `rng`.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<Password, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let count = self.length.count()?;
        let alphabet = effective_alphabet(&self.except);
        debug!(
            "generating {} characters from an alphabet of {}",
            count,
            alphabet.len()
        );
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }
        let password = generate_random_password(rng, &alphabet, count)?;
        trace!("generated a password of {} characters", password.len());
        Ok(password)
    }
}
