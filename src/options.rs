//! Caller-facing options and their defaults.

use serde::{Deserialize, Deserializer};

use crate::length::Length;

/// Password length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: u32 = 8;

/// Characters left out unless the caller says otherwise: glyphs easily confused with one another.
pub static DEFAULT_EXCEPT: &str = "Il1O0q9covy";

/// Options for generating a password.
///
/// `None` means "not given". For `except`, an empty string is different from `None`: it
/// excludes nothing, where `None` excludes [`DEFAULT_EXCEPT`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// An explicit `null` is kept as [`Length::Null`] rather than treated as absent.
    #[serde(default, deserialize_with = "present")]
    pub length: Option<Length>,
    pub except: Option<String>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn length(mut self, length: impl Into<Length>) -> Options {
        self.length = Some(length.into());
        self
    }

    pub fn except(mut self, except: impl Into<String>) -> Options {
        self.except = Some(except.into());
        self
    }

    /// Fill in whatever was not given from the defaults.
    pub fn with_defaults(self) -> Options {
        self.or(Options {
            length: Some(Length::from(DEFAULT_LENGTH)),
            except: Some(DEFAULT_EXCEPT.to_owned()),
        })
    }

    /// Shallow merge: each field of `self` that was given wins over the one in `fallback`.
    pub fn or(self, fallback: Options) -> Options {
        Options {
            length: self.length.or(fallback.length),
            except: self.except.or(fallback.except),
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Length>, D::Error>
where
    D: Deserializer<'de>,
{
    Length::deserialize(deserializer).map(Some)
}
