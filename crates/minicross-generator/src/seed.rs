use std::{fmt, str::FromStr};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 256-bit seed that reproduces a puzzle exactly.
///
/// The text form is 64 lowercase hex digits; parsing also accepts uppercase.
///
/// # Examples
///
/// ```
/// use minicross_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.as_bytes()[0], 0x12);
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator driving one generation run.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The string does not have exactly 64 characters.
    #[display("expected 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid hex digit {ch:?}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len });
        }
        let digits = s
            .chars()
            .map(|ch| {
                ch.to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(PuzzleSeedParseError::InvalidDigit { ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
