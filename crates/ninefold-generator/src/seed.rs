//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that makes puzzle generation reproducible.
///
/// Every random choice the generator makes (the candidate order of the
/// seed solve and the cells picked for removal) is drawn from a PRNG
/// keyed by this seed, so a seed plus a difficulty identifies a puzzle
/// exactly. Seeds display as (and parse from) 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("tuesday's puzzle");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase by hashing it.
    ///
    /// The same phrase always yields the same seed, which makes
    /// human-memorable puzzle identifiers possible ("daily-2026-08-04").
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the PRNG every generation step draws from.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

/// An error encountered while parsing a hex seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// The length of the rejected string, in characters.
        len: usize,
    },
    /// The string contained a non-hex character.
    #[display("invalid hex character {ch:?} in seed")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::WrongLength { len });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            for half in pair {
                let ch = char::from(*half);
                let nibble = ch
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidHexDigit { ch })?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    *byte = (*byte << 4) | nibble as u8;
                }
            }
        }
        Ok(Self(bytes))
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let hex = seed.to_string();
        assert_eq!(hex, "ab".repeat(32));
        assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        let a = PuzzleSeed::from_phrase("morning coffee");
        let b = PuzzleSeed::from_phrase("morning coffee");
        let c = PuzzleSeed::from_phrase("evening tea");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength { len: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let input = format!("zz{}", "0".repeat(62));
        assert_eq!(
            input.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidHexDigit { ch: 'z' })
        );
    }

    #[test]
    fn test_parse_accepts_mixed_case() {
        let seed = "AB".repeat(32).parse::<PuzzleSeed>().unwrap();
        assert_eq!(seed, PuzzleSeed::from_bytes([0xab; 32]));
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    #[test]
    fn test_debug_shows_hex() {
        let seed = PuzzleSeed::from_bytes([0x01; 32]);
        assert_eq!(format!("{seed:?}"), format!("PuzzleSeed(\"{seed}\")"));
    }
}
