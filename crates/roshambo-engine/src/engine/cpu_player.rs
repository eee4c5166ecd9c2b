use std::{fmt::Write as _, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Gesture, ParseSeedError};

/// The computer opponent.
///
/// Draws one throw per round, independently and uniformly from
/// {Rock, Paper, Scissors}. The draw happens at the capture moment of each
/// round, never earlier, so the CPU cannot be influenced by (and cannot
/// react to) the player's gesture.
///
/// # Example
///
/// ```
/// use roshambo_engine::CpuPlayer;
///
/// let mut cpu = CpuPlayer::new();
/// let first = cpu.throw();
/// let second = cpu.throw();
/// ```
#[derive(Debug, Clone)]
pub struct CpuPlayer {
    rng: Pcg32,
}

impl Default for CpuPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic CPU throws.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator behind [`CpuPlayer`]. Using the same seed produces the same
/// sequence of throws, enabling:
///
/// - Reproducible matches for debugging
/// - Deterministic testing
///
/// # Example
///
/// ```
/// use roshambo_engine::{CpuPlayer, ThrowSeed};
/// use rand::Rng as _;
///
/// // Generate a random seed
/// let seed: ThrowSeed = rand::rng().random();
///
/// // Create two opponents with the same seed
/// let cpu1 = CpuPlayer::with_seed(seed);
/// let cpu2 = CpuPlayer::with_seed(seed);
///
/// // Both opponents will produce the same throw sequence
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThrowSeed([u8; 16]);

impl ThrowSeed {
    fn from_hex(hex_str: &str) -> Result<Self, String> {
        if hex_str.len() != 32 {
            return Err(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            ));
        }
        // `from_str_radix` tolerates a leading sign; the seed format does not.
        if !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex: {hex_str}"));
        }
        let num = u128::from_str_radix(hex_str, 16)
            .map_err(|e| format!("invalid hex: {hex_str} ({e})"))?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Parses the same 32-character hex form the serde impls use. This is what
/// backs a `--seed` command line flag.
impl FromStr for ThrowSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).map_err(|_| ParseSeedError)
    }
}

impl Serialize for ThrowSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for ThrowSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `ThrowSeed` values using the standard random
/// distribution, so `rng.random()` works idiomatically.
impl Distribution<ThrowSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ThrowSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ThrowSeed(seed)
    }
}

impl CpuPlayer {
    /// Creates a CPU opponent with a random seed.
    ///
    /// For deterministic throws, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic throws.
    #[must_use]
    pub fn with_seed(seed: ThrowSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Draws the next throw, uniformly from {Rock, Paper, Scissors}.
    ///
    /// `Unknown` is never drawn; it exists only as a classifier outcome.
    pub fn throw(&mut self) -> Gesture {
        Gesture::THROWS[self.rng.random_range(0..Gesture::THROWS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_from_bytes(bytes: [u8; 16]) -> ThrowSeed {
        ThrowSeed(bytes)
    }

    #[test]
    fn test_roundtrip_random_seed() {
        let seed: ThrowSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: ThrowSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed.0, deserialized.0);
    }

    #[test]
    fn test_format_is_32_char_hex_string() {
        let seed: ThrowSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();

        let hex_str = serialized.trim_matches('"');
        assert_eq!(hex_str.len(), 32);
        assert!(hex_str.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_value_sequential_bytes() {
        // Big-endian ordering: first byte appears first in the hex string.
        let seed = seed_from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");

        let deserialized: ThrowSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.0, seed.0);
    }

    #[test]
    fn test_error_invalid_hex_characters() {
        let json = "\"ghijklmnopqrstuvwxyzghijklmnopqr\""; // 32 chars but not hex
        let result: Result<ThrowSeed, _> = serde_json::from_str(json);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("invalid hex"));
    }

    #[test]
    fn test_error_wrong_length() {
        for json in [
            "\"0123456789abcdef0123456789abcde\"",   // 31 chars
            "\"0123456789abcdef0123456789abcdef0\"", // 33 chars
            "\"\"",
        ] {
            let result: Result<ThrowSeed, _> = serde_json::from_str(json);
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid hex"));
        }
    }

    #[test]
    fn test_error_leading_sign_rejected() {
        // 32 characters, but `+`/`-` are not hex digits.
        for hex_str in [
            "+0123456789abcdeffedcba987654321",
            "-0123456789abcdeffedcba987654321",
        ] {
            assert!(hex_str.parse::<ThrowSeed>().is_err());

            let json = format!("\"{hex_str}\"");
            let result: Result<ThrowSeed, _> = serde_json::from_str(&json);
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid hex"));
        }
    }

    #[test]
    fn test_from_str_matches_serde_form() {
        let seed: ThrowSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let hex_str = serialized.trim_matches('"');

        let parsed: ThrowSeed = hex_str.parse().unwrap();
        assert_eq!(parsed.0, seed.0);
        assert!("not-a-seed".parse::<ThrowSeed>().is_err());
    }

    #[test]
    fn test_deterministic_throws() {
        let seed = seed_from_bytes([
            0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88,
        ]);

        let mut cpu1 = CpuPlayer::with_seed(seed);
        let mut cpu2 = CpuPlayer::with_seed(seed);

        for _ in 0..50 {
            assert_eq!(cpu1.throw(), cpu2.throw());
        }
    }

    #[test]
    fn test_throws_are_always_throwable() {
        let mut cpu = CpuPlayer::new();
        for _ in 0..200 {
            let throw = cpu.throw();
            assert!(Gesture::THROWS.contains(&throw));
            assert_ne!(throw, Gesture::Unknown);
        }
    }
}
