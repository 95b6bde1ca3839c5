use std::fmt;

use serde::Serialize;

use crate::rand::{self, RandomDevice, RandomSource, RANDOM_BYTES};

/// 128 bit identifier built from random bytes, with the version and
/// variant bits of RFC 4122 section 4.4 forced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid([u8; RANDOM_BYTES]);

impl Uuid {
    /// Turns 16 random bytes into a version 4 UUID. Only the version
    /// nibble of byte 6 and the two variant bits of byte 8 are touched,
    /// every other bit comes straight from the input.
    pub const fn from_random_bytes(mut bytes: [u8; RANDOM_BYTES]) -> Self {
        // variant: high nibble of clock_seq_hi_and_reserved must be one
        // of 8, 9, a, b
        bytes[8] = (bytes[8] | 0x80) & 0xBF;
        // version: high nibble of time_hi_and_version must be 4
        bytes[6] = (bytes[6] | 0x40) & 0x4F;
        Self(bytes)
    }

    /// Generates a UUID out of an already opened random source
    pub fn generate<S: RandomSource>(src: &mut S) -> Result<Self, rand::Error> {
        let mut bytes = [0u8; RANDOM_BYTES];
        src.fill(&mut bytes)?;
        Ok(Self::from_random_bytes(bytes))
    }

    /// Generates a UUID, opening the random device for the duration of
    /// the call
    pub fn new_v4() -> Result<Self, rand::Error> {
        Self::generate(&mut RandomDevice::open()?)
    }

    pub fn as_bytes(&self) -> &[u8; RANDOM_BYTES] {
        &self.0
    }

    /// Canonical 36 character hyphenated form
    pub fn hyphenated(&self) -> String {
        self.to_string()
    }

    /// 32 character form without hyphens
    pub fn simple(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], // time_low
            b[4], b[5], // time_mid
            b[6], b[7], // time_hi_and_version
            b[8], b[9], // clock_seq_hi_and_reserved + clock_seq_low
            b[10], b[11], b[12], b[13], b[14], b[15], // node
        )
    }
}

impl Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
