//! The five UUID fields and their two binary layouts.
//!
//! A UUID is five fields, rendered left to right in text as
//! `time_low-time_mid-time_hi_and_version-clock_seq-node`. RFC 4122 binary
//! keeps that order. The optimized key permutes it so that, for time-based
//! UUIDs, the slowest-changing field leads:
//!
//! ```text
//! RFC bytes:  time_low[0..4] | time_mid[4..6] | time_hi[6..8] | clock_seq[8..10] | node[10..16]
//! key bytes:  time_hi[0..2]  | time_mid[2..4] | time_low[4..8] | clock_seq[8..10] | node[10..16]
//! ```
//!
//! [`UuidFields`] is the single place that permutation is written down; both
//! pipelines and the `uuid::Uuid` interop go through it rather than repeating
//! offset arithmetic.

/// The five fields of a UUID as named byte arrays.
///
/// Constructing from one layout and serializing to the other performs the
/// field permutation without touching any bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UuidFields {
    pub time_low: [u8; 4],
    pub time_mid: [u8; 2],
    pub time_hi_and_version: [u8; 2],
    pub clock_seq: [u8; 2],
    pub node: [u8; 6],
}

impl UuidFields {
    /// Reads the optimized key layout.
    pub fn from_key_bytes(bytes: &[u8; 16]) -> Self {
        Self {
            time_hi_and_version: [bytes[0], bytes[1]],
            time_mid: [bytes[2], bytes[3]],
            time_low: [bytes[4], bytes[5], bytes[6], bytes[7]],
            clock_seq: [bytes[8], bytes[9]],
            node: [
                bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
            ],
        }
    }

    /// Writes the optimized key layout.
    pub fn to_key_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..2].copy_from_slice(&self.time_hi_and_version);
        out[2..4].copy_from_slice(&self.time_mid);
        out[4..8].copy_from_slice(&self.time_low);
        out[8..10].copy_from_slice(&self.clock_seq);
        out[10..16].copy_from_slice(&self.node);
        out
    }

    /// Reads the RFC 4122 layout (standard field order, as produced by
    /// `uuid::Uuid::as_bytes`).
    pub fn from_rfc_bytes(bytes: &[u8; 16]) -> Self {
        Self {
            time_low: [bytes[0], bytes[1], bytes[2], bytes[3]],
            time_mid: [bytes[4], bytes[5]],
            time_hi_and_version: [bytes[6], bytes[7]],
            clock_seq: [bytes[8], bytes[9]],
            node: [
                bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
            ],
        }
    }

    /// Writes the RFC 4122 layout.
    pub fn to_rfc_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.time_low);
        out[4..6].copy_from_slice(&self.time_mid);
        out[6..8].copy_from_slice(&self.time_hi_and_version);
        out[8..10].copy_from_slice(&self.clock_seq);
        out[10..16].copy_from_slice(&self.node);
        out
    }
}
