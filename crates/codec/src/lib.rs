//! UUID ↔ index-optimized binary key codec.
//!
//! Storage engines that cluster rows by primary key degrade badly when keys
//! arrive in random order. Time-based UUIDs *are* roughly ordered, but their
//! textual layout puts the rapidly-incrementing timestamp low bits first and
//! the slowly-varying high bits in the middle, so a byte-for-byte binary
//! translation still inserts all over the index.
//!
//! This crate converts between UUID text and a 16-byte binary key whose field
//! order is permuted so the slowest-changing bits come first:
//!
//! ```text
//! text:  time_low(8) - time_mid(4) - time_hi_and_version(4) - clock_seq(4) - node(12)
//! key:   time_hi_and_version(2) | time_mid(2) | time_low(4) | clock_seq(2) | node(6)
//! ```
//!
//! No bits are altered, only field positions. Successive time-ordered UUIDs
//! therefore produce binary keys that sort close together.
//!
//! ## Text forms
//! - **Hyphenated**: 36 characters, dashes at indices 8, 13, 18, 23.
//!   Example: `550e8400-e29b-41d4-a716-446655440000`
//! - **Simple**: 32 hex characters, no dashes.
//!   Example: `550e8400e29b41d4a716446655440000`
//!
//! Input hex is accepted in either case; output hex is always lowercase.
//!
//! ## Entry points
//! - [`encode`] / [`decode`]: the two conversions as plain functions.
//! - [`encode_opt`] / [`decode_opt`]: the same, propagating an absent input
//!   as an absent output (for callers with nullable columns).
//! - [`UuidKey`]: a wrapper that guarantees the optimized layout once
//!   constructed, with `Display`/`FromStr` and `uuid::Uuid` interop.
//!
//! Every call is stateless and owns its buffers, so the codec is reentrant
//! and thread-safe by construction.

mod codec;
mod fields;
pub mod hex;
mod key;

pub use codec::{decode, decode_opt, encode, encode_opt, TextFormat};
pub use fields::UuidFields;
pub use key::UuidKey;

/// Byte length of the optimized binary key.
pub const KEY_LEN: usize = 16;

/// Character length of the hyphenated text form.
pub const TEXT_LEN_HYPHENATED: usize = 36;

/// Character length of the simple (undashed) text form.
pub const TEXT_LEN_SIMPLE: usize = 32;

/// Error type for codec operations.
///
/// All failures are deterministic consequences of malformed input; none are
/// transient and none leave partial output behind.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input length does not match the length mandated by the requested
    /// format and direction (36 or 32 for text, 16 for binary).
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A character expected to be a hexadecimal digit is not one.
    #[error("invalid hex digit {byte:?} at position {position}")]
    InvalidHexDigit { byte: char, position: usize },
    /// Hyphenated input with something other than `-` at a separator index.
    #[error("expected '-' at position {position}, got {byte:?}")]
    InvalidSeparator { byte: char, position: usize },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
