//! Base58 <-> hex radix conversion.
//!
//! Data travels as hex text on one side and Base58 text (Bitcoin alphabet,
//! no checksum, no version byte) on the other. Leading zero bytes survive
//! the trip in both directions: each `"00"` pair maps to one `'1'`.

mod decode;
mod encode;
pub mod error;
pub mod logger;
pub mod tables;

pub use error::Base58Error;
pub use tables::ALPHABET;

/// Stateless Base58 codec; the only state it reads is the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Codec;

/// Decodes Base58 text into lowercase hex. See [`Base58Codec::decode_to_hex`].
pub fn decode_to_hex<T: AsRef<[u8]>>(input: T) -> Result<String, Base58Error> {
    Base58Codec.decode_to_hex(input)
}

/// Encodes hex text into Base58. See [`Base58Codec::encode_from_hex`].
pub fn encode_from_hex<T: AsRef<[u8]>>(input: T) -> Result<String, Base58Error> {
    Base58Codec.encode_from_hex(input)
}
