//! Static lookup tables shared by the encoder and decoder.
//!
//! Both reverse maps are indexed by the raw byte value and built at compile
//! time; `None` marks a byte outside the respective alphabet.

/// Base58 alphabet indexed by digit value (`'1'` is 0, `'z'` is 57).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base58 character standing for a leading zero byte.
pub const ZERO_DIGIT: u8 = ALPHABET[0];

/// Hex character used for leading zero bytes and padding.
pub const HEX_ZERO: u8 = b'0';

pub const BASE58_MAP: [Option<u8>; 256] = build_base58_map();

/// Accepts mixed case, so checksummed (EIP-55 style) hex parses as-is.
pub const HEX_MAP: [Option<u8>; 256] = build_hex_map();

const fn build_base58_map() -> [Option<u8>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
}

const fn build_hex_map() -> [Option<u8>; 256] {
    let mut table = [None; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = Some(i);
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'a' + i) as usize] = Some(10 + i);
        table[(b'A' + i) as usize] = Some(10 + i);
        i += 1;
    }
    table
}

#[inline]
pub fn base58_digit(byte: u8) -> Option<u8> {
    BASE58_MAP[byte as usize]
}

#[inline]
pub fn hex_nibble(byte: u8) -> Option<u8> {
    HEX_MAP[byte as usize]
}
