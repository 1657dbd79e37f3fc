use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    Base58Codec, Base58Error,
    tables::{self, ALPHABET, HEX_ZERO, ZERO_DIGIT},
};

impl Base58Codec {
    /// Encodes hex text (either case, no `0x` prefix) into Base58.
    ///
    /// Each leading zero byte (`"00"`) becomes one `'1'`. The input must
    /// describe whole bytes, so odd lengths are rejected.
    pub fn encode_from_hex<T>(&self, input: T) -> Result<String, Base58Error>
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        let mut output = String::new();
        self.encode_from_hex_into(input, &mut output)?;
        Ok(output)
    }

    /// Same as [`Base58Codec::encode_from_hex`], writing into `output`.
    pub fn encode_from_hex_into<T>(&self, input: T, output: &mut String) -> Result<(), Base58Error>
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        let bytes = input.as_ref();
        if bytes.is_empty() {
            return Err(Base58Error::InvalidInput("empty hex input"));
        }
        if bytes.len() % 2 != 0 {
            return Err(Base58Error::InvalidInput(
                "hex input must have an even number of digits",
            ));
        }

        let mut num_zeros = bytes.iter().take_while(|&&b| b == HEX_ZERO).count();
        log::debug!("[encode] Detected {num_zeros} leading zeros");
        if num_zeros % 2 == 1 {
            // A lone zero nibble belongs to the first non-zero byte.
            log::debug!("[encode] Rewinding one zero to keep whole bytes");
            num_zeros -= 1;
        }

        let magnitude = hex_magnitude(&bytes[num_zeros..], num_zeros)?;

        let digits = base58_digits(&magnitude);
        let nsize = digits.len();
        let out_len = nsize + num_zeros / 2;
        log::debug!("[encode] Sizes: nsize {nsize} / total {out_len}");

        output.clear();
        output.try_reserve_exact(out_len)?;
        output.extend(std::iter::repeat_n(ZERO_DIGIT as char, out_len - nsize));
        output.extend(digits.iter().map(|&d| ALPHABET[usize::from(d)] as char));

        Ok(())
    }
}

/// Folds hex nibbles (most significant first) into a single magnitude.
/// `offset` is the position of `nibbles[0]` within the caller's input.
fn hex_magnitude(nibbles: &[u8], offset: usize) -> Result<BigUint, Base58Error> {
    nibbles
        .iter()
        .enumerate()
        .try_fold(BigUint::zero(), |acc, (i, &byte)| {
            let value = tables::hex_nibble(byte).ok_or(Base58Error::InvalidDigit {
                byte,
                position: offset + i,
            })?;
            Ok((acc << 4u32) + u32::from(value))
        })
}

/// Base58 digit values of `magnitude`, most significant first.
///
/// A zero magnitude only arises when every input byte is zero, and those are
/// already written as leading `'1'`s, so it contributes no digits here.
fn base58_digits(magnitude: &BigUint) -> Vec<u8> {
    if magnitude.is_zero() {
        return Vec::new();
    }
    magnitude.to_radix_be(58)
}
