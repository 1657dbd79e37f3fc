use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    Base58Codec, Base58Error,
    tables::{self, HEX_ZERO, ZERO_DIGIT},
};

impl Base58Codec {
    /// Decodes Base58 text into a freshly allocated lowercase hex string.
    ///
    /// Every leading `'1'` becomes one `"00"` byte pair, and the numeric body
    /// is padded to a whole number of bytes.
    pub fn decode_to_hex<T>(&self, input: T) -> Result<String, Base58Error>
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        let mut output = String::new();
        self.decode_to_hex_into(input, &mut output)?;
        Ok(output)
    }

    /// Same as [`Base58Codec::decode_to_hex`], writing into `output`.
    ///
    /// The buffer is cleared and refilled so its capacity can be reused across
    /// calls. It is left untouched when the input is rejected.
    pub fn decode_to_hex_into<T>(&self, input: T, output: &mut String) -> Result<(), Base58Error>
    where
        T: AsRef<[u8]>,
        Self: Send + Sync,
    {
        let bytes = input.as_ref();
        if bytes.is_empty() {
            return Err(Base58Error::InvalidInput("empty base58 input"));
        }

        let num_zeros = bytes.iter().take_while(|&&b| b == ZERO_DIGIT).count();
        log::debug!("[decode] Detected {num_zeros} leading zeros");

        let magnitude = base58_magnitude(&bytes[num_zeros..], num_zeros)?;

        let nsize = hex_digit_count(&magnitude);
        let out_len = nsize + nsize % 2 + num_zeros * 2;
        log::debug!("[decode] Sizes: nsize {nsize} / total {out_len}");

        output.clear();
        output.try_reserve_exact(out_len)?;
        output.extend(std::iter::repeat_n(HEX_ZERO as char, out_len - nsize));
        if nsize > 0 {
            output.push_str(&magnitude.to_str_radix(16));
        }
        debug_assert_eq!(output.len(), out_len);

        Ok(())
    }
}

/// Folds Base58 digits (most significant first) into a single magnitude.
/// `offset` is the position of `digits[0]` within the caller's input.
fn base58_magnitude(digits: &[u8], offset: usize) -> Result<BigUint, Base58Error> {
    digits
        .iter()
        .enumerate()
        .try_fold(BigUint::zero(), |acc, (i, &byte)| {
            let value = tables::base58_digit(byte).ok_or(Base58Error::InvalidDigit {
                byte,
                position: offset + i,
            })?;
            log::trace!("[decode] n={} c='{}' v={value}", offset + i, byte as char);
            Ok(acc * 58u32 + u32::from(value))
        })
}

/// Number of hex digits in `magnitude`; zero has none, its bytes are
/// carried entirely by the leading zero count.
fn hex_digit_count(magnitude: &BigUint) -> usize {
    magnitude.bits().div_ceil(4) as usize
}

#[cfg(test)]
mod tests {
    use super::Base58Codec;
    use crate::Base58Error;

    #[test]
    fn test_known_vectors() {
        let codec = Base58Codec;
        assert_eq!(codec.decode_to_hex("11233QC4").unwrap(), "0000287fb4cd");
        assert_eq!(
            codec.decode_to_hex("2NEpo7TZRRrLZSi2U").unwrap(),
            "48656c6c6f20576f726c6421" // "Hello World!"
        );
        assert_eq!(codec.decode_to_hex("1jg").unwrap(), "0009ab");
    }

    #[test]
    fn test_body_padded_to_whole_bytes() {
        let codec = Base58Codec;
        assert_eq!(codec.decode_to_hex("2").unwrap(), "01");
        assert_eq!(codec.decode_to_hex("z").unwrap(), "39");
        assert_eq!(codec.decode_to_hex("1G").unwrap(), "000f");
    }

    #[test]
    fn test_all_zero_digits() {
        let codec = Base58Codec;
        for k in 1..=8 {
            let input = "1".repeat(k);
            assert_eq!(
                codec.decode_to_hex(&input).unwrap(),
                "00".repeat(k),
                "Failed for {k} zero digits"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let codec = Base58Codec;
        assert_eq!(
            codec.decode_to_hex(""),
            Err(Base58Error::InvalidInput("empty base58 input"))
        );
    }

    #[test]
    fn test_decode_invalid_characters() {
        let codec = Base58Codec;
        let cases: &[(&str, u8, usize)] = &[
            ("0", b'0', 0),
            ("11O", b'O', 2),
            ("2NEpl", b'l', 4),
            ("abIc", b'I', 2),
            ("1 2", b' ', 1),
        ];

        for &(input, byte, position) in cases {
            assert_eq!(
                codec.decode_to_hex(input),
                Err(Base58Error::InvalidDigit { byte, position }),
                "Invalid input '{input}' should error"
            );
        }

        let err = codec.decode_to_hex("abc\u{2603}def").unwrap_err();
        assert!(matches!(err, Base58Error::InvalidDigit { position: 3, .. }));
    }

    #[test]
    fn test_reuses_caller_buffer() {
        let codec = Base58Codec;
        let mut buffer = String::with_capacity(64);
        buffer.push_str("stale contents");

        codec.decode_to_hex_into("11233QC4", &mut buffer).unwrap();
        assert_eq!(buffer, "0000287fb4cd");

        codec.decode_to_hex_into("1", &mut buffer).unwrap();
        assert_eq!(buffer, "00");
        assert!(buffer.capacity() >= 64);
    }

    #[test]
    fn test_rejected_input_leaves_buffer_untouched() {
        let codec = Base58Codec;
        let mut buffer = String::from("0009ab");
        assert!(codec.decode_to_hex_into("1j0g", &mut buffer).is_err());
        assert_eq!(buffer, "0009ab");
    }

    #[test]
    fn test_deterministic() {
        let codec = Base58Codec;
        let input = "111114VYJtj3yEDffZem7N3PkK563wkLZZ8RjKzcfY";
        let first = codec.decode_to_hex(input).unwrap();
        assert_eq!(first, codec.decode_to_hex(input).unwrap());
        assert_eq!(
            first,
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
    }
}
