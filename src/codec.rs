//! The codec: one alphabet table bundled with the buffer and integer operations.

use std::sync::Arc;

use num_bigint::BigUint;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::{AlphabetError, DecodeError, EncodeError};
use crate::encoders::{buffer, integer};

/// Order-preserving base-64 codec.
///
/// Cheap to clone and safe to share between threads; the alphabet table is
/// immutable and reference counted.
///
/// # Example
///
/// ```
/// use radix64::Codec;
///
/// let codec = Codec::new();
/// let a = codec.encode_int(41, Some(4)).unwrap();
/// let b = codec.encode_int(42, Some(4)).unwrap();
/// assert!(a < b);
/// assert_eq!(codec.decode_to_int(&b).unwrap(), 42);
///
/// let encoded = codec.encode_buffer(&[0x00, 0x00], None).unwrap();
/// assert_eq!(encoded, "---");
/// assert_eq!(codec.decode_to_buffer(&encoded, Some(2)).unwrap(), vec![0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Codec {
    alphabet: Arc<Alphabet>,
    strict: bool,
}

impl Codec {
    /// Creates a codec over the default lexicographic alphabet.
    pub fn new() -> Self {
        Codec {
            alphabet: Alphabet::shared_default(),
            strict: false,
        }
    }

    /// Creates a codec over a custom alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Codec {
            alphabet: Arc::new(alphabet),
            strict: false,
        }
    }

    /// Creates a CodecBuilder for constructing a Codec.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether buffer encoding rejects lengths that would drop nonzero bits.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Encodes a byte buffer, optionally to a fixed number of symbols.
    ///
    /// # Errors
    ///
    /// Never fails unless the codec is strict, in which case a `length` too
    /// short for the buffer's significant bits yields
    /// [`EncodeError::BufferTruncated`].
    pub fn encode_buffer(&self, data: &[u8], length: Option<usize>) -> Result<String, EncodeError> {
        if self.strict {
            buffer::encode_buffer_strict(data, length, &self.alphabet)
        } else {
            Ok(buffer::encode_buffer(data, length, &self.alphabet))
        }
    }

    /// Decodes a string into `byte_length` bytes (default `ceil(chars * 6 / 8)`).
    pub fn decode_to_buffer(
        &self,
        encoded: &str,
        byte_length: Option<usize>,
    ) -> Result<Vec<u8>, DecodeError> {
        buffer::decode_buffer(encoded, byte_length, &self.alphabet)
    }

    /// Encodes an integer, optionally to a fixed number of symbols.
    pub fn encode_int(&self, value: u64, length: Option<usize>) -> Result<String, EncodeError> {
        integer::encode_int(value, length, &self.alphabet)
    }

    pub fn decode_to_int(&self, encoded: &str) -> Result<u64, DecodeError> {
        integer::decode_int(encoded, &self.alphabet)
    }

    /// Encodes an integer of any size.
    pub fn encode_big_int(
        &self,
        value: &BigUint,
        length: Option<usize>,
    ) -> Result<String, EncodeError> {
        integer::encode_big_int(value, length, &self.alphabet)
    }

    pub fn decode_to_big_int(&self, encoded: &str) -> Result<BigUint, DecodeError> {
        integer::decode_big_int(encoded, &self.alphabet)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a codec from an optional alphabet string.
///
/// `None` selects the default lexicographic alphabet.
///
/// # Errors
///
/// Fails if the alphabet is not 64 distinct symbols.
pub fn make_codec(alphabet: Option<&str>) -> Result<Codec, AlphabetError> {
    match alphabet {
        Some(symbols) => Ok(Codec::with_alphabet(symbols.parse()?)),
        None => Ok(Codec::new()),
    }
}

/// Builder for constructing a Codec.
///
/// # Example
///
/// ```
/// use radix64::Codec;
///
/// let codec = Codec::builder()
///     .alphabet_str("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/")
///     .strict(true)
///     .build()
///     .unwrap();
/// assert!(codec.encode_buffer(&[0xFF, 0xFF], Some(2)).is_err());
/// ```
#[derive(Debug, Default)]
pub struct CodecBuilder {
    symbols: Option<Vec<char>>,
    alphabet: Option<Alphabet>,
    strict: bool,
}

impl CodecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already validated alphabet.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self.symbols = None;
        self
    }

    /// Uses the characters of `symbols`, validated on [`build`](Self::build).
    pub fn alphabet_str(mut self, symbols: &str) -> Self {
        self.symbols = Some(symbols.chars().collect());
        self.alphabet = None;
        self
    }

    /// Rejects buffer encodings that would drop nonzero bits.
    ///
    /// Default is false.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builds the Codec.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet given to
    /// [`alphabet_str`](Self::alphabet_str) is invalid.
    pub fn build(self) -> Result<Codec, AlphabetError> {
        let alphabet = match (self.alphabet, self.symbols) {
            (Some(alphabet), _) => Arc::new(alphabet),
            (None, Some(symbols)) => Arc::new(Alphabet::new(symbols)?),
            (None, None) => Alphabet::shared_default(),
        };
        Ok(Codec {
            alphabet,
            strict: self.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_codec_default() {
        let codec = make_codec(None).unwrap();
        assert_eq!(codec.alphabet(), Alphabet::default_alphabet());
        assert!(!codec.is_strict());
    }

    #[test]
    fn test_make_codec_rejects_bad_alphabets() {
        assert_eq!(
            make_codec(Some("abcd")).unwrap_err(),
            AlphabetError::InvalidAlphabetLength { actual: 4 }
        );
        assert!(matches!(
            make_codec(Some(
                "abcdefghijklmnopqrstuvwxyz0123456789abcdefghijklmnopqrstuvwxyz01"
            )),
            Err(AlphabetError::DuplicateSymbol { symbol: 'a', .. })
        ));
    }

    #[test]
    fn test_default_codecs_share_one_table() {
        let a = Codec::new();
        let b = Codec::default();
        let c = Codec::builder().strict(true).build().unwrap();
        assert!(Arc::ptr_eq(&a.alphabet, &b.alphabet));
        assert!(Arc::ptr_eq(&a.alphabet, &c.alphabet));
        assert!(std::ptr::eq(a.alphabet(), Alphabet::default_alphabet()));

        let custom = make_codec(Some(crate::LEXICOGRAPHIC_SYMBOLS)).unwrap();
        assert!(!Arc::ptr_eq(&a.alphabet, &custom.alphabet));
    }

    #[test]
    fn test_lenient_codec_truncates() {
        let codec = Codec::new();
        assert_eq!(codec.encode_buffer(&[0xFF, 0xFF], Some(1)).unwrap(), "z");
    }

    #[test]
    fn test_strict_codec_rejects_truncation() {
        let codec = Codec::builder().strict(true).build().unwrap();
        assert!(codec.is_strict());
        assert_eq!(
            codec.encode_buffer(&[0xFF, 0xFF], Some(1)),
            Err(EncodeError::BufferTruncated {
                length: 1,
                required: 3
            })
        );
        assert_eq!(codec.encode_buffer(&[0xFF, 0xFF], Some(3)).unwrap(), "Ezz");
    }

    #[test]
    fn test_custom_alphabet_round_trip() {
        let codec =
            make_codec(Some("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"))
                .unwrap();
        // Same bit packing as RFC 4648 for whole 3-byte groups
        let encoded = codec.encode_buffer(b"Man", None).unwrap();
        assert_eq!(encoded, "TWFu");
        assert_eq!(codec.decode_to_buffer(&encoded, Some(3)).unwrap(), b"Man");
        assert_eq!(codec.encode_int(63, None).unwrap(), "/");
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();

        let codec = Codec::new();
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let codec = codec.clone();
                std::thread::spawn(move || {
                    let encoded = codec.encode_int(i * 1000, Some(3)).unwrap();
                    codec.decode_to_int(&encoded).unwrap()
                })
            })
            .collect();
        let decoded: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(decoded, vec![0, 1000, 2000, 3000]);
    }
}
