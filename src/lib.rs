//! Order-preserving base-64 encoding.
//!
//! Byte buffers and non-negative integers are encoded with 6 bits per symbol,
//! most significant first. The default alphabet lists its symbols in
//! code-point order, so encodings of equal length compare the same way as
//! the values they encode.
//!
//! ```
//! use radix64::Codec;
//!
//! let codec = Codec::new();
//! let mut ids: Vec<String> = [900u64, 7, 4096, 63]
//!     .iter()
//!     .map(|&id| codec.encode_int(id, Some(3)).unwrap())
//!     .collect();
//! ids.sort();
//!
//! let decoded: Vec<u64> = ids.iter().map(|s| codec.decode_to_int(s).unwrap()).collect();
//! assert_eq!(decoded, vec![7, 63, 900, 4096]);
//! ```

mod codec;
mod core;
mod encoders;

pub mod prelude;

pub use codec::{Codec, CodecBuilder, make_codec};
pub use crate::core::alphabet::{Alphabet, LEXICOGRAPHIC_SYMBOLS};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET_NAME, Settings};
pub use encoders::algorithms::{
    AlphabetError, ConfigError, DecodeError, EncodeError, find_closest_alphabet,
};

/// Length arithmetic used by the codecs.
pub mod lengths {
    pub use crate::encoders::bits::{
        BASE, BITS_PER_BYTE, BITS_PER_SYMBOL, bit_length, buffer_byte_len, buffer_symbol_len,
        int_bound, int_symbol_len, significant_bits,
    };
}

/// Free-function forms of the codec operations, for callers holding an [`Alphabet`].
pub mod raw {
    pub use crate::encoders::buffer::{decode_buffer, encode_buffer, encode_buffer_strict};
    pub use crate::encoders::integer::{decode_big_int, decode_int, encode_big_int, encode_int};
}

#[cfg(test)]
mod tests;
