use crate::core::alphabet::Alphabet;

use super::bits::{BITS_PER_BYTE, BITS_PER_SYMBOL, buffer_byte_len, buffer_symbol_len, significant_bits};
use super::errors::{DecodeError, EncodeError};

/// Where the encoder stands within a 3-byte / 4-symbol cycle.
///
/// Bytes are consumed from the end of the buffer. Each phase names how many
/// low bits of the next byte complete the current symbol; the rest of that
/// byte is carried into the following symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EncodePhase {
    /// Low 6 bits of a fresh byte; high 2 carried.
    Low6,
    /// Low 4 bits above a 2-bit carry; high 4 carried.
    Low4,
    /// Low 2 bits above a 4-bit carry; high 6 carried.
    Low2,
    /// The 6-bit carry is a full symbol on its own.
    Flush,
}

impl EncodePhase {
    const fn take_bits(self) -> u32 {
        match self {
            EncodePhase::Low6 => 6,
            EncodePhase::Low4 => 4,
            EncodePhase::Low2 => 2,
            EncodePhase::Flush => 0,
        }
    }

    const fn next(self) -> Self {
        match self {
            EncodePhase::Low6 => EncodePhase::Low4,
            EncodePhase::Low4 => EncodePhase::Low2,
            EncodePhase::Low2 => EncodePhase::Flush,
            EncodePhase::Flush => EncodePhase::Low6,
        }
    }

    /// Combines `byte` with the carried bits. Returns the symbol value and the new carry.
    #[inline]
    fn split(self, byte: u8, hang: u8) -> (u8, u8) {
        let take = self.take_bits();
        let carried = BITS_PER_SYMBOL as u32 - take;
        let sextet = ((byte & ((1 << take) - 1)) << carried) | hang;
        (sextet, byte >> take)
    }
}

/// Where the decoder stands within a 4-symbol / 3-byte cycle.
///
/// Symbols are consumed from the end of the string. Each phase names how the
/// next symbol lands in the byte currently being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodePhase {
    /// Symbol fills the low 6 bits of a fresh byte.
    Fill6,
    /// Low 2 bits complete the byte; high 4 start the next one.
    Top2,
    /// Low 4 bits complete the byte; high 2 start the next one.
    Top4,
    /// All 6 bits complete the byte.
    Top6,
}

impl DecodePhase {
    /// Bits of the current byte already assembled.
    const fn filled_bits(self) -> u32 {
        match self {
            DecodePhase::Fill6 => 0,
            DecodePhase::Top2 => 6,
            DecodePhase::Top4 => 4,
            DecodePhase::Top6 => 2,
        }
    }

    const fn next(self) -> Self {
        match self {
            DecodePhase::Fill6 => DecodePhase::Top2,
            DecodePhase::Top2 => DecodePhase::Top4,
            DecodePhase::Top4 => DecodePhase::Top6,
            DecodePhase::Top6 => DecodePhase::Fill6,
        }
    }
}

/// Encodes `buffer` as a big-endian string of 6-bit symbols.
///
/// `length` defaults to `ceil(len * 8 / 6)`. Longer lengths left-pad with the
/// zero symbol. Shorter lengths keep the least significant symbols and drop
/// the high-order bits without error; use [`encode_buffer_strict`] to reject
/// that.
///
/// `Some(0)` is an explicit length and yields an empty string. It does not
/// fall back to the default length; pass `None` for that.
pub fn encode_buffer(buffer: &[u8], length: Option<usize>, alphabet: &Alphabet) -> String {
    let length = length.unwrap_or_else(|| buffer_symbol_len(buffer.len()));
    let mut symbols = vec![alphabet.zero_symbol(); length];

    let mut bytes = buffer.iter().rev();
    let mut phase = EncodePhase::Low6;
    let mut hang = 0u8;

    for slot in symbols.iter_mut().rev() {
        let sextet = match phase {
            EncodePhase::Flush => std::mem::take(&mut hang),
            _ => match bytes.next() {
                Some(&byte) => {
                    let (sextet, carry) = phase.split(byte, hang);
                    hang = carry;
                    sextet
                }
                None => {
                    // Out of bytes: emit the partial carry, everything above stays zero
                    *slot = alphabet.symbol(hang);
                    break;
                }
            },
        };
        *slot = alphabet.symbol(sextet);
        phase = phase.next();
    }

    symbols.into_iter().collect()
}

/// Like [`encode_buffer`], but fails instead of dropping nonzero bits.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTruncated`] when `length` is too short for the
/// significant bits of `buffer`. Leading zero bits may still be dropped.
pub fn encode_buffer_strict(
    buffer: &[u8],
    length: Option<usize>,
    alphabet: &Alphabet,
) -> Result<String, EncodeError> {
    if let Some(length) = length {
        let required = significant_bits(buffer).div_ceil(BITS_PER_SYMBOL);
        if length < required {
            return Err(EncodeError::BufferTruncated { length, required });
        }
    }
    Ok(encode_buffer(buffer, length, alphabet))
}

/// Decodes a symbol string back into `byte_length` bytes.
///
/// `byte_length` defaults to `ceil(chars * 6 / 8)`. Bytes not reached by any
/// symbol are zero; bits beyond `byte_length` are dropped.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownSymbol`] for the first character that is not
/// in the alphabet, wherever it appears in the input.
pub fn decode_buffer(
    encoded: &str,
    byte_length: Option<usize>,
    alphabet: &Alphabet,
) -> Result<Vec<u8>, DecodeError> {
    let values = alphabet.decode_symbols(encoded)?;
    let byte_length = byte_length.unwrap_or_else(|| buffer_byte_len(values.len()));
    let mut bytes = vec![0u8; byte_length];

    let mut phase = DecodePhase::Fill6;
    // One past the byte being assembled
    let mut end = byte_length;

    for &value in values.iter().rev() {
        let Some(current) = end.checked_sub(1) else {
            break;
        };

        let filled = phase.filled_bits();
        let room = BITS_PER_BYTE as u32 - filled;
        if room > BITS_PER_SYMBOL as u32 {
            bytes[current] |= value << filled;
        } else {
            bytes[current] |= (value & ((1 << room) - 1)) << filled;
            end = current;
            if room < BITS_PER_SYMBOL as u32 {
                if let Some(next) = current.checked_sub(1) {
                    bytes[next] = value >> room;
                }
            }
        }

        phase = phase.next();
    }

    Ok(bytes)
}
