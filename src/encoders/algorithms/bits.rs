//! Length and bit-width arithmetic shared by the buffer and integer codecs.

/// Number of symbols in every alphabet.
pub const BASE: usize = 64;
/// Bits carried by one symbol.
pub const BITS_PER_SYMBOL: usize = 6;
/// Bits carried by one byte.
pub const BITS_PER_BYTE: usize = 8;

/// Minimum symbols needed to hold `bytes` bytes: `ceil(bytes * 8 / 6)`.
#[inline]
pub fn buffer_symbol_len(bytes: usize) -> usize {
    (bytes * 4).div_ceil(3)
}

/// Bytes needed to hold `symbols` symbols: `ceil(symbols * 6 / 8)`.
#[inline]
pub fn buffer_byte_len(symbols: usize) -> usize {
    (symbols * 3).div_ceil(4)
}

/// `floor(log2(value)) + 1`, or 0 for 0.
#[inline]
pub fn bit_length(value: u64) -> usize {
    (u64::BITS - value.leading_zeros()) as usize
}

/// Minimum symbols for an integer. Zero still takes one symbol.
#[inline]
pub fn int_symbol_len(value: u64) -> usize {
    bit_length(value).div_ceil(BITS_PER_SYMBOL).max(1)
}

/// `64^length`, or `None` once the bound no longer fits in a `u64`.
///
/// A `None` bound means every `u64` fits in `length` symbols.
#[inline]
pub fn int_bound(length: usize) -> Option<u64> {
    let bits = length.checked_mul(BITS_PER_SYMBOL)?;
    u32::try_from(bits)
        .ok()
        .and_then(|bits| 1u64.checked_shl(bits))
}

/// Bit length of `buffer` read as a big-endian unsigned number.
pub fn significant_bits(buffer: &[u8]) -> usize {
    match buffer.iter().position(|&b| b != 0) {
        Some(first) => {
            let rest = buffer.len() - first - 1;
            (BITS_PER_BYTE - buffer[first].leading_zeros() as usize) + rest * BITS_PER_BYTE
        }
        None => 0,
    }
}
