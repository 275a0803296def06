use crate::core::alphabet::Alphabet;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::bits::{BASE, BITS_PER_SYMBOL, int_bound, int_symbol_len};
use super::errors::{DecodeError, EncodeError};

/// Encodes `value` as base-64 digits, most significant first.
///
/// Without a `length` the output is the shortest that holds the value (at
/// least one symbol). With a `length` the output is left-padded with the
/// zero symbol to exactly that many symbols.
///
/// `Some(0)` is an explicit length, not a request for the default: it encodes
/// `0` as `""` and every other value is out of bounds.
///
/// # Errors
///
/// Returns [`EncodeError::IntegerOutOfBounds`] when `value >= 64^length`.
pub fn encode_int(
    value: u64,
    length: Option<usize>,
    alphabet: &Alphabet,
) -> Result<String, EncodeError> {
    let length = match length {
        Some(length) => {
            if int_bound(length).is_some_and(|bound| value >= bound) {
                return Err(EncodeError::integer_out_of_bounds(value, length));
            }
            length
        }
        None => int_symbol_len(value),
    };

    let mut symbols = vec![alphabet.zero_symbol(); length];
    let mut num = value;
    for slot in symbols.iter_mut().rev() {
        if num == 0 {
            break;
        }
        *slot = alphabet.symbol((num % BASE as u64) as u8);
        num /= BASE as u64;
    }

    Ok(symbols.into_iter().collect())
}

/// Decodes a base-64 digit string into a `u64`.
///
/// # Errors
///
/// - [`DecodeError::EmptyInput`] for an empty string
/// - [`DecodeError::UnknownSymbol`] for a character outside the alphabet
/// - [`DecodeError::IntegerOverflow`] when the value does not fit in 64 bits;
///   use [`decode_big_int`] for wider values
pub fn decode_int(encoded: &str, alphabet: &Alphabet) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut num = 0u64;
    for (position, symbol) in encoded.chars().enumerate() {
        let digit = alphabet
            .value_of(symbol)
            .ok_or(DecodeError::UnknownSymbol { symbol, position })?;
        num = num
            .checked_mul(BASE as u64)
            .and_then(|n| n.checked_add(u64::from(digit)))
            .ok_or(DecodeError::IntegerOverflow { position })?;
    }

    Ok(num)
}

/// Arbitrary-precision counterpart of [`encode_int`].
///
/// # Errors
///
/// Returns [`EncodeError::IntegerOutOfBounds`] when `value >= 64^length`.
pub fn encode_big_int(
    value: &BigUint,
    length: Option<usize>,
    alphabet: &Alphabet,
) -> Result<String, EncodeError> {
    let bits = usize::try_from(value.bits()).unwrap_or(usize::MAX);
    let length = match length {
        Some(length) => {
            if bits > length.saturating_mul(BITS_PER_SYMBOL) {
                return Err(EncodeError::integer_out_of_bounds(value.clone(), length));
            }
            length
        }
        None => bits.div_ceil(BITS_PER_SYMBOL).max(1),
    };

    let mut symbols = vec![alphabet.zero_symbol(); length];
    let base = BigUint::from(BASE);
    let mut num = value.clone();
    for slot in symbols.iter_mut().rev() {
        if num.is_zero() {
            break;
        }
        let (quotient, remainder) = num.div_rem(&base);
        // remainder < 64
        *slot = alphabet.symbol(remainder.to_u8().unwrap_or_default());
        num = quotient;
    }

    Ok(symbols.into_iter().collect())
}

/// Arbitrary-precision counterpart of [`decode_int`].
///
/// # Errors
///
/// Returns [`DecodeError::EmptyInput`] or [`DecodeError::UnknownSymbol`].
pub fn decode_big_int(encoded: &str, alphabet: &Alphabet) -> Result<BigUint, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let base = BigUint::from(BASE);
    let mut num = BigUint::zero();
    for digit in alphabet.decode_symbols(encoded)? {
        num *= &base;
        num += digit;
    }

    Ok(num)
}
