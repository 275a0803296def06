use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use crate::encoders::algorithms::bits::BASE;
use crate::encoders::algorithms::errors::{AlphabetError, DecodeError};

/// URL-safe base64 symbols sorted by code point, so that symbol order is value order.
pub const LEXICOGRAPHIC_SYMBOLS: &str =
    "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

static DEFAULT_ALPHABET: OnceLock<Arc<Alphabet>> = OnceLock::new();

/// A bijection between the values `0..64` and 64 distinct symbols.
///
/// The table is immutable once built. Encodings only sort like their inputs
/// when the symbols are in ascending code-point order, which the default
/// alphabet guarantees (see [`Alphabet::is_sorted`]).
///
/// # Example
///
/// ```
/// use radix64::Alphabet;
///
/// let alphabet = Alphabet::default_alphabet();
/// assert_eq!(alphabet.zero_symbol(), '-');
/// assert_eq!(alphabet.symbol(63), 'z');
/// assert_eq!(alphabet.value_of('_'), Some(37));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; BASE],
    char_to_value: HashMap<char, u8>,
}

impl Alphabet {
    /// Creates an alphabet from exactly 64 distinct symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::InvalidAlphabetLength`] when `symbols` does not
    /// hold 64 entries and [`AlphabetError::DuplicateSymbol`] when a symbol
    /// repeats.
    pub fn new(symbols: Vec<char>) -> Result<Self, AlphabetError> {
        let actual = symbols.len();
        let symbols: [char; BASE] = symbols
            .try_into()
            .map_err(|_| AlphabetError::InvalidAlphabetLength { actual })?;

        let mut seen: HashMap<char, usize> = HashMap::with_capacity(BASE);
        for (i, &c) in symbols.iter().enumerate() {
            if let Some(first) = seen.insert(c, i) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: c,
                    first,
                    second: i,
                });
            }
        }

        Ok(Self::from_unique(symbols))
    }

    /// Returns the shared default alphabet.
    ///
    /// Computed once per process from [`LEXICOGRAPHIC_SYMBOLS`] sorted by code point.
    pub fn default_alphabet() -> &'static Alphabet {
        Self::default_table()
    }

    /// Returns a handle to the shared default alphabet.
    ///
    /// Every handle points at the same table.
    pub fn shared_default() -> Arc<Alphabet> {
        Arc::clone(Self::default_table())
    }

    fn default_table() -> &'static Arc<Alphabet> {
        DEFAULT_ALPHABET.get_or_init(|| {
            let mut symbols = ['\0'; BASE];
            for (slot, c) in symbols.iter_mut().zip(LEXICOGRAPHIC_SYMBOLS.chars()) {
                *slot = c;
            }
            symbols.sort_unstable();
            Arc::new(Self::from_unique(symbols))
        })
    }

    // Callers guarantee the symbols are distinct.
    fn from_unique(symbols: [char; BASE]) -> Self {
        let char_to_value = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect();
        Alphabet {
            symbols,
            char_to_value,
        }
    }

    /// Returns the symbol for a value in `0..64`.
    ///
    /// # Panics
    ///
    /// Panics if `value >= 64`.
    #[inline]
    pub fn symbol(&self, value: u8) -> char {
        self.symbols[usize::from(value)]
    }

    /// Returns the value of a symbol, or `None` if it is not in the alphabet.
    #[inline]
    pub fn value_of(&self, c: char) -> Option<u8> {
        self.char_to_value.get(&c).copied()
    }

    /// Maps every character of `encoded` to its value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownSymbol`] with the char index of the first
    /// character outside the alphabet.
    pub fn decode_symbols(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        encoded
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.value_of(symbol)
                    .ok_or(DecodeError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    /// The symbol for value 0, used for left padding.
    #[inline]
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    pub fn symbols(&self) -> &[char; BASE] {
        &self.symbols
    }

    /// Returns true when code-point order matches value order.
    ///
    /// Only sorted alphabets preserve ordering between inputs and encodings.
    pub fn is_sorted(&self) -> bool {
        self.symbols.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::default_alphabet().clone()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
