use num_bigint::BigUint;
use std::fmt;

/// Errors raised while building an alphabet table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not contain exactly 64 symbols
    InvalidAlphabetLength { actual: usize },
    /// A symbol appears more than once
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::InvalidAlphabetLength { actual } => write!(
                f,
                "alphabet must be 64 characters long, got {}",
                actual
            ),
            AlphabetError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "alphabet has duplicate character '{}' at positions {} and {}",
                symbol, first, second
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The integer needs more symbols than the requested length allows
    IntegerOutOfBounds {
        value: BigUint,
        bound: BigUint,
        length: usize,
    },
    /// Strict buffer encoding would drop nonzero high-order bits
    BufferTruncated { length: usize, required: usize },
}

impl EncodeError {
    /// Create an IntegerOutOfBounds error for `value` at `length` symbols.
    pub fn integer_out_of_bounds(value: impl Into<BigUint>, length: usize) -> Self {
        EncodeError::IntegerOutOfBounds {
            value: value.into(),
            bound: BigUint::from(1u8) << (length * 6),
            length,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::IntegerOutOfBounds {
                value,
                bound,
                length,
            } => write!(
                f,
                "integer ({}) is greater than or equal to max bound ({}) for encoded string length ({})",
                value, bound, length
            ),
            EncodeError::BufferTruncated { length, required } => write!(
                f,
                "buffer needs at least {} characters but length {} was requested",
                required, length
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    UnknownSymbol { symbol: char, position: usize },
    /// The input string is empty
    EmptyInput,
    /// The decoded integer does not fit in 64 bits
    IntegerOverflow { position: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownSymbol { symbol, position } => write!(
                f,
                "unknown character '{}' at position {}",
                symbol.escape_debug(),
                position
            ),
            DecodeError::EmptyInput => write!(f, "cannot decode empty input"),
            DecodeError::IntegerOverflow { position } => write!(
                f,
                "decoded integer overflows 64 bits at position {}",
                position
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised while loading or resolving alphabet configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading a configuration file failed
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// The TOML content could not be parsed
    Parse(toml::de::Error),
    /// No alphabet with this name is configured
    UnknownAlphabet {
        name: String,
        suggestion: Option<String>,
    },
    /// A range-based alphabet cannot be generated
    InvalidRange { name: String, reason: String },
    /// A configured alphabet is not a valid 64-symbol table
    InvalidAlphabet {
        name: String,
        source: AlphabetError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid alphabet configuration: {}", e),
            ConfigError::UnknownAlphabet { name, suggestion } => {
                write!(f, "alphabet '{}' not found", name)?;
                if let Some(suggestion) = suggestion {
                    write!(f, "; did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            ConfigError::InvalidRange { name, reason } => {
                write!(f, "alphabet '{}' has an invalid range: {}", name, reason)
            }
            ConfigError::InvalidAlphabet { name, source } => {
                write!(f, "alphabet '{}' is invalid: {}", name, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidAlphabet { source, .. } => Some(source),
            ConfigError::UnknownAlphabet { .. } | ConfigError::InvalidRange { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Edit distance between two names, counted in chars.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    // Distances from the empty prefix of `a` to each prefix of `b`
    let initial: Vec<usize> = (0..=target.len()).collect();

    let last = a.chars().enumerate().fold(initial, |above, (i, ca)| {
        let mut row = Vec::with_capacity(above.len());
        row.push(i + 1);
        for (j, &cb) in target.iter().enumerate() {
            let substitute = above[j] + usize::from(ca != cb);
            let delete = above[j + 1] + 1;
            let insert = row[j] + 1;
            row.push(substitute.min(delete).min(insert));
        }
        row
    });

    last[target.len()]
}

/// Find the closest configured alphabet name, if any is a plausible typo.
pub fn find_closest_alphabet<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
