use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::codec::Codec;
use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::bits::BASE;
use crate::encoders::algorithms::errors::{ConfigError, find_closest_alphabet};

/// Name of the built-in order-preserving alphabet.
pub const DEFAULT_ALPHABET_NAME: &str = "lexicographic";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlphabetConfig {
    /// The 64 symbols, in value order
    #[serde(default)]
    pub chars: String,
    /// First symbol of a sequential Unicode range of 64 symbols.
    /// Only used when `chars` is empty.
    #[serde(default)]
    pub start: Option<String>,
    /// Human-readable description shown by `config show`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective symbols, generating them from `start` if needed.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `start` is set, the 64 code points beginning there
    /// 3. Otherwise an empty string, which fails alphabet validation
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let Some(start_str) = &self.start {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;
            return Self::generate_range(start_char as u32, BASE);
        }

        Ok(String::new())
    }

    /// Generate a string of sequential Unicode characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, String> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        let end = start
            .checked_add(length as u32 - 1)
            .ok_or("range exceeds maximum Unicode codepoint")?;

        if end > MAX_UNICODE {
            return Err(format!(
                "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                end, MAX_UNICODE
            ));
        }

        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            ));
        }

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint).ok_or(format!("invalid codepoint U+{:X}", codepoint))
            })
            .collect()
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is named (default: lexicographic)
    #[serde(default)]
    pub default_alphabet: Option<String>,
    /// Reject buffer encodings that would drop nonzero bits (default: false)
    #[serde(default)]
    pub strict: Option<bool>,
}

impl Settings {
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the alphabets bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../alphabets.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// 1. Built-in alphabets
    /// 2. `~/.config/radix64/alphabets.toml`, if it exists
    /// 3. `./alphabets.toml`, if it exists
    ///
    /// Override files that fail to load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file_if_exists(&config_dir.join("radix64").join("alphabets.toml"));
        }
        config.merge_file_if_exists(Path::new("alphabets.toml"));

        Ok(config)
    }

    /// Merges `path` into this registry if the file exists.
    ///
    /// Returns true when the file was loaded.
    pub fn merge_file_if_exists(&mut self, path: &Path) -> bool {
        if !path.exists() {
            return false;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(
                    path = %path.display(),
                    alphabets = overrides.alphabets.len(),
                    "loaded alphabet overrides"
                );
                self.merge(overrides);
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping alphabet config");
                false
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name, and any
    /// setting `other` sets wins.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
        if other.settings.strict.is_some() {
            self.settings.strict = other.settings.strict;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// The alphabet name used when the caller names none.
    pub fn default_alphabet_name(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(DEFAULT_ALPHABET_NAME)
    }

    /// Sorted alphabet names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds and validates the named alphabet.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownAlphabet`] (with a suggestion when a configured
    /// name is close), [`ConfigError::InvalidRange`] or
    /// [`ConfigError::InvalidAlphabet`].
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, ConfigError> {
        let config = self
            .get_alphabet(name)
            .ok_or_else(|| ConfigError::UnknownAlphabet {
                name: name.to_string(),
                suggestion: find_closest_alphabet(name, self.alphabets.keys()),
            })?;

        let chars = config
            .effective_chars()
            .map_err(|reason| ConfigError::InvalidRange {
                name: name.to_string(),
                reason,
            })?;

        let alphabet: Alphabet = chars.parse().map_err(|source| ConfigError::InvalidAlphabet {
            name: name.to_string(),
            source,
        })?;

        if !alphabet.is_sorted() {
            tracing::debug!(alphabet = name, "alphabet is not in code-point order");
        }
        Ok(alphabet)
    }

    /// Builds a codec for the named alphabet, honoring the `strict` setting.
    pub fn codec(&self, name: &str) -> Result<Codec, ConfigError> {
        let alphabet = self.alphabet(name)?;
        tracing::debug!(alphabet = name, strict = self.settings.is_strict(), "built codec");
        Codec::builder()
            .alphabet(alphabet)
            .strict(self.settings.is_strict())
            .build()
            .map_err(|source| ConfigError::InvalidAlphabet {
                name: name.to_string(),
                source,
            })
    }
}
