pub mod bits;
pub mod buffer;
pub mod errors;
pub mod integer;

// Re-export error types for public API
pub use errors::{AlphabetError, ConfigError, DecodeError, EncodeError, find_closest_alphabet};
