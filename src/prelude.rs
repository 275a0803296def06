//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use radix64::prelude::*;
//!
//! let codec = make_codec(None).unwrap();
//! assert_eq!(codec.encode_int(0, None).unwrap(), "-");
//! ```

pub use crate::{
    Alphabet,
    AlphabetError,
    // Config
    AlphabetRegistry,
    // Core codec
    Codec,
    CodecBuilder,
    ConfigError,
    DecodeError,
    EncodeError,
    make_codec,
};
