use radix64::{AlphabetRegistry, Codec, ConfigError};
use std::path::Path;

use super::global::GlobalArgs;

/// Loads the alphabet registry, merging the `--config` file last.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let overrides = AlphabetRegistry::load_from_file(Path::new(&expanded))?;
        tracing::debug!(path = %expanded, "loaded --config overrides");
        registry.merge(overrides);
    }

    if global.strict {
        registry.settings.strict = Some(true);
    }

    Ok(registry)
}

/// Builds the codec selected by `--alphabet`, or the configured default.
pub fn create_codec(
    registry: &AlphabetRegistry,
    global: &GlobalArgs,
) -> Result<Codec, ConfigError> {
    let name = global
        .alphabet
        .as_deref()
        .unwrap_or_else(|| registry.default_alphabet_name());
    let codec = registry.codec(name)?;

    if !codec.alphabet().is_sorted() {
        tracing::warn!(
            alphabet = name,
            "symbols are not in code-point order; encodings will not sort like their inputs"
        );
    }

    Ok(codec)
}
