use crate::cli::args::ConfigAction;
use radix64::{AlphabetRegistry, ConfigError, find_closest_alphabet};

pub fn handle(
    action: ConfigAction,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, registry),
        ConfigAction::Show { alphabet } => handle_show(&alphabet, registry),
    }
}

fn handle_list(json: bool, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let default_name = registry.default_alphabet_name();

    if json {
        let alphabets: Vec<_> = registry
            .names()
            .into_iter()
            .map(|name| {
                let sorted = registry.alphabet(name).map(|a| a.is_sorted()).ok();
                serde_json::json!({
                    "name": name,
                    "default": name == default_name,
                    "order_preserving": sorted,
                })
            })
            .collect();
        let output = serde_json::json!({
            "default": default_name,
            "strict": registry.settings.is_strict(),
            "alphabets": alphabets,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    for name in registry.names() {
        let marker = if name == default_name { "*" } else { " " };
        let (order, preview) = match registry.alphabet(name) {
            Ok(alphabet) => {
                let order = if alphabet.is_sorted() { "sorted" } else { "unsorted" };
                let preview: String = alphabet.symbols().iter().take(20).collect();
                (order, format!("{}...", preview))
            }
            Err(e) => ("invalid", e.to_string()),
        };
        println!("{} {:<15} {:>8}  {}", marker, name, order, preview);
    }
    Ok(())
}

fn handle_show(name: &str, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let config = registry
        .get_alphabet(name)
        .ok_or_else(|| ConfigError::UnknownAlphabet {
            name: name.to_string(),
            suggestion: find_closest_alphabet(name, registry.alphabets.keys()),
        })?;

    println!("Alphabet: {}", name);
    if let Some(description) = &config.description {
        println!("  Description: {}", description);
    }
    if config.chars.is_empty() {
        if let Some(start) = &config.start {
            println!("  Type: Range-based");
            println!("  Start: {}", start);
        }
    } else {
        println!("  Type: Explicit character set");
    }

    let alphabet = registry.alphabet(name)?;
    println!("  Symbols: {}", alphabet);
    println!("  Zero symbol: {}", alphabet.zero_symbol());
    println!(
        "  Order-preserving: {}",
        if alphabet.is_sorted() { "yes" } else { "no" }
    );
    Ok(())
}
