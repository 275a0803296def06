use crate::cli::args::IntCommand;
use num_bigint::BigUint;
use radix64::{Codec, DecodeError};

pub fn handle(command: IntCommand, codec: &Codec) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        IntCommand::Encode { value, length } => {
            let encoded = match value.parse::<u64>() {
                Ok(value) => codec.encode_int(value, length)?,
                Err(_) => {
                    let big: BigUint = value
                        .parse()
                        .map_err(|_| format!("'{}' is not a non-negative integer", value))?;
                    codec.encode_big_int(&big, length)?
                }
            };
            println!("{}", encoded);
        }
        IntCommand::Decode { encoded } => match codec.decode_to_int(&encoded) {
            Ok(value) => println!("{}", value),
            Err(DecodeError::IntegerOverflow { .. }) => {
                tracing::debug!("value exceeds 64 bits, decoding as big integer");
                println!("{}", codec.decode_to_big_int(&encoded)?);
            }
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}
