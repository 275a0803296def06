use crate::cli::args::{BufferCommand, BufferDecodeArgs, BufferEncodeArgs};
use radix64::Codec;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

pub fn handle(command: BufferCommand, codec: &Codec) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        BufferCommand::Encode(args) => handle_encode(args, codec),
        BufferCommand::Decode(args) => handle_decode(args, codec),
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn handle_encode(args: BufferEncodeArgs, codec: &Codec) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;
    let data = if args.hex {
        let text = String::from_utf8(input).map_err(|_| "hex input must be valid UTF-8")?;
        hex::decode(text.trim()).map_err(|e| format!("invalid hex input: {}", e))?
    } else {
        input
    };

    tracing::debug!(bytes = data.len(), length = ?args.length, "encoding buffer");
    let encoded = codec.encode_buffer(&data, args.length)?;
    println!("{}", encoded);
    Ok(())
}

fn handle_decode(args: BufferDecodeArgs, codec: &Codec) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;
    let text = String::from_utf8(input).map_err(|_| "input must be valid UTF-8 for decoding")?;

    let decoded = codec.decode_to_buffer(text.trim(), args.bytes)?;
    tracing::debug!(bytes = decoded.len(), "decoded buffer");

    if args.hex {
        println!("{}", hex::encode(&decoded));
    } else {
        io::stdout().write_all(&decoded)?;
    }
    Ok(())
}
