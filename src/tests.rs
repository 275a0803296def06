use crate::{AlphabetRegistry, Codec, DecodeError, EncodeError, make_codec};

fn get_codec(name: &str) -> Codec {
    let config = AlphabetRegistry::load_default().unwrap();
    config.codec(name).unwrap()
}

#[test]
fn test_encode_decode_empty() {
    let codec = get_codec("lexicographic");
    assert_eq!(codec.encode_buffer(b"", None).unwrap(), "");
    assert!(codec.decode_to_buffer("", None).unwrap().is_empty());
}

#[test]
fn test_encode_two_zero_bytes() {
    let codec = get_codec("lexicographic");
    let encoded = codec.encode_buffer(&[0x00, 0x00], None).unwrap();
    assert_eq!(encoded, "---");
    assert_eq!(codec.decode_to_buffer(&encoded, Some(2)).unwrap(), vec![0, 0]);
}

#[test]
fn test_encode_decode_hello_world() {
    let codec = get_codec("lexicographic");
    let data = b"Hello, World!";
    let encoded = codec.encode_buffer(data, None).unwrap();
    assert_eq!(encoded.len(), 18);
    let decoded = codec.decode_to_buffer(&encoded, Some(data.len())).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_encode_decode_leading_zeros() {
    let codec = get_codec("lexicographic");
    let data = &[0u8, 0, 0, 1, 2, 3];
    let encoded = codec.encode_buffer(data, None).unwrap();
    assert!(encoded.starts_with("----"));
    let decoded = codec.decode_to_buffer(&encoded, Some(data.len())).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_base64_alphabet_matches_rfc_for_whole_groups() {
    let codec = get_codec("base64");
    // RFC 4648 packs bits from the front; for multiples of 3 bytes it agrees
    assert_eq!(codec.encode_buffer(b"Hello, World", None).unwrap(), "SGVsbG8sIFdvcmxk");
}

#[test]
fn test_lexicographic_and_base64_share_bit_layout() {
    let lexicographic = get_codec("lexicographic");
    let base64 = get_codec("base64");
    let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x01];

    let a = lexicographic.encode_buffer(&data, None).unwrap();
    let b = base64.encode_buffer(&data, None).unwrap();
    let values_a = lexicographic.alphabet().decode_symbols(&a).unwrap();
    let values_b = base64.alphabet().decode_symbols(&b).unwrap();
    assert_eq!(values_a, values_b);
}

#[test]
fn test_ascii_range_alphabet() {
    let codec = get_codec("ascii");
    assert!(codec.alphabet().is_sorted());
    assert_eq!(codec.alphabet().zero_symbol(), '?');
    assert_eq!(codec.encode_int(63, None).unwrap(), "~");

    let encoded = codec.encode_buffer(b"sortable", None).unwrap();
    assert_eq!(codec.decode_to_buffer(&encoded, Some(8)).unwrap(), b"sortable");
}

#[test]
fn test_int_and_buffer_agree_on_fixed_width() {
    // A big-endian u64 buffer and the integer share the same digits
    let codec = Codec::new();
    for value in [0u64, 1, 63, 64, 0xDEAD_BEEF, u64::MAX] {
        let from_int = codec.encode_int(value, Some(11)).unwrap();
        let from_buffer = codec.encode_buffer(&value.to_be_bytes(), None).unwrap();
        assert_eq!(from_int, from_buffer);
    }
}

#[test]
fn test_decode_invalid_character() {
    let codec = get_codec("lexicographic");
    assert_eq!(
        codec.decode_to_buffer("ab+c", None),
        Err(DecodeError::UnknownSymbol {
            symbol: '+',
            position: 2
        })
    );
    assert_eq!(
        codec.decode_to_int("ab c"),
        Err(DecodeError::UnknownSymbol {
            symbol: ' ',
            position: 2
        })
    );
}

#[test]
fn test_decode_position_counts_chars() {
    let codec = get_codec("lexicographic");
    assert_eq!(
        codec.decode_to_int("éa+"),
        Err(DecodeError::UnknownSymbol {
            symbol: 'é',
            position: 0
        })
    );
    assert_eq!(
        codec.decode_to_int("aé"),
        Err(DecodeError::UnknownSymbol {
            symbol: 'é',
            position: 1
        })
    );
}

#[test]
fn test_out_of_bounds_message_names_value_bound_and_length() {
    let codec = make_codec(None).unwrap();
    let err = codec.encode_int(4096, Some(2)).unwrap_err();
    assert!(matches!(err, EncodeError::IntegerOutOfBounds { length: 2, .. }));
    assert_eq!(
        err.to_string(),
        "integer (4096) is greater than or equal to max bound (4096) for encoded string length (2)"
    );
}

#[test]
fn test_strict_setting_from_config() {
    let mut config = AlphabetRegistry::load_default().unwrap();
    config.settings.strict = Some(true);
    let codec = config.codec("lexicographic").unwrap();
    assert!(codec.encode_buffer(&[0x01, 0x00], Some(1)).is_err());
    assert_eq!(codec.encode_buffer(&[0x00, 0x3F], Some(1)).unwrap(), "z");
}
