// Error Type Tests

use latin1_check::{Latin1Error, Unencodable, encode};

#[test]
fn test_latin1_error_display_emoji() {
    let err = Latin1Error::Unencodable {
        character: '👋',
        byte_offset: 12,
        char_index: 12,
    };
    assert_eq!(
        format!("{}", err),
        "character '👋' (U+1F44B) at byte 12 is not representable in ISO-8859-1"
    );
}

#[test]
fn test_latin1_error_display_pads_to_four_hex_digits() {
    let err = Latin1Error::Unencodable {
        character: 'Ā',
        byte_offset: 0,
        char_index: 0,
    };
    assert!(format!("{}", err).contains("U+0100"));
}

#[test]
fn test_latin1_error_debug() {
    let err = Latin1Error::Unencodable {
        character: '€',
        byte_offset: 0,
        char_index: 0,
    };
    assert!(format!("{:?}", err).contains("Unencodable"));
}

#[test]
fn test_latin1_error_clone() {
    let err1 = Latin1Error::Unencodable {
        character: '€',
        byte_offset: 3,
        char_index: 1,
    };
    let err2 = err1.clone();
    assert_eq!(err1, err2);
}

#[test]
fn test_latin1_error_from_unencodable() {
    let found = Unencodable {
        character: '日',
        byte_offset: 5,
        char_index: 5,
    };
    let err: Latin1Error = found.into();

    match err {
        Latin1Error::Unencodable {
            character,
            byte_offset,
            char_index,
        } => {
            assert_eq!(character, '日');
            assert_eq!(byte_offset, 5);
            assert_eq!(char_index, 5);
        }
    }
}

#[test]
fn test_encode_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(encode("€").unwrap_err());
    assert!(err.to_string().contains("ISO-8859-1"));
}
