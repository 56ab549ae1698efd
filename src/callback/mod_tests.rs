//! Tests for callback checksum verification.

use super::*;

/// Computes hex(SHA1("abc" + hex(MD5("hello")) + "1600")) from first
/// principles, independent of `expected_checksum`.
fn reference_checksum() -> String {
    let body_md5 = format!("{:x}", md5::compute(b"hello"));
    let mut hasher = Sha1::new();
    hasher.update(format!("abc{body_md5}1600").as_bytes());
    hex::encode(hasher.finalize())
}

mod is_legal_checksum_fn {
    use super::*;

    #[test]
    fn accepts_correctly_signed_callback() {
        let supplied = reference_checksum();

        assert!(is_legal_checksum("abc", b"hello", "1600", &supplied));
    }

    #[test]
    fn rejects_every_single_character_mutation() {
        let valid = reference_checksum();

        for i in 0..valid.len() {
            let mut mutated: Vec<u8> = valid.bytes().collect();
            mutated[i] = if mutated[i] == b'0' { b'1' } else { b'0' };
            let mutated = String::from_utf8(mutated).unwrap();

            assert!(
                !is_legal_checksum("abc", b"hello", "1600", &mutated),
                "mutation at index {i} was accepted"
            );
        }
    }

    #[test]
    fn rejects_checksum_of_wrong_length() {
        let truncated = &reference_checksum()[..39];

        assert!(!is_legal_checksum("abc", b"hello", "1600", truncated));
        assert!(!is_legal_checksum("abc", b"hello", "1600", ""));
    }

    #[test]
    fn rejects_wrong_secret_body_or_time() {
        let supplied = reference_checksum();

        assert!(!is_legal_checksum("abd", b"hello", "1600", &supplied));
        assert!(!is_legal_checksum("abc", b"hello!", "1600", &supplied));
        assert!(!is_legal_checksum("abc", b"hello", "1601", &supplied));
    }

    #[test]
    fn verification_is_pure() {
        let supplied = reference_checksum();

        assert!(is_legal_checksum("abc", b"hello", "1600", &supplied));
        assert!(is_legal_checksum("abc", b"hello", "1600", &supplied));
    }
}

mod expected_checksum_fn {
    use super::*;

    #[test]
    fn is_lowercase_hex_of_sha1_length() {
        let sum = expected_checksum("secret", b"{\"eventType\":1}", "1700000000");

        assert_eq!(sum.len(), 40);
        assert!(sum.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn matches_reference_construction() {
        assert_eq!(expected_checksum("abc", b"hello", "1600"), reference_checksum());
    }
}
