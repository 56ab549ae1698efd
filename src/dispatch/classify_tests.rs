//! Tests for response-body classification.

use super::classify::classify;
use super::ApiError;

mod success_path {
    use super::*;

    #[test]
    fn returns_full_envelope_when_code_is_success_sentinel() {
        let payload = classify(br#"{"code":200,"data":{"x":1}}"#).unwrap();

        assert_eq!(payload.get("code"), Some(&serde_json::json!(200)));
        assert_eq!(payload.get("data"), Some(&serde_json::json!({"x": 1})));
    }

    #[test]
    fn bare_success_envelope_is_accepted() {
        let payload = classify(br#"{"code":200}"#).unwrap();

        assert_eq!(payload.len(), 1);
    }
}

mod business_path {
    use super::*;

    #[test]
    fn non_success_code_becomes_business_error_with_code_and_desc() {
        let err = classify(br#"{"code":414,"desc":"param error"}"#).unwrap_err();

        match err {
            ApiError::Business { code, desc } => {
                assert_eq!(code, 414);
                assert_eq!(desc, "param error");
            }
            other => panic!("expected business error, got {other:?}"),
        }
    }

    #[test]
    fn missing_desc_yields_empty_description() {
        let err = classify(br#"{"code":500}"#).unwrap_err();

        match err {
            ApiError::Business { code, desc } => {
                assert_eq!(code, 500);
                assert!(desc.is_empty());
            }
            other => panic!("expected business error, got {other:?}"),
        }
    }
}

mod inner_path {
    use super::*;

    #[test]
    fn non_json_body_is_inner_error_carrying_the_body() {
        let err = classify(b"<html>error</html>").unwrap_err();

        match err {
            ApiError::Inner { body } => assert_eq!(body, "<html>error</html>"),
            other => panic!("expected inner error, got {other:?}"),
        }
    }

    #[test]
    fn json_non_object_is_inner_error() {
        assert!(classify(b"[1,2,3]").unwrap_err().is_inner());
        assert!(classify(b"\"ok\"").unwrap_err().is_inner());
        assert!(classify(b"200").unwrap_err().is_inner());
    }

    #[test]
    fn object_without_code_is_inner_error() {
        let err = classify(br#"{"desc":"no code here"}"#).unwrap_err();

        assert!(err.is_inner());
    }

    #[test]
    fn object_with_non_integer_code_is_inner_error() {
        assert!(classify(br#"{"code":"200"}"#).unwrap_err().is_inner());
        assert!(classify(br#"{"code":null}"#).unwrap_err().is_inner());
        assert!(classify(br#"{"code":20.5}"#).unwrap_err().is_inner());
    }

    #[test]
    fn empty_body_is_inner_error() {
        assert!(classify(b"").unwrap_err().is_inner());
    }
}

mod idempotence {
    use super::*;

    #[test]
    fn classifying_the_same_body_twice_yields_identical_results() {
        let raw = br#"{"code":200,"data":{"x":1}}"#;

        assert_eq!(classify(raw).unwrap(), classify(raw).unwrap());

        let raw_err = br#"{"code":414,"desc":"param error"}"#;
        let (first, second) = (classify(raw_err).unwrap_err(), classify(raw_err).unwrap_err());
        assert!(matches!(
            (first, second),
            (
                ApiError::Business { code: 414, .. },
                ApiError::Business { code: 414, .. }
            )
        ));
    }
}
