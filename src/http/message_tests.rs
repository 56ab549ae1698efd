//! Tests for HTTP request/response value types.

use std::collections::BTreeMap;

use super::*;

fn api_url() -> url::Url {
    url::Url::parse("https://api.netease.im/nimserver/user/create.action").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_form_uses_post_and_form_content_type() {
        let req = HttpRequest::post_form(api_url(), &BTreeMap::new());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn post_form_encodes_params_in_key_order() {
        let params = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        let req = HttpRequest::post_form(api_url(), &params);

        assert_eq!(req.body, b"a=1&b=2");
    }

    #[test]
    fn post_form_percent_encodes_reserved_characters() {
        let params = BTreeMap::from([("name".to_string(), "a b&c=d".to_string())]);
        let req = HttpRequest::post_form(api_url(), &params);

        assert_eq!(req.body, b"name=a+b%26c%3Dd");
    }

    #[test]
    fn post_form_with_no_params_has_empty_body() {
        let req = HttpRequest::post_form(api_url(), &BTreeMap::new());

        assert!(req.body.is_empty());
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let req = HttpRequest::post_form(api_url(), &BTreeMap::new())
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("one"),
            )
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("two"),
            );

        assert_eq!(req.headers.get(http::header::USER_AGENT).unwrap(), "two");
        assert_eq!(req.headers.get_all(http::header::USER_AGENT).iter().count(), 1);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_ok_only_for_status_200() {
        let ok = HttpResponse::new(http::StatusCode::OK, vec![]);
        let err = HttpResponse::new(http::StatusCode::INTERNAL_SERVER_ERROR, vec![]);
        let redirect = HttpResponse::new(http::StatusCode::MOVED_PERMANENTLY, vec![]);

        assert!(ok.is_ok());
        assert!(!err.is_ok());
        assert!(!redirect.is_ok());
    }

    #[test]
    fn body_text_decodes_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, b"{\"code\":200}".to_vec());

        assert_eq!(resp.body_text(), "{\"code\":200}");
    }

    #[test]
    fn body_text_replaces_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![0xff, 0xfe]);

        assert!(resp.body_text().contains('\u{fffd}'));
    }
}
