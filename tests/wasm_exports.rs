//! Browser-side checks for the JavaScript exports.
//!
//! Run with `wasm-pack test --node --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use js_sys::{Map, Reflect, JSON};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

use trashroute::wasm::{
    order_path_js, password_strength_js, sanitize_data_js, validate_field_js, validate_form_js,
};

fn js(json: &str) -> JsValue {
    JSON::parse(json).expect("valid JSON literal")
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).expect("readable property")
}

fn to_json(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).expect("plain JS value")
}

const STOPS: &str = r#"[
    { "latitude": 6.9271, "longitude": 79.8612 },
    { "latitude": 6.9500, "longitude": 79.8700 },
    { "latitude": 6.9300, "longitude": 79.8650 }
]"#;

#[wasm_bindgen_test]
fn order_path_defaults_when_options_undefined() {
    let result = order_path_js(js(STOPS), JsValue::UNDEFINED).expect("ordered");
    let json = to_json(result);
    assert_eq!(json["order"], serde_json::json!([0, 2, 1]));
    assert_eq!(json["stops"][2]["sequence"], 3);
    assert_eq!(json["stops"][2]["sourceIndex"], 1);
    assert_eq!(json["polyline"][0], serde_json::json!([6.9271, 79.8612]));
    assert!(json["length"].as_f64().expect("numeric length") > 0.0);
}

#[wasm_bindgen_test]
fn order_path_accepts_null_and_partial_options() {
    let plain = to_json(order_path_js(js(STOPS), JsValue::NULL).expect("ordered"));
    let refined = to_json(
        order_path_js(js(STOPS), js(r#"{ "refineWithTwoOpt": true }"#)).expect("ordered"),
    );
    assert_eq!(plain["order"], refined["order"]);
}

#[wasm_bindgen_test]
fn order_path_rejects_bad_points() {
    let out_of_range = js(r#"[{ "latitude": 1e300, "longitude": 0 }, { "latitude": 0, "longitude": 0 }]"#);
    let err = order_path_js(out_of_range, JsValue::UNDEFINED).expect_err("out of range");
    assert!(err.is_instance_of::<js_sys::Error>());

    let malformed = js(r#"[{ "lat": 1, "lng": 2 }]"#);
    assert!(order_path_js(malformed, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn validate_form_errors_is_plain_object() {
    let result = validate_form_js("customer", js(r#"{ "email": "not-an-email" }"#)).expect("validated");
    assert_eq!(get(&result, "isValid").as_bool(), Some(false));

    let errors = get(&result, "errors");
    assert!(!errors.is_instance_of::<Map>());
    let email = get(&errors, "email").as_string().expect("email error is a string");
    assert!(email.contains("valid email"), "{email}");
}

#[wasm_bindgen_test]
fn validate_field_with_and_without_form_data() {
    let ok = validate_field_js("customer", "phoneNumber", "0712345678", JsValue::UNDEFINED)
        .expect("validated");
    assert_eq!(get(&ok, "isValid").as_bool(), Some(true));

    let mismatch = validate_field_js(
        "company",
        "confirmPassword",
        "abc",
        js(r#"{ "password": "xyz" }"#),
    )
    .expect("validated");
    assert_eq!(
        to_json(mismatch),
        serde_json::json!({ "isValid": false, "errors": ["Passwords do not match"] })
    );
}

#[wasm_bindgen_test]
fn sanitize_data_returns_plain_object() {
    let clean = sanitize_data_js(
        "company",
        js(r#"{ "phoneNumber": "(071) 234-5678", "registrationNumber": "pv-00 123" }"#),
    )
    .expect("sanitized");
    assert!(!clean.is_instance_of::<Map>());
    assert_eq!(get(&clean, "phoneNumber").as_string().as_deref(), Some("0712345678"));
    assert_eq!(get(&clean, "registrationNumber").as_string().as_deref(), Some("PV00123"));
}

#[wasm_bindgen_test]
fn unknown_form_is_an_error() {
    assert!(validate_form_js("driver", js("{}")).is_err());
    assert!(sanitize_data_js("driver", js("{}")).is_err());
    assert!(validate_field_js("driver", "email", "a@b.co", JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn password_strength_report() {
    let report = to_json(password_strength_js("Abcdefg1!").expect("scored"));
    assert_eq!(report, serde_json::json!({ "score": 5, "strength": "very-strong" }));
}
