//! JavaScript bindings for the browser front end.
//!
//! Values cross the boundary through `serde-wasm-bindgen`, so points are
//! plain `{ latitude, longitude }` objects and results come back as plain
//! objects with camelCase keys. Failures surface as JS `Error`s.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::constructive::{order_path, PathOrderConfig};
use crate::models::{Point, Stop};
use crate::validation::{FormData, FormKind, PasswordReport};

#[derive(Serialize)]
struct OrderedPath {
    points: Vec<Point>,
    order: Vec<usize>,
    polyline: Vec<[f64; 2]>,
    stops: Vec<Stop>,
    length: f64,
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("invalid {what}: {e}")))
}

// Maps must arrive as plain objects so callers can read `errors.email`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

fn form_kind(form: &str) -> Result<FormKind, JsValue> {
    form.parse().map_err(js_error)
}

/// Orders `[{ latitude, longitude }, ...]` for the route map.
///
/// `options` may be `undefined` or `{ refineWithTwoOpt?, neverWorseThanInput? }`.
#[wasm_bindgen(js_name = orderPath)]
pub fn order_path_js(points: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let points: Vec<Point> = from_js(points, "points")?;
    let config = if options.is_undefined() || options.is_null() {
        PathOrderConfig::default()
    } else {
        from_js(options, "options")?
    };

    let tour = order_path(&points, &config).map_err(js_error)?;
    to_js(&OrderedPath {
        polyline: tour.polyline(),
        stops: tour.stops(),
        length: tour.length(),
        order: tour.order().to_vec(),
        points: tour.into_points(),
    })
}

/// Validates one field of the `"customer"` or `"company"` signup form.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(
    form: &str,
    field: &str,
    value: &str,
    data: JsValue,
) -> Result<JsValue, JsValue> {
    let schema = form_kind(form)?.schema();
    let data: FormData = if data.is_undefined() || data.is_null() {
        FormData::new()
    } else {
        from_js(data, "form data")?
    };
    to_js(&schema.validate_field(field, value, &data))
}

/// Validates a whole signup form.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(form: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let schema = form_kind(form)?.schema();
    let data: FormData = from_js(data, "form data")?;
    to_js(&schema.validate_form(&data))
}

/// Sanitizes a signup form's values before submission.
#[wasm_bindgen(js_name = sanitizeData)]
pub fn sanitize_data_js(form: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let schema = form_kind(form)?.schema();
    let data: FormData = from_js(data, "form data")?;
    to_js(&schema.sanitize_data(&data))
}

/// Returns `{ score, strength }` for a password.
#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength_js(password: &str) -> Result<JsValue, JsValue> {
    to_js(&PasswordReport::of(password))
}
