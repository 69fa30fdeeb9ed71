#![cfg(target_arch = "wasm32")]

use bemify_wasm::{bemify, JsBemifier};
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

// JsError 没有实现 Debug，不能直接 unwrap
fn ok(result: Result<String, JsError>) -> String {
    match result {
        Ok(class) => class,
        Err(_) => panic!("unexpected error"),
    }
}

fn to_js(value: serde_json::Value) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).unwrap()
}

fn function() -> JsValue {
    Function::new_no_args("return 1").into()
}

#[wasm_bindgen_test]
fn test_bemify_object() {
    let suffixes = to_js(serde_json::json!({ "--a": true, "--b": false, "--c": true }));
    assert_eq!(ok(bemify("block", suffixes)), "block block--a block--c");
}

#[wasm_bindgen_test]
fn test_bemify_array_with_null() {
    let suffixes = to_js(serde_json::json!(["--a", "__el", null, "--b"]));
    assert_eq!(
        ok(bemify("block", suffixes)),
        "block__el block__el--a block__el--b"
    );
}

#[wasm_bindgen_test]
fn test_bemify_unsupported_values_are_empty() {
    assert_eq!(ok(bemify("block", JsValue::UNDEFINED)), "block");
    assert_eq!(ok(bemify("block", JsValue::from_f64(3.0))), "block");
    assert_eq!(ok(bemify("block", JsValue::TRUE)), "block");
    assert_eq!(ok(bemify("block", function())), "block");
}

#[wasm_bindgen_test]
fn test_bemify_function_item_keeps_siblings() {
    let suffixes = Array::of3(&JsValue::from_str("--a"), &function(), &JsValue::UNDEFINED);
    assert_eq!(ok(bemify("block", suffixes.into())), "block block--a");
}

#[wasm_bindgen_test]
fn test_bemify_js_truthiness() {
    let suffixes = Object::new();
    let set = |key: &str, value: JsValue| {
        Reflect::set(&suffixes, &JsValue::from_str(key), &value).unwrap();
    };
    set("--inf", JsValue::from_f64(f64::INFINITY));
    set("--nan", JsValue::from_f64(f64::NAN));
    set("--fn", function());
    set("--zero", JsValue::from_f64(0.0));
    set("--empty", JsValue::from_str(""));
    set("--undefined", JsValue::UNDEFINED);
    set("--list", Array::new().into());
    assert_eq!(
        ok(bemify("block", suffixes.into())),
        "block block--fn block--inf block--list"
    );
}

#[wasm_bindgen_test]
fn test_bemify_nested_array_and_object() {
    let suffixes = to_js(serde_json::json!([["--b", ["--a"]], { "util": 1 }]));
    assert_eq!(ok(bemify("block", suffixes)), "block block--a block--b util");
}

#[wasm_bindgen_test]
fn test_bemify_multiple_elements_throws() {
    assert!(bemify("block", JsValue::from_str("__a __b")).is_err());
    let spread = to_js(serde_json::json!(["__a", { "__b": true }]));
    assert!(bemify("block", spread).is_err());
}

#[wasm_bindgen_test]
fn test_bemifier_class() {
    let card = JsBemifier::new("card".to_string());
    assert_eq!(card.block(), "card");
    assert_eq!(ok(card.build(JsValue::UNDEFINED)), "card");
    assert_eq!(
        ok(card.build(JsValue::from_str("--mod util"))),
        "card card--mod util"
    );
}
