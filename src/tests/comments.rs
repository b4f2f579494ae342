use super::*;

#[cfg(feature = "serde")]
use serde_json::json;

#[cfg(feature = "serde")]
#[test]
fn hash_comment_before_value() {
    let v = loads("# comment\n[1]", &opts()).unwrap();
    assert_eq!(as_json(&v), json!([1]));
}

#[cfg(feature = "serde")]
#[test]
fn line_comment_between_elements() {
    let v = loads("[1, 2 // note\n, 3]", &opts()).unwrap();
    assert_eq!(as_json(&v), json!([1, 2, 3]));
}

#[cfg(feature = "serde")]
#[test]
fn block_comment_before_member() {
    let v = loads(r#"{"a": 1 /* x */ , "b": 2}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": 1, "b": 2}));
}

#[test]
fn unclosed_block_comment_consumes_the_rest() {
    let v = loads("/* unclosed", &opts()).unwrap();
    assert_eq!(v, Value::String(String::new()));
}

#[cfg(feature = "serde")]
#[test]
fn comment_in_value_position_yields_empty_value() {
    // the comment sentinel reaches the object, which records no value
    let v = loads("{\"a\": # note\n1}", &opts()).unwrap();
    assert_eq!(as_json(&v)["a"], json!(""));
}

#[cfg(feature = "serde")]
#[test]
fn stray_slash_is_skipped() {
    let v = loads("/ {\"a\": 1}", &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": 1}));
}

#[cfg(feature = "serde")]
#[test]
fn comment_terminates_on_structural_byte_in_array() {
    // `]` joins the termination set inside an array
    let v = loads("[1, 2 # tail]", &opts()).unwrap();
    assert_eq!(as_json(&v), json!([1, 2]));
}
