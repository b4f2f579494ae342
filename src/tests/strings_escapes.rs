use super::*;

#[cfg(feature = "serde")]
use serde_json::json;

#[cfg(feature = "serde")]
#[test]
fn common_escapes() {
    let v = loads(r#"{"a": "l1\nl2\tend"}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "l1\nl2\tend"}));
}

#[cfg(feature = "serde")]
#[test]
fn escaped_quotes() {
    let v = loads(r#"{"a": "say \"hi\""}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "say \"hi\""}));
}

#[cfg(feature = "serde")]
#[test]
fn smart_quotes() {
    let v = loads("{\u{201C}a\u{201D}: \u{201C}b\u{201D}}", &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "b"}));
}

#[cfg(feature = "serde")]
#[test]
fn unquoted_value_with_spaces() {
    let v = loads("{a: some text here}", &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "some text here"}));
}

#[cfg(feature = "serde")]
#[test]
fn doubled_delimiters_around_value() {
    let v = loads(r#"{"a": ""value""}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "value"}));
}

#[cfg(feature = "serde")]
#[test]
fn empty_string_value() {
    let v = loads(r#"{"a": "", "b": "x"}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "", "b": "x"}));
}

#[cfg(feature = "serde")]
#[test]
fn unterminated_string_value() {
    let v = loads(r#"{"a": "text"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": "text"}));
}

#[cfg(feature = "serde")]
#[test]
fn premature_quote_is_kept_inside_string() {
    // no structural terminator before the next quote: the close is bogus
    let v = loads(r#"{"key": "lorem "ipsum" sic"}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"key": "lorem \"ipsum\" sic"}));
}

#[cfg(feature = "serde")]
#[test]
fn non_ascii_strings() {
    let v = loads(r#"{"名前": "太郎"}"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"名前": "太郎"}));
}

#[cfg(feature = "serde")]
#[test]
fn comment_fragment_never_becomes_a_key() {
    let v = loads(r#"{"a": 1, trailing note }"#, &opts()).unwrap();
    assert_eq!(as_json(&v), json!({"a": 1}));
}

#[test]
fn keyword_case_tolerance_is_first_letter_only() {
    let v = loads("[True, TRUE]", &opts()).unwrap();
    // `True` matches, `TRUE` does not and stays a string
    assert_eq!(
        v,
        Value::Array(vec![Value::Bool(true), Value::String("TRUE".into())])
    );
}
