use super::*;

#[cfg(feature = "logging")]
#[test]
fn missed_colon_is_reported() {
    let (_, log) = loads_with_log(r#"{"a" 1}"#, &opts()).unwrap();
    assert!(log.iter().any(|e| e.message.contains("missed a :")));
}

#[cfg(feature = "logging")]
#[test]
fn duplicate_key_rollback_is_reported() {
    let (_, log) = loads_with_log(r#"[{"k": 1, "k": 2}]"#, &opts()).unwrap();
    assert!(log.iter().any(|e| e.message.contains("duplicate key")));
}

#[cfg(feature = "logging")]
#[test]
fn comments_are_reported_with_their_text() {
    let (_, log) = loads_with_log("[1 /* why */, 2]", &opts()).unwrap();
    assert!(
        log.iter()
            .any(|e| e.message.contains("block comment") && e.message.contains("why"))
    );
}

#[cfg(feature = "logging")]
#[test]
fn unclosed_array_is_reported() {
    let (_, log) = loads_with_log("[1, 2", &opts()).unwrap();
    assert!(log.iter().any(|e| e.message.contains("missed the closing ]")));
}

#[test]
fn logging_off_records_nothing() {
    let mut parser = JsonParser::new(r#"{"a" 1}"#.as_bytes(), opts());
    parser.parse().unwrap();
    assert!(parser.logs().is_empty());
}

#[cfg(feature = "logging")]
#[test]
fn context_window_bounds_the_snippet() {
    let mut o = opts();
    o.log_context_window = 4;
    let mut parser = JsonParser::new("{\"a\" 1, \"b\" 2}".as_bytes(), Options { logging: true, ..o });
    parser.parse().unwrap();
    let log = parser.into_logs();
    assert!(!log.is_empty());
    assert!(log.iter().all(|e| e.context.len() <= 8));
}
