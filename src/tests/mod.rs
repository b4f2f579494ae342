use super::*;

fn opts() -> Options {
    Options::default()
}

#[cfg(feature = "serde")]
fn as_json(v: &Value) -> serde_json::Value {
    serde_json::Value::from(v.clone())
}

mod comments;
mod logging;
mod strings_escapes;
