use std::fmt;

use indexmap::IndexMap;

/// Insertion-ordered map used for object values.
///
/// Order matters: the parser merges concatenated sibling objects and detects
/// duplicate keys while members keep the order they appeared in the input.
pub type Map = IndexMap<String, Value>;

/// Sequence of values used for arrays.
pub type Array = Vec<Value>;

/// A best-effort JSON value produced by the repair parser.
///
/// Integers and floats are kept apart so that post-processing can tell
/// `1` from `1.0`; malformed numeric literals are preserved verbatim as
/// strings.
///
/// # Examples
///
/// ```
/// use jsonmend::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Object(Map),
    Array(Array),
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    #[default]
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Member lookup on objects; `None` for every other variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonmend::{Options, loads};
    ///
    /// let v = loads("{name: 'John'}", &Options::default())?;
    /// assert_eq!(v.get("name").and_then(|v| v.as_str()), Some("John"));
    /// # Ok::<(), jsonmend::MendError>(())
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Element lookup on arrays; `None` for every other variant.
    pub fn at(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Array(values) => values.get(index),
            _ => None,
        }
    }

    /// Serialize to compact JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonmend::{Options, loads};
    ///
    /// let v = loads("{a: 1, b: [true, null]}", &Options::default())?;
    /// assert_eq!(v.dump(), r#"{"a":1,"b":[true,null]}"#);
    /// # Ok::<(), jsonmend::MendError>(())
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, None);
        out
    }

    /// Serialize to JSON text indented with two-space steps.
    pub fn dump_pretty(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, Some(0));
        out
    }

    fn write(&self, out: &mut String, indent: Option<usize>) {
        match self {
            Self::Object(map) => {
                out.push('{');
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if let Some(level) = indent {
                        push_newline_indent(out, level + 2);
                    }
                    write_escaped(out, key);
                    out.push(':');
                    if indent.is_some() {
                        out.push(' ');
                    }
                    value.write(out, indent.map(|level| level + 2));
                }
                if let Some(level) = indent
                    && !map.is_empty()
                {
                    push_newline_indent(out, level);
                }
                out.push('}');
            }
            Self::Array(values) => {
                out.push('[');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if let Some(level) = indent {
                        push_newline_indent(out, level + 2);
                    }
                    value.write(out, indent.map(|level| level + 2));
                }
                if let Some(level) = indent
                    && !values.is_empty()
                {
                    push_newline_indent(out, level);
                }
                out.push(']');
            }
            Self::String(s) => write_escaped(out, s),
            Self::Integer(n) => {
                use fmt::Write;
                let _ = write!(out, "{n}");
            }
            Self::Float(f) => {
                use fmt::Write;
                let _ = write!(out, "{f}");
            }
            Self::Bool(true) => out.push_str("true"),
            Self::Bool(false) => out.push_str("false"),
            Self::Null => out.push_str("null"),
        }
    }
}

fn push_newline_indent(out: &mut String, level: usize) {
    out.push('\n');
    for _ in 0..level {
        out.push(' ');
    }
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                use fmt::Write;
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Object(map) => serializer.collect_map(map.iter()),
            Self::Array(values) => serializer.collect_seq(values.iter()),
            Self::String(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Array(values) => {
                serde_json::Value::Array(values.into_iter().map(serde_json::Value::from).collect())
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Integer(n) => serde_json::Value::Number(n.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Null => serde_json::Value::Null,
        }
    }
}
