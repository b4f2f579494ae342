pub mod cli;
pub mod error;
pub mod options;
mod parser;
pub mod source;
pub mod value;

pub use error::MendError;
pub use options::Options;
pub use parser::{JsonParser, ParseLogEntry};
pub use source::{ByteSource, ChunkedFileSource};
pub use value::{Array, Map, Value};

use std::io::Read;
use std::path::Path;

// ============================================================================
// Core API - parse in-memory input
// ============================================================================

/// Parse a potentially malformed JSON string into a [`Value`].
///
/// The parser never rejects content: unquoted keys and strings, single and
/// smart quotes, missing colons and commas, comments, trailing separators
/// and unclosed constructs are all repaired on a best-effort basis. Only
/// pathological nesting depth produces an error.
///
/// # Examples
///
/// ```
/// use jsonmend::{Options, Value, loads};
///
/// let value = loads("{name: 'John', age: 30,}", &Options::default())?;
/// assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("John"));
/// assert_eq!(value.get("age").and_then(|v| v.as_i64()), Some(30));
/// # Ok::<(), jsonmend::MendError>(())
/// ```
pub fn loads(input: &str, opts: &Options) -> Result<Value, MendError> {
    parse_bytes(input.as_bytes(), opts)
}

/// Parse raw bytes into a [`Value`].
///
/// The parser works byte-at-a-time, so input does not have to be valid
/// UTF-8; string values are recovered lossily where it is not.
///
/// # Examples
///
/// ```
/// use jsonmend::{Options, parse_bytes};
///
/// let value = parse_bytes(b"[1, 2, 3,,]", &Options::default())?;
/// assert_eq!(value.dump(), "[1,2,3]");
/// # Ok::<(), jsonmend::MendError>(())
/// ```
pub fn parse_bytes(input: &[u8], opts: &Options) -> Result<Value, MendError> {
    JsonParser::new(input, opts.clone()).parse()
}

/// Parse a string and return both the value and the repair log.
///
/// Logging is forced on for this call regardless of `opts.logging`.
///
/// # Examples
///
/// ```
/// use jsonmend::{Options, loads_with_log};
///
/// let (value, log) = loads_with_log("[1, 2 /*c*/, 3]", &Options::default())?;
/// assert_eq!(value.dump(), "[1,2,3]");
/// // Note: without the `logging` feature compiled in, `log` stays empty.
/// # let _ = log;
/// # Ok::<(), jsonmend::MendError>(())
/// ```
pub fn loads_with_log(
    input: &str,
    opts: &Options,
) -> Result<(Value, Vec<ParseLogEntry>), MendError> {
    let mut forced = opts.clone();
    forced.logging = true;
    let mut parser = JsonParser::new(input.as_bytes(), forced);
    let value = parser.parse()?;
    Ok((value, parser.into_logs()))
}

// ============================================================================
// Reader and file API
// ============================================================================

/// Parse everything a reader yields.
///
/// # Examples
///
/// ```no_run
/// use jsonmend::{Options, load};
/// use std::fs::File;
///
/// let file = File::open("broken.json")?;
/// let value = load(file, &Options::default())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load<R: Read>(mut reader: R, opts: &Options) -> Result<Value, MendError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| MendError::io("read input", e))?;
    parse_bytes(&content, opts)
}

/// Parse a file through the page-cached [`ChunkedFileSource`], honoring
/// `opts.chunk_length` as the page size.
///
/// Suited to inputs too large to slurp; bytes are fetched on demand and at
/// most a couple of pages stay resident.
///
/// # Examples
///
/// ```no_run
/// use jsonmend::{Options, from_file};
///
/// let value = from_file("broken.json", &Options::default())?;
/// # Ok::<(), jsonmend::MendError>(())
/// ```
pub fn from_file<P: AsRef<Path>>(path: P, opts: &Options) -> Result<Value, MendError> {
    let source = ChunkedFileSource::open(path, opts.chunk_length)
        .map_err(|e| MendError::io("open file", e))?;
    JsonParser::new(source, opts.clone()).parse()
}

#[cfg(test)]
mod tests;
