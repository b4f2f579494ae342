use crate::error::MendResult;
use crate::parser::{ContextTag, JsonParser};
use crate::source::ByteSource;
use crate::value::{Map, Value};

impl<S: ByteSource> JsonParser<S> {
    /// Parse an object. The opening `{` has already been consumed; the
    /// member loop also re-enters directly at a key position when an array
    /// element turns out to be a brace-less object.
    pub(crate) fn parse_object(&mut self) -> MendResult<Value> {
        self.descend()?;
        let value = self.parse_object_inner();
        self.ascend();
        value
    }

    fn parse_object_inner(&mut self) -> MendResult<Value> {
        let mut obj = Map::new();
        let start_index = self.index;

        while !matches!(self.char_at(0), b'}' | 0) {
            self.skip_whitespaces();

            if self.char_at(0) == b':' {
                self.log("while parsing an object, found a : before a key, ignoring it");
                self.index += 1;
            }

            self.context.push(ContextTag::ObjectKey);
            let mut rollback_index = self.index;

            let mut key = String::new();
            while self.char_at(0) != 0 {
                rollback_index = self.index;
                if matches!(self.char_at(0), b'#' | b'/') {
                    // a comment where a key should be; consume it and retry
                    self.parse_comment();
                    key = String::new();
                } else {
                    key = self.parse_string().into_text();
                }
                if key.is_empty() {
                    self.skip_whitespaces();
                }
                if !key.is_empty() || matches!(self.char_at(0), b':' | b'}') {
                    break;
                }
            }

            if self.context.contains(ContextTag::Array) && obj.contains_key(&key) {
                // inside an array of objects a repeated key means the
                // previous object implicitly closed; rewind and bail
                self.log(
                    "while parsing an object, found a duplicate key, closing the object here and rolling back the index",
                );
                self.index = rollback_index.saturating_sub(1);
                self.context.pop();
                break;
            }

            self.skip_whitespaces();

            if matches!(self.char_at(0), b'}' | 0) {
                self.context.pop();
                continue;
            }

            if self.char_at(0) != b':' {
                self.log("while parsing an object, missed a : after a key");
            }
            // whether this was the colon or a mistaken byte, one byte goes
            self.index += 1;

            self.context.pop();
            self.context.push(ContextTag::ObjectValue);
            self.skip_whitespaces();

            let value = if matches!(self.char_at(0), b',' | b'}') {
                self.log("while parsing an object value, found a stray , ignoring it");
                Value::String(String::new())
            } else {
                self.parse_json()?
                    .unwrap_or_else(|| Value::String(String::new()))
            };

            self.context.pop();
            obj.insert(key, value);

            if matches!(self.char_at(0), b',' | b'\'' | b'"') {
                self.index += 1;
            }
            self.skip_whitespaces();
        }

        self.index += 1;

        if obj.is_empty() && self.index.saturating_sub(start_index) > 2 {
            self.log("parsed object is empty, trying to parse it as an array instead");
            self.index = start_index;
            return self.parse_array().map(Value::Array);
        }

        if !self.context.is_empty() {
            return Ok(Value::Object(obj));
        }

        // A top-level `}, "` usually means two objects that should have
        // been one; merge the sibling's members into this one.
        self.skip_whitespaces();
        if self.char_at(0) != b',' {
            return Ok(Value::Object(obj));
        }
        self.index += 1;
        self.skip_whitespaces();
        if self.string_delimiter_at(0).is_none() {
            return Ok(Value::Object(obj));
        }
        self.log(
            "found a comma and a string delimiter after the closing brace, checking for additional key-value pairs",
        );
        if let Value::Object(extra) = self.parse_object()? {
            for (k, v) in extra {
                obj.insert(k, v);
            }
        }
        Ok(Value::Object(obj))
    }
}
