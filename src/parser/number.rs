use crate::parser::{ContextTag, JsonParser, is_number_byte};
use crate::source::ByteSource;
use crate::value::Value;

impl<S: ByteSource> JsonParser<S> {
    /// Parse a numeric literal at the cursor.
    ///
    /// Bytes from the number set accumulate greedily; a trailing operator is
    /// stripped with a one-byte rollback, an alphabetic continuation turns
    /// the whole token back into a string, and anything that fails strict
    /// parsing is preserved verbatim.
    pub(crate) fn parse_number(&mut self) -> Value {
        let mut acc: Vec<u8> = Vec::new();
        let mut current = self.char_at(0);
        let in_array = self.context.current() == Some(ContextTag::Array);

        while current != 0 && is_number_byte(current) && (!in_array || current != b',') {
            acc.push(current);
            self.index += 1;
            current = self.char_at(0);
        }

        if matches!(acc.last(), Some(b'-' | b'e' | b'E' | b'/' | b',')) {
            acc.pop();
            self.index -= 1;
        } else if current != 0 && current.is_ascii_alphabetic() {
            // the "number" was really the start of an identifier
            self.index -= acc.len();
            return self.parse_string().into_value();
        }

        let text = String::from_utf8_lossy(&acc).into_owned();
        if text.contains(',') {
            return Value::String(text);
        }
        if text.contains(['.', 'e', 'E']) {
            match text.parse::<f64>() {
                Ok(f) => Value::Float(f),
                Err(_) => Value::String(text),
            }
        } else {
            match text.parse::<i64>() {
                Ok(n) => Value::Integer(n),
                Err(_) => Value::String(text),
            }
        }
    }
}
