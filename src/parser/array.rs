use crate::error::MendResult;
use crate::parser::{ContextTag, JsonParser, is_ws, matching_delimiter, non_empty_value};
use crate::source::ByteSource;
use crate::value::Value;

impl<S: ByteSource> JsonParser<S> {
    /// Parse an array. The opening `[` has already been consumed.
    pub(crate) fn parse_array(&mut self) -> MendResult<Vec<Value>> {
        self.descend()?;
        let values = self.parse_array_inner();
        self.ascend();
        values
    }

    fn parse_array_inner(&mut self) -> MendResult<Vec<Value>> {
        let mut arr: Vec<Value> = Vec::new();
        self.context.push(ContextTag::Array);

        let mut current = self.char_at(0);
        while !matches!(current, 0 | b']' | b'}') {
            self.skip_whitespaces();

            let value = if let Some(open) = self.string_delimiter_at(0) {
                // A quoted token followed by `:` is an object key, meaning
                // the element is an object that lost its brace.
                let close = matching_delimiter(open);
                let scan = self.skip_to_seq(close, open.len());
                let ahead = self.scroll_whitespaces(scan + close.len());
                if self.char_at(ahead as isize) == b':' {
                    Some(self.parse_object()?)
                } else {
                    non_empty_value(self.parse_string().into_value())
                }
            } else {
                self.parse_json()?
            };

            match value {
                None => self.index += 1,
                Some(Value::String(s)) if s == "..." && self.char_at(-1) == b'.' => {
                    self.log("while parsing an array, found a stray '...', ignoring it");
                }
                Some(v) => arr.push(v),
            }

            current = self.char_at(0);
            while current != 0 && current != b']' && (is_ws(current) || current == b',') {
                self.index += 1;
                current = self.char_at(0);
            }
        }

        if current != b']' {
            self.log("while parsing an array, missed the closing ], ignoring it");
        }
        self.index += 1;
        self.context.pop();
        Ok(arr)
    }
}
