use crate::parser::{ContextTag, JsonParser};
use crate::source::ByteSource;

impl<S: ByteSource> JsonParser<S> {
    /// Consume a comment at the cursor.
    ///
    /// The termination set is context-sensitive: newline always ends a line
    /// comment, plus `]` inside an array, `}` inside an object value and `:`
    /// inside an object key, so that a comment in a pathologically malformed
    /// input still stops at the structural byte the enclosing parser needs.
    /// The driver resumes scanning afterwards; inside a construct the
    /// enclosing sub-parser continues with no value.
    pub(crate) fn parse_comment(&mut self) {
        let mut termination = vec![b'\n', b'\r'];
        if self.context.contains(ContextTag::Array) {
            termination.push(b']');
        }
        if self.context.contains(ContextTag::ObjectValue) {
            termination.push(b'}');
        }
        if self.context.contains(ContextTag::ObjectKey) {
            termination.push(b':');
        }

        let current = self.char_at(0);
        if current == b'#' {
            let comment = self.consume_line_comment(&termination);
            if self.logging_enabled() {
                let msg = format!(
                    "found line comment: {}, ignoring",
                    String::from_utf8_lossy(&comment)
                );
                self.log(&msg);
            }
        } else if current == b'/' {
            match self.char_at(1) {
                b'/' => {
                    self.index += 2;
                    let body = self.consume_line_comment(&termination);
                    if self.logging_enabled() {
                        let msg = format!(
                            "found line comment: //{}, ignoring",
                            String::from_utf8_lossy(&body)
                        );
                        self.log(&msg);
                    }
                }
                b'*' => {
                    let mut comment = b"/*".to_vec();
                    self.index += 2;
                    loop {
                        let c = self.char_at(0);
                        if c == 0 {
                            self.log(
                                "reached the end of input while parsing a block comment; unclosed block comment",
                            );
                            break;
                        }
                        comment.push(c);
                        self.index += 1;
                        if comment.ends_with(b"*/") {
                            break;
                        }
                    }
                    if self.logging_enabled() {
                        let msg = format!(
                            "found block comment: {}, ignoring",
                            String::from_utf8_lossy(&comment)
                        );
                        self.log(&msg);
                    }
                }
                _ => {
                    // a stray slash, not a comment
                    self.index += 1;
                }
            }
        }
    }

    fn consume_line_comment(&mut self, termination: &[u8]) -> Vec<u8> {
        let mut comment = Vec::new();
        let mut current = self.char_at(0);
        while current != 0 && !termination.contains(&current) {
            comment.push(current);
            self.index += 1;
            current = self.char_at(0);
        }
        comment
    }
}
