use crate::parser::{ContextTag, DOUBLE_QUOTE, LEFT_SMART_QUOTE, RIGHT_SMART_QUOTE, SINGLE_QUOTE};
use crate::parser::{JsonParser, is_ws};
use crate::source::ByteSource;
use crate::value::Value;

/// Outcome of the string sub-parser. Keyword literals keep their identity so
/// value positions can promote them to booleans or null while key positions
/// fall back to the raw text.
pub(crate) enum StringToken {
    Text(String),
    True,
    False,
    Null,
}

impl StringToken {
    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Text(s) => Value::String(s),
            Self::True => Value::Bool(true),
            Self::False => Value::Bool(false),
            Self::Null => Value::Null,
        }
    }

    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::True => "true".to_string(),
            Self::False => "false".to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

fn unescape(b: u8) -> u8 {
    match b {
        b't' => b'\t',
        b'n' => b'\n',
        b'r' => b'\r',
        b'b' => 0x08,
        other => other,
    }
}

fn trim_trailing_ws(acc: &mut Vec<u8>) {
    while acc.last().is_some_and(|b| b.is_ascii_whitespace()) {
        acc.pop();
    }
}

impl<S: ByteSource> JsonParser<S> {
    /// Parse a candidate string starting at the cursor.
    ///
    /// Handles quoted strings (including single and smart quotes), unquoted
    /// identifiers (missing-quotes mode), `true`/`false`/`null` keywords,
    /// doubled quotes and premature closing quotes. Never fails; worst case
    /// returns empty text.
    pub(crate) fn parse_string(&mut self) -> StringToken {
        let mut missing_quotes = false;
        let mut doubled_quotes = false;
        let mut lstring_delimiter: &'static [u8] = DOUBLE_QUOTE;
        let mut rstring_delimiter: &'static [u8] = DOUBLE_QUOTE;

        let mut current = self.char_at(0);
        if current == b'#' || current == b'/' {
            // the caller re-dispatches to the comment sub-parser
            return StringToken::Text(String::new());
        }

        // flush stray punctuation in front of the string
        while current != 0
            && self.string_delimiter_at(0).is_none()
            && !current.is_ascii_alphanumeric()
        {
            self.index += 1;
            current = self.char_at(0);
        }
        if current == 0 {
            return StringToken::Text(String::new());
        }

        if let Some(delim) = self.string_delimiter_at(0) {
            if delim == SINGLE_QUOTE {
                lstring_delimiter = SINGLE_QUOTE;
                rstring_delimiter = SINGLE_QUOTE;
            } else if delim == LEFT_SMART_QUOTE {
                lstring_delimiter = LEFT_SMART_QUOTE;
                rstring_delimiter = RIGHT_SMART_QUOTE;
            } else if delim == RIGHT_SMART_QUOTE {
                lstring_delimiter = RIGHT_SMART_QUOTE;
                rstring_delimiter = RIGHT_SMART_QUOTE;
            }
        } else if current.is_ascii_alphanumeric() {
            // keywords never occur in key position
            if self.context.current() != Some(ContextTag::ObjectKey) {
                match current.to_ascii_lowercase() {
                    b't' if self.at_seq(1, b"rue") => {
                        self.index += 4;
                        return StringToken::True;
                    }
                    b'f' if self.at_seq(1, b"alse") => {
                        self.index += 5;
                        return StringToken::False;
                    }
                    b'n' if self.at_seq(1, b"ull") => {
                        self.index += 4;
                        return StringToken::Null;
                    }
                    _ => {}
                }
            }
            self.log("while parsing a string, found a literal instead of a quote");
            missing_quotes = true;
        }

        if !missing_quotes {
            self.index += lstring_delimiter.len();
        }

        // A second opening delimiter right away: empty string, doubled
        // delimiters, or a stray quote. Look ahead to decide.
        if self.at_seq(0, lstring_delimiter) {
            let after = lstring_delimiter.len() as isize;
            if (self.context.current() == Some(ContextTag::ObjectKey) && self.char_at(after) == b':')
                || (self.context.current() == Some(ContextTag::ObjectValue)
                    && matches!(self.char_at(after), b',' | b'}'))
            {
                self.index += lstring_delimiter.len();
                return StringToken::Text(String::new());
            }
            if self.at_seq(lstring_delimiter.len(), lstring_delimiter) {
                self.log(
                    "while parsing a string, found a doubled quote and then a quote again, ignoring it",
                );
                return StringToken::Text(String::new());
            }
            let scan = self.skip_to_seq(rstring_delimiter, lstring_delimiter.len());
            if self.at_seq(scan + rstring_delimiter.len(), rstring_delimiter) {
                self.log("while parsing a string, found a valid starting doubled quote");
                doubled_quotes = true;
                self.index += lstring_delimiter.len();
            } else {
                let ahead = self.scroll_whitespaces(lstring_delimiter.len());
                let next = self.char_at(ahead as isize);
                if self.string_delimiter_at(ahead).is_some() || matches!(next, b'{' | b'[') {
                    self.log(
                        "while parsing a string, found a doubled quote but also another quote afterwards, ignoring it",
                    );
                    self.index += lstring_delimiter.len();
                    return StringToken::Text(String::new());
                }
                if !matches!(next, b',' | b'}' | b']') {
                    self.log(
                        "while parsing a string, found a doubled quote but it was a mistake, removing one quote",
                    );
                    self.index += lstring_delimiter.len();
                }
            }
        }

        let mut acc: Vec<u8> = Vec::new();
        let mut closed = false;

        loop {
            let current = self.char_at(0);
            if current == 0 {
                if self.options.stream_stable && acc.last() == Some(&b'\\') {
                    // an input cut mid-escape keeps its prefix stable
                    acc.pop();
                }
                break;
            }

            // unescaped closing delimiter?
            if self.at_seq(0, rstring_delimiter) && acc.last() != Some(&b'\\') {
                if doubled_quotes {
                    if self.at_seq(rstring_delimiter.len(), rstring_delimiter) {
                        self.log("while parsing a string, found the doubled closing quote");
                        self.index += rstring_delimiter.len();
                        closed = true;
                        break;
                    }
                    // a lone delimiter inside a doubled string is literal
                    acc.extend_from_slice(rstring_delimiter);
                    self.index += rstring_delimiter.len();
                    continue;
                }
                if self.at_seq(rstring_delimiter.len(), rstring_delimiter) {
                    // interior doubled quote collapses to one literal quote
                    self.log("while parsing a string, found a doubled quote, keeping one");
                    acc.extend_from_slice(rstring_delimiter);
                    self.index += 2 * rstring_delimiter.len();
                    continue;
                }
                if self.closing_delimiter_is_premature(lstring_delimiter, rstring_delimiter) {
                    self.log(
                        "while parsing a string, the closing quote appears premature, keeping it as a literal",
                    );
                    acc.extend_from_slice(rstring_delimiter);
                    self.index += rstring_delimiter.len();
                    continue;
                }
                closed = true;
                break;
            }

            if missing_quotes {
                match self.context.current() {
                    Some(ContextTag::ObjectKey) if current == b':' || is_ws(current) => {
                        self.log(
                            "while parsing an unquoted object key, found a terminator, stopping here",
                        );
                        break;
                    }
                    Some(ContextTag::ObjectValue) if matches!(current, b',' | b'}') => {
                        self.log(
                            "while parsing an unquoted object value, found a terminator, stopping here",
                        );
                        break;
                    }
                    Some(ContextTag::Array) if matches!(current, b']' | b',') => {
                        self.log(
                            "while parsing an unquoted array element, found a terminator, stopping here",
                        );
                        break;
                    }
                    _ => {}
                }
            }

            acc.push(current);
            self.index += 1;

            // the byte just pushed was a backslash: normalize the escape
            if acc.last() == Some(&b'\\') {
                let next = self.char_at(0);
                if next != 0
                    && (self.at_seq(0, rstring_delimiter)
                        || matches!(next, b't' | b'n' | b'r' | b'b' | b'\\'))
                {
                    self.log("found a stray escape sequence, normalizing it");
                    acc.pop();
                    if self.at_seq(0, rstring_delimiter) {
                        acc.extend_from_slice(rstring_delimiter);
                        self.index += rstring_delimiter.len();
                    } else {
                        acc.push(unescape(next));
                        self.index += 1;
                    }
                    // chains of escaped delimiters or backslashes
                    while acc.last() == Some(&b'\\') && self.char_at(0) != 0 {
                        if self.at_seq(0, rstring_delimiter) {
                            acc.pop();
                            acc.extend_from_slice(rstring_delimiter);
                            self.index += rstring_delimiter.len();
                        } else if self.char_at(0) == b'\\' {
                            acc.pop();
                            acc.push(b'\\');
                            self.index += 1;
                        } else {
                            break;
                        }
                    }
                }
            }
        }

        // An unquoted key that stopped on whitespace may not have been a key
        // at all but a comment fragment; only `:` or `,` ahead keeps it.
        let current = self.char_at(0);
        if current != 0
            && missing_quotes
            && self.context.current() == Some(ContextTag::ObjectKey)
            && is_ws(current)
        {
            self.log(
                "found a whitespace-terminated unquoted key, checking whether it is a comment fragment",
            );
            self.skip_whitespaces();
            if !matches!(self.char_at(0), b':' | b',') {
                return StringToken::Text(String::new());
            }
        }

        if closed {
            self.index += rstring_delimiter.len();
        } else if !self.options.stream_stable {
            self.log("while parsing a string, missed the closing quote, ignoring");
            trim_trailing_ws(&mut acc);
        }

        if !self.options.stream_stable && (missing_quotes || acc.last() == Some(&b'\n')) {
            trim_trailing_ws(&mut acc);
        }

        StringToken::Text(String::from_utf8_lossy(&acc).into_owned())
    }

    /// Scan past a closing-delimiter candidate: when another delimiter shows
    /// up before any structural terminator appropriate to the context, the
    /// candidate is premature and belongs inside the string.
    fn closing_delimiter_is_premature(
        &mut self,
        lstring_delimiter: &'static [u8],
        rstring_delimiter: &'static [u8],
    ) -> bool {
        let mut offset = rstring_delimiter.len();
        let mut check_comma_in_object_value = true;
        loop {
            let next = self.char_at(offset as isize);
            if next == 0 {
                return false;
            }
            if self.at_seq(offset, rstring_delimiter) || self.at_seq(offset, lstring_delimiter) {
                return true;
            }
            if check_comma_in_object_value && next.is_ascii_alphabetic() {
                check_comma_in_object_value = false;
            }
            if (self.context.contains(ContextTag::ObjectKey) && matches!(next, b':' | b'}'))
                || (self.context.contains(ContextTag::ObjectValue) && next == b'}')
                || (self.context.contains(ContextTag::Array) && matches!(next, b']' | b','))
                || (check_comma_in_object_value
                    && self.context.current() == Some(ContextTag::ObjectValue)
                    && next == b',')
            {
                return false;
            }
            offset += 1;
        }
    }
}
