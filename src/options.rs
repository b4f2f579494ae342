#[derive(Clone, Debug)]
pub struct Options {
    /// Record a diagnostic log entry for every repair decision.
    /// Use `loads_with_log` / `JsonParser::logs` to retrieve entries.
    pub logging: bool,
    /// Keep string output prefix-stable when parsing a growing buffer:
    /// suppress trailing-whitespace trimming and drop a dangling `\` at
    /// end of input instead.
    pub stream_stable: bool,
    /// Page size in bytes for the chunked file source used by `from_file`.
    /// `0` selects the default (1,000,000). Ignored for in-memory input.
    pub chunk_length: usize,
    /// How many bytes to capture on each side of the cursor when building
    /// log context snippets.
    pub log_context_window: usize,
    /// Maximum object/array nesting depth before the parser gives up with
    /// `MendError::MaxDepthExceeded` instead of overflowing the stack.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            logging: false,
            stream_stable: false,
            chunk_length: 0,
            log_context_window: 10,
            max_depth: 1024,
        }
    }
}
