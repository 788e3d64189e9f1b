use serde::{Deserialize, Serialize};

/// Outcome of a single fuzzed request, consumed immediately for
/// filtering and printing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestResult {
    pub word: String,
    pub status: u16,
    pub size: usize,
    pub lines: usize,
}

impl RequestResult {
    pub fn new(word: String, status: u16, size: usize, lines: usize) -> Self {
        Self {
            word,
            status,
            size,
            lines,
        }
    }

    /// Line count of a response body: segments produced by splitting the
    /// decoded text on newline. An empty body counts as one line.
    pub fn count_lines(text: &str) -> usize {
        text.split('\n').count()
    }
}
