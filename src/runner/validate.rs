use std::path::Path;

use crate::fuzzer::FUZZ_KEYWORD;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Strict AND of independent predicates, boolean signal only: URL has an
    /// http(s) scheme and carries the placeholder, the wordlist exists, and
    /// the output path (when given) ends with `.txt`.
    pub fn validate(url: &str, output: Option<&str>, wordlist: &str) -> bool {
        (url.starts_with("https://") || url.starts_with("http://"))
            && url.contains(FUZZ_KEYWORD)
            && Path::new(wordlist).exists()
            && output.is_none_or(|o| o.ends_with(".txt"))
    }
}
