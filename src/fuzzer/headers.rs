use anyhow::{Result, bail};
use std::collections::HashMap;

use super::{FUZZ_KEYWORD, SUBST_MARKER};

pub struct HeaderParser;

impl HeaderParser {
    /// Parse raw header tokens into a name-to-value map. Each token may hold
    /// several comma-separated `key:value` pairs; pairs split on the first
    /// colon and both sides are trimmed. The FUZZ keyword inside a value is
    /// rewritten to the substitution marker. Duplicate keys overwrite
    /// earlier ones.
    pub fn parse(raw: &[String]) -> Result<HashMap<String, String>> {
        let mut parsed = HashMap::new();

        for group in raw {
            for header in group.split(',') {
                let Some((key, value)) = header.split_once(':') else {
                    bail!("Invalid header format: '{}'. Expected 'key:value'", header);
                };
                parsed.insert(
                    key.trim().to_string(),
                    value.trim().replace(FUZZ_KEYWORD, SUBST_MARKER),
                );
            }
        }

        Ok(parsed)
    }

    /// Fill the substitution marker in every header value with the current
    /// word. Keys pass through unchanged.
    pub fn substitute(headers: &HashMap<String, String>, word: &str) -> HashMap<String, String> {
        headers
            .iter()
            .map(|(k, v)| (k.clone(), v.replace(SUBST_MARKER, word)))
            .collect()
    }
}
