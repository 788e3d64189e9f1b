use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::HttpMethod;

/// Run parameters, assembled once from the CLI and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzConfig {
    pub url: String,
    pub wordlist: String,
    pub output: Option<String>,
    pub method: HttpMethod,
    /// Parsed header map; values carry the substitution marker where the
    /// raw input had the FUZZ keyword.
    pub headers: Option<HashMap<String, String>>,
    pub extensions: Option<Vec<String>>,
    pub timeout: Option<f64>,
    pub verify_tls: bool,
    pub filter_code: Option<Vec<u16>>,
    pub filter_length: Option<usize>,
    pub filter_size: Option<usize>,
}
