mod headers;
mod url;

pub use headers::HeaderParser;
pub use url::UrlBuilder;

/// Placeholder token marking substitution points in the URL template and
/// header values.
pub const FUZZ_KEYWORD: &str = "FUZZ";

/// Generic marker that replaces the FUZZ keyword in parsed header values,
/// filled with the current word on every request.
pub(crate) const SUBST_MARKER: &str = "{}";
