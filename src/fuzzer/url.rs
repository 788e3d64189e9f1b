use super::FUZZ_KEYWORD;

pub struct UrlBuilder;

impl UrlBuilder {
    /// Build the candidate URL for one word. Every occurrence of the
    /// placeholder is replaced; extension suffixes are concatenated directly
    /// after the substituted URL with no separator. A template without the
    /// placeholder gets the word appended verbatim instead.
    pub fn build(template: &str, word: &str, extensions: Option<&[String]>) -> String {
        if template.contains(FUZZ_KEYWORD) {
            let mut url = template.replace(FUZZ_KEYWORD, word);
            if let Some(exts) = extensions {
                url.push_str(&exts.concat());
            }
            url
        } else {
            format!("{}{}", template, word)
        }
    }
}
