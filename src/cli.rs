use clap::Parser;

#[derive(Parser)]
#[command(name = "wordfuzz")]
#[command(version, about = "Wordlist-driven HTTP content discovery fuzzer")]
pub struct Cli {
    #[arg(short, long, value_name = "path_to_list")]
    pub wordlist: String,

    /// URL of the target with 'FUZZ' as the substitution placeholder
    #[arg(short, long, value_name = "target_url")]
    pub url: String,

    #[arg(short, long, value_name = "output")]
    pub output: Option<String>,

    /// HTTP response codes to ignore
    #[arg(long = "fc", value_name = "filter_code", num_args = 1..)]
    pub filter_code: Option<Vec<u16>>,

    /// Response line count to ignore
    #[arg(long = "fl", value_name = "filter_length")]
    pub filter_length: Option<usize>,

    /// Response byte size to ignore
    #[arg(long = "fs", value_name = "filter_size")]
    pub filter_size: Option<usize>,

    /// Custom headers, 'FUZZ' in values is substituted per request
    #[arg(short = 'H', long, value_name = "key:value", num_args = 1..)]
    pub headers: Vec<String>,

    /// Disable TLS certificate verification
    #[arg(long = "no-ssl")]
    pub no_ssl: bool,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "seconds")]
    pub timeout: Option<f64>,

    /// Suffixes appended after substitution, concatenated with no separator
    #[arg(short, long, value_name = "extension", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    #[arg(short, long, default_value = "GET", value_name = "http_method")]
    pub method: String,
}
