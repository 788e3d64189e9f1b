pub mod cli;
pub mod error;
pub mod fuzzer;
pub mod http;
pub mod models;
pub mod reporter;
pub mod runner;

pub use error::FuzzError;
pub use fuzzer::{HeaderParser, UrlBuilder};
pub use models::{FuzzConfig, HttpMethod, RequestResult};
pub use reporter::{ConsoleReporter, OutputWriter};
pub use runner::{ConfigValidator, FuzzRunner, RunStats};
