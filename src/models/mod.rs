mod config;
mod method;
mod result;

pub use config::FuzzConfig;
pub use method::HttpMethod;
pub use result::RequestResult;
