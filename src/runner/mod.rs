mod engine;
mod validate;

pub use engine::{FuzzRunner, RunStats};
pub use validate::ConfigValidator;
