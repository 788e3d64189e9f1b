mod console;
mod output;

pub use console::ConsoleReporter;
pub use output::OutputWriter;
