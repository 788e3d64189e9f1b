use colored::Colorize;

use crate::models::{FuzzConfig, RequestResult};

pub struct ConsoleReporter;

const RULER: &str = "***************************************************************";

impl ConsoleReporter {
    pub fn print_banner() {
        println!("{}", RULER.cyan());
        println!(
            "  {}",
            format!("wordfuzz v{}", env!("CARGO_PKG_VERSION")).bold()
        );
        println!("  Wordlist-driven HTTP content discovery");
        println!("{}", RULER.cyan());
        println!();
    }

    pub fn print_run_info(config: &FuzzConfig) {
        println!(":: {} {}", "Method:".cyan(), config.method);
        println!(":: {} {}", "URL:".cyan(), config.url);
        println!(
            ":: {} {}",
            "Timeout:".cyan(),
            config
                .timeout
                .map(|t| format!("{}s", t))
                .unwrap_or_else(|| "none".to_string())
        );
        println!(
            ":: {} {}",
            "Extensions:".cyan(),
            config
                .extensions
                .as_ref()
                .map(|e| e.join(" "))
                .unwrap_or_else(|| "none".to_string())
        );
        println!(
            ":: {} {}",
            "Blacklist codes:".cyan(),
            config
                .filter_code
                .as_ref()
                .map(|codes| {
                    codes
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_else(|| "none".to_string())
        );
        println!();
    }

    /// One result line, identical on the console and in the output file.
    pub fn format_result(result: &RequestResult) -> String {
        format!(
            "{}      [Status: {} Size: {} Lines: {}]",
            result.word, result.status, result.size, result.lines
        )
    }
}
