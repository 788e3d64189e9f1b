use anyhow::Result;
use clap::Parser;

use wordfuzz::cli::Cli;
use wordfuzz::{
    ConfigValidator, ConsoleReporter, FuzzConfig, FuzzRunner, HeaderParser, HttpMethod,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !ConfigValidator::validate(&cli.url, cli.output.as_deref(), &cli.wordlist) {
        println!("Invalid arguments");
        return Ok(());
    }

    let Some(method) = HttpMethod::parse(&cli.method) else {
        println!(
            "Invalid HTTP method: '{}'. Supported: GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS",
            cli.method
        );
        return Ok(());
    };

    let headers = if cli.headers.is_empty() {
        None
    } else {
        match HeaderParser::parse(&cli.headers) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                println!("Error parsing headers: {}", e);
                return Ok(());
            }
        }
    };

    let config = FuzzConfig {
        url: cli.url,
        wordlist: cli.wordlist,
        output: cli.output,
        method,
        headers,
        extensions: cli.extensions,
        timeout: cli.timeout,
        verify_tls: !cli.no_ssl,
        filter_code: cli.filter_code,
        filter_length: cli.filter_length,
        filter_size: cli.filter_size,
    };

    ConsoleReporter::print_banner();
    ConsoleReporter::print_run_info(&config);

    let runner = FuzzRunner::new(config)?;
    runner.run().await?;

    Ok(())
}
