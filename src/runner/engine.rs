use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::fuzzer::{HeaderParser, UrlBuilder};
use crate::http::HttpClient;
use crate::models::{FuzzConfig, RequestResult};
use crate::reporter::{ConsoleReporter, OutputWriter};

#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub words_processed: u64,
    pub emitted: u64,
}

pub struct FuzzRunner {
    config: FuzzConfig,
    client: HttpClient,
}

impl FuzzRunner {
    pub fn new(config: FuzzConfig) -> Result<Self> {
        let client = HttpClient::new(config.timeout, config.verify_tls)?;

        Ok(Self { config, client })
    }

    /// Drive the request loop: one synchronous request per non-empty
    /// wordlist line, each awaited to completion before the next begins.
    /// The first request-time error aborts the whole run.
    pub async fn run(&self) -> Result<RunStats> {
        if !self.config.verify_tls {
            println!(
                "{}",
                "Warning: SSL certificate verification is disabled.".yellow()
            );
        }

        let file = File::open(&self.config.wordlist)?;
        let reader = BufReader::new(file);

        let pb = self.create_progress_bar();
        let mut stats = RunStats::default();

        for line in reader.lines() {
            let word = line?.trim().to_string();
            if word.is_empty() {
                continue;
            }
            stats.words_processed += 1;

            let url = UrlBuilder::build(&self.config.url, &word, self.config.extensions.as_deref());
            let headers = self
                .config
                .headers
                .as_ref()
                .map(|h| HeaderParser::substitute(h, &word));

            let result = match self
                .client
                .request(self.config.method, &url, headers.as_ref(), &word)
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    pb.finish_and_clear();
                    println!("\n{}", e.to_string().red());
                    return Ok(stats);
                }
            };

            if self.should_emit(&result) {
                stats.emitted += 1;
                let line = ConsoleReporter::format_result(&result);
                pb.println(&line);

                if let Some(path) = &self.config.output {
                    OutputWriter::append(path, &line)?;
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        println!("Processed {} words from the wordlist.", stats.words_processed);

        Ok(stats)
    }

    /// Exclusion filters, evaluated in a fixed order: a result is suppressed
    /// only when every configured filter matches it; the first mismatching
    /// filter emits and short-circuits the rest.
    fn should_emit(&self, result: &RequestResult) -> bool {
        let codes = self.config.filter_code.as_deref();
        let length = self.config.filter_length;
        let size = self.config.filter_size;

        if codes.is_none() && size.is_none() && length.is_none() {
            return true;
        }
        if let Some(codes) = codes {
            if !codes.contains(&result.status) {
                return true;
            }
        }
        if let Some(length) = length {
            if result.lines != length {
                return true;
            }
        }
        if let Some(size) = size {
            if result.size != size {
                return true;
            }
        }

        false
    }

    fn create_progress_bar(&self) -> ProgressBar {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("Processed {pos} words from the wordlist")
                .expect("Invalid progress bar template"),
        );

        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_wordlist(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{}", word).unwrap();
        }
        file
    }

    fn config(url: String, wordlist: &NamedTempFile) -> FuzzConfig {
        FuzzConfig {
            url,
            wordlist: wordlist.path().to_str().unwrap().to_string(),
            output: None,
            method: crate::models::HttpMethod::Get,
            headers: None,
            extensions: None,
            timeout: None,
            verify_tls: true,
            filter_code: None,
            filter_length: None,
            filter_size: None,
        }
    }

    fn result(status: u16, size: usize, lines: usize) -> RequestResult {
        RequestResult::new("w".to_string(), status, size, lines)
    }

    #[test]
    fn test_emit_when_no_filters() {
        let wl = write_wordlist(&["a"]);
        let runner = FuzzRunner::new(config("http://x/FUZZ".to_string(), &wl)).unwrap();

        assert!(runner.should_emit(&result(404, 10, 1)));
    }

    #[test]
    fn test_status_filter_suppresses_match() {
        let wl = write_wordlist(&["a"]);
        let mut cfg = config("http://x/FUZZ".to_string(), &wl);
        cfg.filter_code = Some(vec![404]);
        let runner = FuzzRunner::new(cfg).unwrap();

        assert!(!runner.should_emit(&result(404, 10, 1)));
        assert!(runner.should_emit(&result(200, 10, 1)));
    }

    #[test]
    fn test_length_filter_emits_on_mismatch() {
        let wl = write_wordlist(&["a"]);
        let mut cfg = config("http://x/FUZZ".to_string(), &wl);
        cfg.filter_length = Some(5);
        let runner = FuzzRunner::new(cfg).unwrap();

        assert!(runner.should_emit(&result(200, 10, 4)));
        assert!(!runner.should_emit(&result(200, 10, 5)));
    }

    #[test]
    fn test_size_filter_emits_on_mismatch() {
        let wl = write_wordlist(&["a"]);
        let mut cfg = config("http://x/FUZZ".to_string(), &wl);
        cfg.filter_size = Some(100);
        let runner = FuzzRunner::new(cfg).unwrap();

        assert!(runner.should_emit(&result(200, 99, 1)));
        assert!(!runner.should_emit(&result(200, 100, 1)));
    }

    #[test]
    fn test_combined_filters_status_match_falls_through() {
        let wl = write_wordlist(&["a"]);
        let mut cfg = config("http://x/FUZZ".to_string(), &wl);
        cfg.filter_code = Some(vec![404]);
        cfg.filter_length = Some(5);
        let runner = FuzzRunner::new(cfg).unwrap();

        // Status matches the blacklist but the line count differs, so the
        // length branch emits.
        assert!(runner.should_emit(&result(404, 10, 4)));
        // Every configured filter matches: suppressed.
        assert!(!runner.should_emit(&result(404, 10, 5)));
    }

    #[test]
    fn test_combined_filters_suppress_only_full_match() {
        let wl = write_wordlist(&["a"]);
        let mut cfg = config("http://x/FUZZ".to_string(), &wl);
        cfg.filter_code = Some(vec![404]);
        cfg.filter_length = Some(5);
        cfg.filter_size = Some(100);
        let runner = FuzzRunner::new(cfg).unwrap();

        assert!(!runner.should_emit(&result(404, 100, 5)));
        assert!(runner.should_emit(&result(404, 99, 5)));
        assert!(runner.should_emit(&result(404, 100, 4)));
        assert!(runner.should_emit(&result(200, 100, 5)));
    }

    #[tokio::test]
    async fn test_run_emits_every_word_without_filters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).body("ok");
            })
            .await;

        let wl = write_wordlist(&["admin", "login", "", "  "]);
        let runner =
            FuzzRunner::new(config(server.url("/FUZZ"), &wl)).unwrap();
        let stats = runner.run().await.unwrap();

        assert_eq!(stats.words_processed, 2);
        assert_eq!(stats.emitted, 2);
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_run_suppresses_blacklisted_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin");
                then.status(404).body("not found");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/login");
                then.status(200).body("ok");
            })
            .await;

        let wl = write_wordlist(&["admin", "login"]);
        let mut cfg = config(server.url("/FUZZ"), &wl);
        cfg.filter_code = Some(vec![404]);
        let runner = FuzzRunner::new(cfg).unwrap();
        let stats = runner.run().await.unwrap();

        assert_eq!(stats.words_processed, 2);
        assert_eq!(stats.emitted, 1);
    }

    #[tokio::test]
    async fn test_run_appends_results_to_output_file() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).body("a\nb");
            })
            .await;

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("results.txt");

        let wl = write_wordlist(&["admin"]);
        let mut cfg = config(server.url("/FUZZ"), &wl);
        cfg.output = Some(out.to_str().unwrap().to_string());
        let runner = FuzzRunner::new(cfg).unwrap();
        runner.run().await.unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        assert_eq!(contents, "admin      [Status: 200 Size: 3 Lines: 2]\n");
    }

    #[tokio::test]
    async fn test_run_substitutes_headers_per_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).header("X-Key", "abc-val");
                then.status(200);
            })
            .await;

        let wl = write_wordlist(&["abc"]);
        let mut cfg = config(server.url("/FUZZ"), &wl);
        let mut headers = HashMap::new();
        headers.insert("X-Key".to_string(), "{}-val".to_string());
        cfg.headers = Some(headers);
        let runner = FuzzRunner::new(cfg).unwrap();
        runner.run().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_aborts_on_first_request_error() {
        // Nothing listens on port 1; the first request fails and the run
        // stops before the second word is ever attempted.
        let wl = write_wordlist(&["first", "second"]);
        let runner =
            FuzzRunner::new(config("http://127.0.0.1:1/FUZZ".to_string(), &wl)).unwrap();
        let stats = runner.run().await.unwrap();

        assert_eq!(stats.words_processed, 1);
        assert_eq!(stats.emitted, 0);
    }
}
