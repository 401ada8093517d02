//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_fingerprint` library that
//! handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading URLs from arguments or stdin
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, BufRead};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use serde::Serialize;

use url_fingerprint::{Fingerprint, FingerprintReader, HashAlgorithm, Opt};

/// One line of `--json` output.
#[derive(Serialize)]
struct CaptureRecord<'a> {
    url: &'a str,
    gist: &'a str,
    hash: &'a str,
    algorithm: HashAlgorithm,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    env_logger::Builder::new()
        .filter_level(opt.log_level.clone().into())
        .init();

    let config = opt.to_config().context("Invalid configuration")?;
    let reader = FingerprintReader::new(config);

    let urls = if opt.urls.is_empty() {
        read_urls_from_stdin()?
    } else {
        opt.urls.clone()
    };

    let mut failed = 0usize;
    for url in &urls {
        match reader.capture(url) {
            Ok(fingerprint) => print_capture(url, &fingerprint, opt.json)?,
            Err(e) => {
                warn!("Skipping invalid URL: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!(
            "url-fingerprint: {failed} of {} URL{} could not be fingerprinted",
            urls.len(),
            if urls.len() == 1 { "" } else { "s" }
        );
        process::exit(1);
    }
    Ok(())
}

/// Reads URLs from stdin, one per line, skipping blank lines and `#`
/// comments.
fn read_urls_from_stdin() -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read line from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}

fn print_capture(url: &str, fingerprint: &Fingerprint, json: bool) -> Result<()> {
    if json {
        let record = CaptureRecord {
            url,
            gist: fingerprint.gist(),
            hash: fingerprint.hash(),
            algorithm: fingerprint.hash_algorithm(),
        };
        println!(
            "{}",
            serde_json::to_string(&record).context("Failed to serialize capture record")?
        );
    } else {
        println!("{}  {}", fingerprint.hash(), url);
    }
    Ok(())
}
