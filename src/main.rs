use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use public_url::{logging, RuleConfig, UrlRule};

/// Check whether URLs are publicly-reachable http(s) URLs.
#[derive(Debug, Parser)]
#[command(name = "public-url", version)]
#[command(about = "Classify URLs as publicly-reachable http(s) or not", long_about = None)]
struct Cli {
    /// URLs to check. Reads one URL per line from stdin when none are given.
    urls: Vec<String>,

    /// Message printed for rejected URLs.
    #[arg(long)]
    message: Option<String>,

    /// TOML rule config file. `--message` takes precedence over its message.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init_logging();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("public-url error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every URL was valid.
fn run(cli: Cli) -> Result<bool> {
    let mut cfg = match &cli.config {
        Some(path) => RuleConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RuleConfig::default(),
    };
    if cli.message.is_some() {
        cfg.message = cli.message;
    }
    let rule = UrlRule::from_config(&cfg);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_valid = true;

    let mut check = |url: &str| -> Result<()> {
        match rule.validate(Some(url)) {
            Ok(()) => writeln!(out, "valid\t{}", url)?,
            Err(err) => {
                all_valid = false;
                writeln!(out, "invalid\t{}\t{}", url, err)?;
            }
        }
        Ok(())
    };

    if cli.urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            check(&line)?;
        }
    } else {
        for url in &cli.urls {
            check(url)?;
        }
    }

    tracing::debug!(all_valid, "finished checking URLs");
    Ok(all_valid)
}
