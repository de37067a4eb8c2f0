// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use the_tabulator::config::{load_and_validate_config, Config};
use the_tabulator::{ColumnDescriptor, ExportClient, ExportFormat, ExportOptions, Row};

/// Parsed command line
struct Args {
    rows: PathBuf,
    columns: PathBuf,
    format: ExportFormat,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <rows.json> <columns.json> <csv|excel|pdf> [--config file.yaml] [--out path]\n\
         Example: {program} colleges.json columns.json excel --out colleges.xls"
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("the-tabulator");
    let mut positional = Vec::new();
    let mut config = None;
    let mut out = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a file path")?;
                config = Some(PathBuf::from(path));
            }
            "--out" => {
                let path = iter.next().context("--out needs a file path")?;
                out = Some(PathBuf::from(path));
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let [rows, columns, format] = positional[..] else {
        bail!("{}", usage(program));
    };

    Ok(Args {
        rows: PathBuf::from(rows),
        columns: PathBuf::from(columns),
        format: format.parse()?,
        config,
        out,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    let config = match &args.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => Config::default(),
    };

    let rows: Vec<Row> = read_json(&args.rows)?;
    let columns: Vec<ColumnDescriptor> = read_json(&args.columns)?;

    let client = ExportClient::from_config(&config);
    let options = ExportOptions::new(args.format, rows, columns)
        .on_progress(|message| eprintln!("{message}"));

    let blob = client.run_export(options).await?;
    client.shutdown().await;

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(blob.suggested_file_name("export")));
    fs::write(&out, blob.bytes()).with_context(|| format!("failed to write {}", out.display()))?;

    println!(
        "Wrote {} bytes ({}) to {}",
        blob.len(),
        blob.mime_type(),
        out.display()
    );
    Ok(())
}
