//! `erpnext-check`: validate JSON exports against a DocType.
//!
//! ```text
//! erpnext-check <DocType> <file.json>...
//! ```
//!
//! Each file holds one record or an array of records. Violations are printed
//! one per line; records that pass are also run through the business-rule
//! advisories unless `ERPNEXT_CHECK_ADVISORIES=0`. Exit status is 1 when any
//! record is invalid, 2 on usage or IO errors.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use erpnext_doctypes::CatalogError;
use erpnext_doctypes::catalog::{self, Entry};

const USAGE: &str = "usage: erpnext-check <DocType> <file.json>...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Config {
    advisories: bool,
}

impl Config {
    fn from_env() -> Self {
        let advisories = std::env::var("ERPNEXT_CHECK_ADVISORIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        Self { advisories }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Summary {
    records: usize,
    invalid: usize,
    advisories: usize,
}

fn records(value: Value) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        other => vec![other],
    }
}

/// Check every record in `value`, writing one line per finding.
fn check_value(
    entry: &Entry,
    source: &str,
    value: Value,
    config: Config,
    out: &mut impl Write,
    summary: &mut Summary,
) -> Result<()> {
    for (idx, record) in records(value).iter().enumerate() {
        summary.records += 1;
        let label = format!("{source}#{idx}");

        match entry.validate(record) {
            Ok(()) => {
                writeln!(out, "{label}: ok")?;
                if config.advisories {
                    for advisory in entry.advisories(record)? {
                        summary.advisories += 1;
                        writeln!(out, "{label}: advisory: {advisory}")?;
                    }
                }
            }
            Err(CatalogError::Schema(err)) => {
                summary.invalid += 1;
                for violation in &err.violations {
                    writeln!(out, "{label}: {violation}")?;
                }
            }
            Err(other) => return Err(other.into()),
        }
    }
    Ok(())
}

fn check_file(
    entry: &Entry,
    path: &Path,
    config: Config,
    out: &mut impl Write,
    summary: &mut Summary,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    check_value(entry, &path.display().to_string(), value, config, out, summary)
}

fn run(args: &[String], config: Config, out: &mut impl Write) -> Result<Summary> {
    let [doctype, files @ ..] = args else {
        bail!(USAGE);
    };
    if files.is_empty() {
        bail!(USAGE);
    }

    let entry = catalog::lookup(doctype).with_context(|| {
        let known: Vec<_> = catalog::entries().iter().map(Entry::doctype).collect();
        format!("unknown doctype {doctype:?} (known: {})", known.join(", "))
    })?;

    let mut summary = Summary::default();
    for file in files {
        check_file(entry, Path::new(file), config, out, &mut summary)?;
    }
    Ok(summary)
}

fn main() -> ExitCode {
    erpnext_observability::init_with_default("warn");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env();
    let mut out = io::stdout().lock();

    match run(&args, config, &mut out) {
        Ok(summary) => {
            tracing::info!(
                records = summary.records,
                invalid = summary.invalid,
                advisories = summary.advisories,
                "check finished"
            );
            if summary.invalid == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
