use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use capimg::api;
use capimg::core::detect::Detection;
use capimg::core::params::GenParams;
use capimg::types::{CapInsets, Interval};

use super::args::{CliArgs, Command};
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Detect {
            source_file,
            json,
            log,
        } => {
            init_logging(log);
            run_detect(&source_file, json)
        }
        Command::Gen {
            source_file,
            capinsets,
            target_directory,
            log,
        } => {
            init_logging(log);
            let insets = capinsets.as_deref().map(|values| match values {
                [top, left, bottom, right] => CapInsets::new(*top, *left, *bottom, *right),
                _ => unreachable!("clap enforces exactly four inset values"),
            });
            let params = GenParams {
                insets,
                target_dir: target_directory,
            };
            run_gen(&source_file, &params)
        }
    }
}

fn init_logging(enabled: bool) {
    if enabled {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
}

/// Expand `~` and shell-style globs in each positional argument.
/// A pattern matching nothing is reported; it is only fatal when no
/// argument matched anything at all.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for pattern in patterns {
        let expanded = shellexpand::tilde(pattern);
        let entries = glob::glob(&expanded).map_err(|source| AppError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut matched = 0usize;
        for entry in entries {
            match entry {
                Ok(path) => {
                    files.push(path);
                    matched += 1;
                }
                Err(e) => warn!("skipping unreadable match: {}", e),
            }
        }
        if matched == 0 {
            eprintln!("'{pattern}' matched no files");
        }
    }

    if files.is_empty() {
        return Err(AppError::NoInputFiles);
    }
    Ok(files)
}

fn run_detect(patterns: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let files = expand_patterns(patterns)?;

    let mut failed = 0usize;
    for path in &files {
        match api::detect_path(path) {
            Ok(detection) => {
                if json {
                    let report = serde_json::json!({
                        "path": path.display().to_string(),
                        "detection": detection,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print_detection(path, &detection);
                }
            }
            Err(e) => {
                println!("******************************************");
                println!("'{}' is not a valid image: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    finish(files.len(), failed)
}

fn run_gen(patterns: &[String], params: &GenParams) -> Result<(), Box<dyn std::error::Error>> {
    let files = expand_patterns(patterns)?;
    fs::create_dir_all(&params.target_dir)?;

    let mut generated = 0usize;
    let mut failed = 0usize;
    for path in &files {
        match api::generate_to_path(path, params) {
            Ok(asset) => {
                println!(
                    "{} -> {} (insets {})",
                    path.display(),
                    asset.output.display(),
                    asset.insets
                );
                generated += 1;
            }
            Err(e) => {
                println!("******************************************");
                println!("failed to process '{}': {}", path.display(), e);
                failed += 1;
            }
        }
    }

    info!("generated: {}, failed: {}", generated, failed);
    finish(files.len(), failed)
}

fn print_detection(path: &Path, detection: &Detection) {
    println!("******************************************");
    println!("Detection for image '{}':", path.display());
    println!("Image size: {}x{}", detection.width, detection.height);
    println!(
        "Repeated row intervals: {}",
        format_intervals(&detection.row_intervals)
    );
    println!("Max row interval: {}", detection.max_row_interval);
    println!(
        "Repeated column intervals: {}",
        format_intervals(&detection.col_intervals)
    );
    println!("Max column interval: {}", detection.max_col_interval);
    println!("Suggested cap insets: {}", detection.insets);
}

fn format_intervals(intervals: &[Interval]) -> String {
    let items: Vec<String> = intervals.iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Per-file failures are non-fatal; exit non-zero only when nothing
/// succeeded.
fn finish(total: usize, failed: usize) -> Result<(), Box<dyn std::error::Error>> {
    if failed > 0 && failed == total {
        return Err(AppError::AllFailed { count: failed }.into());
    }
    Ok(())
}
