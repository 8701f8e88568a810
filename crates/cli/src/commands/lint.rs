use crate::OutputFormat;
use anyhow::{Context as _, Result};
use colored::Colorize;
use gqlint_linter::{find_config, load_config, LintConfig, Linter, Severity};
use std::path::{Path, PathBuf};
use std::process;

/// File extensions treated as GraphQL documents
const GRAPHQL_EXTENSIONS: &[&str] = &["graphql", "graphqls", "gql"];

/// Diagnostic output structure for collecting warnings and errors
struct DiagnosticOutput {
    file_path: String,
    line: usize,
    column: usize,
    end_line: usize,
    end_column: usize,
    message: String,
    severity: String,
    rule: Option<String>,
}

pub fn run(config_path: Option<PathBuf>, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let start_time = std::time::Instant::now();

    let config = resolve_config(config_path.as_deref())?;

    let files = collect_files(paths)?;
    if files.is_empty() {
        anyhow::bail!("no GraphQL files found in the given paths");
    }
    tracing::debug!(files = files.len(), "Collected files to lint");

    let linter = Linter::new(config);

    let mut all_warnings = Vec::new();
    let mut all_errors = Vec::new();

    for file in &files {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read '{}'", file.display()))?;

        for diag in linter.lint_source(&source, &file.to_string_lossy()) {
            let severity_string = match diag.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Information => "info",
                Severity::Hint => "hint",
            }
            .to_string();

            let diag_output = DiagnosticOutput {
                file_path: file.to_string_lossy().into(),
                // Convert from 0-based to 1-based for display
                line: diag.range.start.line + 1,
                column: diag.range.start.character + 1,
                end_line: diag.range.end.line + 1,
                end_column: diag.range.end.character + 1,
                message: diag.message,
                severity: severity_string,
                rule: diag.code,
            };

            match diag.severity {
                Severity::Warning | Severity::Information | Severity::Hint => {
                    all_warnings.push(diag_output);
                }
                Severity::Error => all_errors.push(diag_output),
            }
        }
    }

    let total_warnings = all_warnings.len();
    let total_errors = all_errors.len();

    match format {
        OutputFormat::Human => {
            for warning in &all_warnings {
                println!(
                    "\n{}:{}:{}: {} {}",
                    warning.file_path,
                    warning.line,
                    warning.column,
                    "warning:".yellow().bold(),
                    warning.message.yellow()
                );
                if let Some(ref rule) = warning.rule {
                    println!("  {}: {}", "rule".dimmed(), rule.dimmed());
                }
            }

            for error in &all_errors {
                println!(
                    "\n{}:{}:{}: {} {}",
                    error.file_path,
                    error.line,
                    error.column,
                    "error:".red().bold(),
                    error.message.red()
                );
                if let Some(ref rule) = error.rule {
                    println!("  {}: {}", "rule".dimmed(), rule.dimmed());
                }
            }
        }
        OutputFormat::Json => {
            for diag in all_warnings.iter().chain(all_errors.iter()) {
                println!(
                    "{}",
                    serde_json::json!({
                        "file": diag.file_path,
                        "severity": diag.severity,
                        "rule": diag.rule,
                        "message": diag.message,
                        "location": {
                            "start": {
                                "line": diag.line,
                                "column": diag.column
                            },
                            "end": {
                                "line": diag.end_line,
                                "column": diag.end_column
                            }
                        }
                    })
                );
            }
        }
    }

    // Summary
    if matches!(format, OutputFormat::Human) {
        println!();
        if total_errors == 0 && total_warnings == 0 {
            println!("{}", "✓ No linting issues found!".green().bold());
        } else if total_errors == 0 {
            println!(
                "{}",
                format!("✓ Linting passed with {total_warnings} warning(s)")
                    .yellow()
                    .bold()
            );
        } else if total_warnings == 0 {
            println!("{}", format!("✗ Found {total_errors} error(s)").red());
        } else {
            println!(
                "{}",
                format!("✗ Found {total_errors} error(s) and {total_warnings} warning(s)").red()
            );
        }
        println!(
            "  {} {} file(s) in {:.2}s",
            "⏱".dimmed(),
            files.len(),
            start_time.elapsed().as_secs_f64()
        );
    }

    if total_errors > 0 {
        process::exit(1);
    }

    Ok(())
}

/// Resolve the lint config: explicit path, upward search, or the
/// recommended preset as a fallback
fn resolve_config(config_path: Option<&Path>) -> Result<LintConfig> {
    if let Some(path) = config_path {
        return load_config(path).with_context(|| format!("failed to load '{}'", path.display()));
    }

    let cwd = std::env::current_dir()?;
    match find_config(&cwd) {
        Some(found) => {
            load_config(&found).with_context(|| format!("failed to load '{}'", found.display()))
        }
        None => {
            tracing::debug!("No config file found, using recommended preset");
            Ok(LintConfig::recommended())
        }
    }
}

/// Expand the given paths into a sorted, deduplicated list of GraphQL files
///
/// Files are taken as-is, directories are walked recursively, and anything
/// else is treated as a glob pattern.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(Result::ok)
            {
                if entry.file_type().is_file() && has_graphql_extension(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            let pattern = path.to_string_lossy();
            for entry in glob::glob(&pattern)
                .with_context(|| format!("invalid glob pattern '{pattern}'"))?
            {
                let matched = entry?;
                if matched.is_file() {
                    files.push(matched);
                }
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn has_graphql_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| GRAPHQL_EXTENSIONS.contains(&ext))
}
