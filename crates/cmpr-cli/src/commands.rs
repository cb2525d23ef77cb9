use std::collections::BTreeSet;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use cmpr_format::StandardFormatter;
use cmpr_report::{DefaultReporter, ReporterConfig};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::*;
use crate::walk;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, config, &cli.format),
        Command::Config(_) => cmd_config(&config, &cli.format),
    }
}

/// Exit status for a finished run: 0 when the documents match, 1 when they
/// differ, 2 when the run itself failed.
pub fn exit_code(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

/// Summary of one document comparison.
#[derive(Debug, Serialize)]
pub struct DiffOutcome {
    pub total: usize,
    pub stored: usize,
    pub truncated: bool,
    pub report: String,
}

pub fn diff_documents(
    left: &Value,
    right: &Value,
    config: ReporterConfig,
    ignore: &BTreeSet<String>,
) -> DiffOutcome {
    let mut reporter = DefaultReporter::<Value>::with_config(StandardFormatter, config);
    let equal = walk::compare(left, right, ignore, &mut reporter);
    debug!(equal, total = reporter.total_diffs(), "comparison finished");
    DiffOutcome {
        total: reporter.total_diffs(),
        stored: reporter.stored_diffs(),
        truncated: reporter.is_truncated(),
        report: reporter.final_report(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReporterConfig> {
    match path {
        Some(path) => {
            let config = ReporterConfig::load(path)?;
            info!(path = %path.display(), "loaded report configuration");
            Ok(config)
        }
        None => Ok(ReporterConfig::default()),
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(value)
}

fn cmd_diff(
    args: DiffArgs,
    mut config: ReporterConfig,
    format: &OutputFormat,
) -> anyhow::Result<ExitCode> {
    if let Some(max_bytes) = args.max_bytes {
        config.max_bytes = max_bytes;
    }
    if let Some(max_lines) = args.max_lines {
        config.max_lines = max_lines;
    }
    config.validate()?;

    let left = read_json(&args.left)?;
    let right = read_json(&args.right)?;
    let ignore: BTreeSet<String> = args.ignore.into_iter().collect();
    let outcome = diff_documents(&left, &right, config, &ignore);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_report(&outcome),
    }

    Ok(if outcome.total == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_report(outcome: &DiffOutcome) {
    if outcome.total == 0 {
        println!("{} No differences.", "✓".green().bold());
        return;
    }
    for line in outcome.report.lines() {
        if line.starts_with("\t-:") {
            println!("{}", line.red());
        } else if line.starts_with("\t+:") {
            println!("{}", line.green());
        } else if line.starts_with("... ") {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line.yellow());
        }
    }
    println!(
        "\n{} difference(s), {} shown",
        outcome.total.to_string().bold(),
        outcome.stored
    );
}

fn cmd_config(config: &ReporterConfig, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    print!("{}", render_config(config, format)?);
    Ok(ExitCode::SUCCESS)
}

fn render_config(config: &ReporterConfig, format: &OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => config.to_toml_string()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn outcome_for_equal_documents() {
        let doc = json!({"a": [1, 2, 3]});
        let outcome = diff_documents(&doc, &doc, ReporterConfig::default(), &BTreeSet::new());
        assert_eq!(outcome.total, 0);
        assert!(!outcome.truncated);
        assert_eq!(outcome.report, "");
    }

    #[test]
    fn outcome_truncates_with_limits() {
        let left = json!((0..100).collect::<Vec<i32>>());
        let right = json!((1..101).collect::<Vec<i32>>());
        let config = ReporterConfig {
            max_bytes: 4096,
            max_lines: 9,
        };
        let outcome = diff_documents(&left, &right, config, &BTreeSet::new());
        assert_eq!(outcome.total, 100);
        assert_eq!(outcome.stored, 3);
        assert!(outcome.truncated);
        assert!(outcome.report.starts_with("[0]:\n\t-: 0\n\t+: 1\n"));
        assert!(outcome.report.ends_with("... 97 more differences ..."));
    }

    #[test]
    fn outcome_serializes_for_json_output() {
        let outcome = diff_documents(
            &json!({"x": 1}),
            &json!({"x": 2}),
            ReporterConfig::default(),
            &BTreeSet::new(),
        );
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["truncated"], false);
        assert_eq!(value["report"], ".x:\n\t-: 1\n\t+: 2\n");
    }

    #[test]
    fn reads_json_files() {
        let file = write_temp(r#"{"k": [true, null]}"#);
        let value = read_json(file.path()).unwrap();
        assert_eq!(value, json!({"k": [true, null]}));
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let file = write_temp("{not json");
        let err = read_json(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn config_file_and_default() {
        assert_eq!(load_config(None).unwrap(), ReporterConfig::default());

        let file = write_temp("max_bytes = 128\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.max_bytes, 128);
        assert_eq!(config.max_lines, cmpr_report::DEFAULT_MAX_LINES);
    }

    #[test]
    fn diff_command_runs_on_files() {
        let left = write_temp(r#"{"a": 1}"#);
        let same = write_temp(r#"{"a": 1}"#);
        let other = write_temp(r#"{"a": 2}"#);
        let args = |right: &tempfile::NamedTempFile| DiffArgs {
            left: left.path().to_path_buf(),
            right: right.path().to_path_buf(),
            max_bytes: None,
            max_lines: Some(30),
            ignore: Vec::new(),
        };

        let same = cmd_diff(args(&same), ReporterConfig::default(), &OutputFormat::Json).unwrap();
        let other = cmd_diff(args(&other), ReporterConfig::default(), &OutputFormat::Text).unwrap();
        assert_eq!(same, ExitCode::SUCCESS);
        assert_eq!(other, ExitCode::from(1));
    }

    #[test]
    fn failed_run_exits_with_two() {
        assert_eq!(exit_code(Ok(ExitCode::SUCCESS)), ExitCode::SUCCESS);
        assert_eq!(exit_code(Ok(ExitCode::from(1))), ExitCode::from(1));
        assert_eq!(exit_code(Err(anyhow::anyhow!("no such file"))), ExitCode::from(2));
    }

    #[test]
    fn config_command_prints_parseable_toml() {
        let config = ReporterConfig {
            max_bytes: 512,
            max_lines: 12,
        };
        let text = render_config(&config, &OutputFormat::Text).unwrap();
        assert_eq!(ReporterConfig::from_toml_str(&text).unwrap(), config);

        let json = render_config(&config, &OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["max_lines"], 12);

        assert_eq!(cmd_config(&config, &OutputFormat::Text).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn diff_command_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = DiffArgs {
            left: dir.path().join("left.json"),
            right: dir.path().join("right.json"),
            max_bytes: None,
            max_lines: None,
            ignore: Vec::new(),
        };
        let err = cmd_diff(args, ReporterConfig::default(), &OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn diff_command_rejects_zero_limit() {
        let file = write_temp("{}");
        let args = DiffArgs {
            left: file.path().to_path_buf(),
            right: file.path().to_path_buf(),
            max_bytes: Some(0),
            max_lines: None,
            ignore: Vec::new(),
        };
        assert!(cmd_diff(args, ReporterConfig::default(), &OutputFormat::Text).is_err());
    }
}
