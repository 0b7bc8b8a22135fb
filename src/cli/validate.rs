//! Validate command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_options_file, ConfigError};
use crate::validate::{self, Severity, ValidationIssue};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Issues found in one option file
fn check_file(path: &Path) -> Result<Vec<ValidationIssue>, ConfigError> {
    match load_options_file(path) {
        Ok(options) => Ok(validate::check(&options.resolve())),
        Err(ConfigError::Json(e)) => Ok(vec![validate::options_issue(&e)]),
        Err(e) => Err(e),
    }
}

/// Execute the validate command
pub fn run_validate(files: &[PathBuf], json: bool) -> ExitCode {
    let mut results = Vec::new();

    for path in files {
        match check_file(path) {
            Ok(issues) => results.push((path, issues)),
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    let count = |severity: Severity| {
        results.iter().flat_map(|(_, issues)| issues).filter(|i| i.severity == severity).count()
    };
    let error_count = count(Severity::Error);
    let warning_count = count(Severity::Warning);

    if json {
        let files: Vec<_> = results
            .iter()
            .map(|(path, issues)| {
                serde_json::json!({
                    "file": path.display().to_string(),
                    "valid": !validate::has_errors(issues),
                    "issues": issues.iter().map(|i| serde_json::json!({
                        "severity": i.severity.to_string(),
                        "type": i.issue_type.to_string(),
                        "field": i.field,
                        "message": i.message,
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        let output = serde_json::json!({ "valid": error_count == 0, "files": files });
        println!("{}", output);
    } else {
        for (path, issues) in &results {
            for issue in issues {
                println!("{}: {}", path.display(), issue);
            }
        }

        match (error_count, warning_count) {
            (0, 0) => println!("No issues found."),
            (0, w) => println!("Found {} warning{}.", w, if w == 1 { "" } else { "s" }),
            (e, 0) => println!("Found {} error{}.", e, if e == 1 { "" } else { "s" }),
            (e, w) => println!(
                "Found {} error{}, {} warning{}.",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }
    }

    if error_count > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
