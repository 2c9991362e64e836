//! Terminal presentation of operation results.

use anyhow::Result;
use colored::Colorize;

use crate::dispatch::{OperationResult, Status};

/// `[SUCCESS] <output>` or `[ERROR] <output>`.
pub fn render(result: &OperationResult) -> String {
    let label = match result.status {
        Status::Success => "SUCCESS",
        Status::Error => "ERROR",
    };
    format!("[{}] {}", label, result.output)
}

pub fn render_json(result: &OperationResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

/// Print `result` to stdout in the selected format.
pub fn print_result(result: &OperationResult, json: bool) -> Result<()> {
    let line = if json { render_json(result)? } else { render(result) };
    println!("{}", line);
    Ok(())
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}
