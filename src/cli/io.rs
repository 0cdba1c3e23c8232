//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one JSON object on stdout, `status` first

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::schema::ValidationErrors;

/// Reads a JSON payload from `path`, or stdin when no path is given
pub fn read_payload(path: Option<&Path>) -> CliResult<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_payload(&text)
}

/// Parses a payload document
pub fn parse_payload(text: &str) -> CliResult<Value> {
    if text.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }
    Ok(serde_json::from_str(text)?)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&json!({
        "status": "ok",
        "data": data
    }))
}

/// Write a validation report to stdout
pub fn write_rejection(errors: &ValidationErrors) -> CliResult<()> {
    write_line(&json!({
        "status": "error",
        "errors": errors
    }))
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
