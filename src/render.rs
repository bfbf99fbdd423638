//! Terminal rendering of decoded manager responses.

use serde::Deserialize;
use serde_json::Value;

use crate::cli::Command;

/// Log payload shape served by /control/logs.
#[derive(Debug, Deserialize)]
struct LogLines {
    lines: Vec<String>,
}

pub fn render(command: &Command, payload: &Value) {
    match command {
        Command::Logs { .. } => render_logs(payload),
        _ => print_json(payload),
    }
}

fn render_logs(payload: &Value) {
    // Anything that is not {"lines": [string, ...]} is shown as plain JSON.
    match LogLines::deserialize(payload) {
        Ok(logs) => {
            for line in &logs.lines {
                println!("{line}");
            }
        }
        Err(_) => print_json(payload),
    }
}

fn print_json(payload: &Value) {
    match serde_json::to_string_pretty(payload) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{payload}"),
    }
}
