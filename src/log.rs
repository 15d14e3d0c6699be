use chrono::{Local, SecondsFormat};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::OnceLock;

static LOG_FILE: OnceLock<Option<String>> = OnceLock::new();

/// Sets the file every line is appended to. Only the first call has an effect.
pub fn init(path: Option<String>) {
    let _ = LOG_FILE.set(path);
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
}

pub(crate) fn format_line(level: &str, msg: &str) -> String {
    format!("[{}] {}: {}\n", timestamp(), level, msg)
}

pub(crate) fn format_scalar(tick: u64, name: &str, value: i64) -> String {
    format!("[{}] SCALAR tick={} name={} value={}\n", timestamp(), tick, name, value)
}

// stdout always, log file when configured; a failed write never stops the game
fn emit(line: &str) {
    print!("{line}");
    if let Some(Some(path)) = LOG_FILE.get() {
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = f.write_all(line.as_bytes());
        }
    }
}

pub fn info(msg: &str) {
    emit(&format_line("INFO", msg));
}

pub fn warn(msg: &str) {
    emit(&format_line("WARN", msg));
}

pub fn error(msg: &str) {
    emit(&format_line("ERROR", msg));
}

/// Numeric event in a grep-friendly form, e.g. score after each meal.
pub fn scalar(tick: u64, name: &str, value: i64) {
    emit(&format_scalar(tick, name, value));
}
