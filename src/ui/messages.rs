//! Coloured status lines for the terminal.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint(ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Style::new().bold().paint(format!("=== {} ===", msg)));
}
