/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Hours color:
/// mismatch → red
/// over threshold → yellow
/// zero → grey
pub fn color_for_delay(hours: Option<f64>, threshold: f64) -> &'static str {
    match hours {
        None => RED,
        Some(h) if h > threshold => YELLOW,
        Some(h) if h == 0.0 => GREY,
        Some(_) => RESET,
    }
}
