//! Console formatting for the final array and elapsed time

use std::fmt::Write;
use std::time::Duration;

/// Format values as `[v0, v1, ..., vN-1]`
pub fn format_bars(bars: &[i32]) -> String {
    let mut text = String::with_capacity(bars.len() * 5 + 2);
    text.push('[');
    for (index, value) in bars.iter().enumerate() {
        if index > 0 {
            text.push_str(", ");
        }
        let _ = write!(text, "{value}");
    }
    text.push(']');
    text
}

/// Format the sort duration in seconds with microsecond precision
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Elapsed time: {:.6} seconds", elapsed.as_secs_f64())
}
