//! Line formatting and the raw ANSI escape sequences the registry emits.
//!
//! The sequences are fixed; there is no capability negotiation. An
//! ANSI-escape-capable terminal is assumed.

/// Clear the screen and home the cursor. Emitted exactly once, on the
/// first render process-wide.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Width of the `=`/`.` bar segment in every rendered line.
pub const BAR_WIDTH: usize = 30;

/// Move the cursor down `rows` lines from its current position.
pub fn cursor_down(rows: usize) -> String {
    format!("\x1b[{rows}B")
}

/// Move the cursor to column 0 of `row`. Rows are zero-based internally
/// and one-based on the wire.
pub fn cursor_to_row(row: usize) -> String {
    format!("\x1b[{};0H", row + 1)
}

/// Formats one bar line: `label[percent% ===>... ~ status]`, with `>`
/// separating the filled segment from the remaining one.
pub fn format_line(label: &str, percent: i32, status: &str) -> String {
    let (filled, remaining) = bar_segments(percent);
    format!(
        "{label}[{percent}% {}>{} ~ {status}]",
        "=".repeat(filled),
        ".".repeat(remaining),
    )
}

/// Splits [`BAR_WIDTH`] into filled and remaining counts. Out-of-range
/// percents fall through to an empty bar; the line still carries the
/// percent number and status text.
fn bar_segments(percent: i32) -> (usize, usize) {
    match percent {
        0 => (0, BAR_WIDTH),
        100 => (BAR_WIDTH, 0),
        p if p > 0 && p < 100 => {
            let filled = p as usize * BAR_WIDTH / 100;
            (filled, BAR_WIDTH - filled)
        }
        _ => (0, 0),
    }
}
