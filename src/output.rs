//! CLI diagnostics formatting.
//!
//! Every file gets a header line naming source and destination, and images
//! get an indented outcome line once they are written:
//!
//! ```text
//! Copying textures/LICENSE.txt to small/LICENSE.txt
//! Processing textures/bark.jpg to small/bark.jpg
//!     resized 4096x4096 → 2048x2048
//! Processing textures/leaves.png to small/leaves.png
//!     unchanged 1024x1024
//! Processing textures/normal.png to small/normal.png
//!     copied oversized PNG 8192x8192 (lossless = "copy")
//!
//! Done: 1 resized, 1 unchanged, 1 copied, 1 oversized PNG kept (4 total)
//! ```
//!
//! Format functions are pure and return `Vec<String>`; the `print_*` wrappers
//! write to stderr, keeping stdout free for `--gen-config`.

use crate::convert::{Action, ConvertEvent, ConvertReport};
use crate::imaging::Dimensions;

fn size(dims: Dimensions) -> String {
    format!("{}x{}", dims.width, dims.height)
}

fn outcome(action: &Action) -> String {
    match action {
        Action::Copied => "copied".to_string(),
        Action::Unchanged(dims) => format!("unchanged {}", size(*dims)),
        Action::Resized { from, to } => format!("resized {} \u{2192} {}", size(*from), size(*to)),
        Action::KeptOversized(dims) => {
            format!("copied oversized PNG {} (lossless = \"copy\")", size(*dims))
        }
    }
}

/// Format a single conversion event as display lines.
pub fn format_convert_event(event: &ConvertEvent) -> Vec<String> {
    match event {
        ConvertEvent::Copying { source, output } => {
            vec![format!("Copying {} to {}", source.display(), output.display())]
        }
        ConvertEvent::Processing { source, output } => vec![format!(
            "Processing {} to {}",
            source.display(),
            output.display()
        )],
        ConvertEvent::Processed { action, .. } => vec![format!("    {}", outcome(action))],
    }
}

/// Format the end-of-run summary.
pub fn format_report(report: &ConvertReport) -> Vec<String> {
    vec![String::new(), format!("Done: {}", report)]
}

/// Print a conversion event to stderr.
pub fn print_convert_event(event: &ConvertEvent) {
    for line in format_convert_event(event) {
        eprintln!("{}", line);
    }
}

/// Print the end-of-run summary to stderr.
pub fn print_report(report: &ConvertReport) {
    for line in format_report(report) {
        eprintln!("{}", line);
    }
}
