//! Presentation helpers for the binary.

mod output;

pub use output::{exit_code, render_json, render_plain};
