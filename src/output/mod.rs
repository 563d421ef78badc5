mod render;
mod report;

pub use render::{render_json, render_text};
pub use report::write_run_report;
