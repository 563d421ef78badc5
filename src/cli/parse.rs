use crate::cli::{OutputFormat, ParseArgs};
use crate::output::{render_json, render_text};
use crate::parser::parse_report;
use anyhow::Context;
use std::io::Read;

pub fn execute(args: ParseArgs) -> anyhow::Result<()> {
    let bytes = match args.input {
        Some(ref path) if path.as_os_str() != "-" => std::fs::read(path)
            .with_context(|| format!("Failed to read report {}", path.display()))?,
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read report from stdin")?;
            buf
        }
    };

    // Tools echo source excerpts verbatim, which need not be UTF-8
    let raw = String::from_utf8_lossy(&bytes);

    let grouped = parse_report(&raw);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(grouped.iter())),
        OutputFormat::Json => println!("{}", render_json(grouped.iter())?),
    }

    Ok(())
}
