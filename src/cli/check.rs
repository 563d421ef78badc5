use crate::cli::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::discovery::discover_files;
use crate::output::{render_json, render_text, write_run_report};
use crate::runner::{check_paths, plan_file};
use crate::tool::create_analyzer;
use chrono::Local;
use std::path::PathBuf;
use tracing::{error, info, warn};

pub async fn execute(args: CheckArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }
    if args.dry_run {
        config.dry_run = true;
    }

    if config.dry_run {
        config.validate()?;
        let files = discover_files(&config.target, &args.paths, &config.sources)?;
        info!("DRY RUN - the analyzer will not be invoked");
        print_execution_plan(&config, &files);
        return Ok(());
    }

    let analyzer = create_analyzer(&config);
    let report = check_paths(&config, &args.paths, analyzer).await?;

    let collection = report.collection();
    match args.format {
        OutputFormat::Text => print!("{}", render_text(collection.iter())),
        OutputFormat::Json => println!("{}", render_json(collection.iter())?),
    }

    for failed in report.failed() {
        warn!("{}: {}", failed.file.display(), failed.status);
    }

    if !args.no_report {
        // Dated report directory (reports/YYYY-MM-DD/)
        let date_str = Local::now().format("%Y-%m-%d").to_string();
        let report_dir = config.report_dir.join(&date_str);
        if let Err(e) = write_run_report(&report_dir, &report) {
            warn!("Failed to write report: {}", e);
        } else {
            info!("Wrote report to {:?}", report_dir);
        }
    }

    let counts = collection.counts();
    info!(
        "Completed in {:.1}s: {} errors, {} warnings, {} hints across {} files",
        report.total_duration.as_secs_f64(),
        counts.errors,
        counts.warnings,
        counts.hints,
        collection.len()
    );

    if args.fail_on_error && counts.errors > 0 {
        error!("Exiting with error: {} error diagnostics", counts.errors);
        std::process::exit(1);
    }

    Ok(())
}

fn print_execution_plan(config: &Config, files: &[PathBuf]) {
    println!("\n=== Execution Plan ===\n");
    println!("Target: {:?}", config.target);
    println!("Tool: {:?}", config.tool.binary);
    println!("Concurrency: {}", config.concurrency);
    println!("Report dir: {:?}", config.report_dir);

    println!("\nFiles:");
    for file in files {
        match plan_file(config, file) {
            Ok(standard) => println!("  - {} (-std={})", file.display(), standard),
            Err(reason) => println!("  - {} [SKIP - {}]", file.display(), reason),
        }
    }
    println!();
}
