use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use overcheck_cli::args::{CliArgs, OutputFormat};
use overcheck_cli::config::resolve_options;
use overcheck_cli::driver;
use overcheck_cli::reporter::{Reporter, render_json};

/// Exit status codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS_PRESENT: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if OVERCHECK_LOG or RUST_LOG is set (zero cost otherwise).
    overcheck_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let options = resolve_options(&args, &cwd)?;

    if args.list_files_only {
        for file in driver::discover_manifests(&options)? {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let result = driver::check(&options)?;

    match options.format {
        OutputFormat::Json => {
            println!("{}", render_json(&result.diagnostics)?);
        }
        OutputFormat::Text => {
            if !result.diagnostics.is_empty() {
                let pretty = options
                    .pretty
                    .unwrap_or_else(|| std::io::stdout().is_terminal());
                let mut reporter = Reporter::new(pretty).with_base_dir(options.base_dir.clone());
                print!("{}", reporter.render(&result.diagnostics));
            }
        }
    }

    if result.diagnostics.is_empty() {
        std::process::exit(EXIT_SUCCESS);
    }
    std::process::exit(EXIT_DIAGNOSTICS_PRESENT);
}
