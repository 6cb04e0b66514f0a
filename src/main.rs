//! sitemark CLI - render a document to HTML on stdout

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitemark::{Options, Theme};

/// Render a sitemark document to HTML.
#[derive(Parser)]
#[command(name = "sitemark", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Escape raw HTML in the document.
    #[arg(long)]
    escape_html: bool,

    /// Emit bare elements without CSS classes.
    #[arg(long)]
    plain: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let input = read_input(cli.input.as_ref())?;
    let options = Options {
        allow_html: !cli.escape_html,
        theme: if cli.plain { Theme::PLAIN } else { Theme::TAILWIND },
    };

    let html = sitemark::render_with_options(&input, &options);
    io::stdout()
        .lock()
        .write_all(html.as_bytes())
        .context("failed to write output")?;

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
