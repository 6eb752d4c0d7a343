/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * docpage CLI - generate the static documentation page.
 */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docpage_core::{DOCS_SOURCE, DocsPage, StaticPage, default_highlighter, load_static_props_from};

#[derive(Parser, Debug)]
#[command(name = "docpage")]
#[command(about = "Render the documentation page from its markdown source")]
struct Args {
    /// Markdown source file (defaults to the fixed docs source path)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(short = 'o', long = "output", default_value = "docs.html")]
    output: PathBuf,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = match args.verbose {
        0 => "docpage=info",
        1 => "docpage=debug,docpage_core=debug",
        _ => "docpage=trace,docpage_core=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The highlighting capability is resolved once, up front, and handed
    // to the page by reference.
    let mut page = DocsPage::new(default_highlighter());
    if let Some(title) = args.title {
        page = page.with_title(title);
    }

    // Build-time data load: a failed read aborts generation for this page.
    let props = match &args.input {
        Some(path) => load_static_props_from(path)?,
        None => page.load()?,
    };

    let html = page.render(&props)?;

    std::fs::write(&args.output, &html)
        .context(format!("Failed to write output file: {:?}", args.output))?;

    // Drop the stylesheet the template links next to the output file.
    let style_path = args
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .join("style.css");
    std::fs::write(&style_path, include_str!("../assets/style.css"))
        .context(format!("Failed to write stylesheet: {:?}", style_path))?;

    tracing::info!(
        input = %args.input.as_deref().map_or(DOCS_SOURCE.into(), |p| p.display().to_string()),
        output = %args.output.display(),
        bytes = html.len(),
        "rendered documentation page"
    );

    Ok(())
}
