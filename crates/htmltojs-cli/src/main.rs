//! htmltojs CLI
//!
//! Reads HTML from a file or stdin and writes the JavaScript that rebuilds it.

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use htmltojs::{Filter, HtmlToJs, HtmlToJsOptions, TagSet};

#[derive(Debug, Parser)]
#[command(name = "htmltojs", version, about, disable_version_flag = true)]
struct Cli {
    /// Output version information and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Specify the input file name. Stdin is read when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Specify the output file name. Stdout is written when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Specify a default appending target element.
    #[arg(short = 'p', long, default_value = "document.body")]
    default_parent: String,

    /// Prefix of generated variable names
    #[arg(long, default_value = "_")]
    prefix: String,

    /// Only emit these tags (comma separated)
    #[arg(long, value_delimiter = ',')]
    include: Option<Vec<String>>,

    /// Never emit these tags (comma separated, replaces the defaults)
    #[arg(long, value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Do not walk into these tags (comma separated, replaces the defaults)
    #[arg(long, value_delimiter = ',')]
    ignore: Option<Vec<String>>,

    /// Emit text that has no emitted parent element
    #[arg(long)]
    keep_root_text: bool,

    /// Log debug output to stderr
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> HtmlToJsOptions {
        let mut options = HtmlToJsOptions {
            prefix: self.prefix.clone(),
            default_parent: self.default_parent.clone(),
            keep_root_text: self.keep_root_text,
            ..Default::default()
        };

        let filters = &mut options.filters;
        replace_tags(&mut filters.includes, self.include.as_deref());
        replace_tags(&mut filters.excludes, self.exclude.as_deref());
        replace_tags(&mut filters.ignores, self.ignore.as_deref());
        options
    }
}

fn replace_tags(set: &mut TagSet, tags: Option<&[String]>) {
    if let Some(tags) = tags {
        set.set(
            tags.iter()
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty()),
        );
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("htmltojs error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None if io::stdin().is_terminal() => {
            bail!("no input: pass --input <FILE> or pipe HTML on stdin")
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let mut converter = HtmlToJs::with_options(cli.options());
    converter.parse(reader)?;

    let written = converter.write_to(&mut writer).context("failed to write output")?;
    writer.flush().context("failed to write output")?;
    tracing::debug!(bytes = written, "wrote script");

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HTMLTOJS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
