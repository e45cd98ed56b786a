//! renredact CLI - redact documents through a rendition backend

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use renredact::{RedactionOptions, RestBackend};

#[derive(Parser)]
#[command(name = "renredact")]
#[command(version)]
#[command(about = "Redact text matching a pattern via a rendition backend", long_about = None)]
struct Cli {
    /// Source document to redact (PDF or archive of documents)
    #[arg(value_name = "FILE")]
    source: PathBuf,

    /// Pattern to redact (regular expression, matched case- and
    /// accent-insensitively)
    #[arg(short, long, value_name = "REGEX")]
    pattern: String,

    /// Rendition backend base URL
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "RENREDACT_BACKEND",
        default_value = "http://localhost:8761"
    )]
    backend: String,

    /// Directory to write redacted output to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Identity recorded as annotation author
    #[arg(long, value_name = "NAME", default_value = "admin")]
    creator: String,

    /// Log traversal and search progress
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> renredact::Result<()> {
    let backend = RestBackend::new(&cli.backend);
    let options = RedactionOptions::new(&cli.pattern, &cli.source)
        .with_output_dir(&cli.output)
        .with_creator(&cli.creator);

    let files = renredact::redact(backend, options)?;

    if files.is_empty() {
        println!("{} no matches found, nothing redacted", "Done.".yellow());
        return Ok(());
    }
    for file in &files {
        println!(
            "{} {} ({} annotations)",
            "Saved to".green(),
            file.path.display(),
            file.annotation_count
        );
    }
    println!(
        "\n{} {} document(s) redacted",
        "Done!".green().bold(),
        files.len()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still wins when set; --verbose only raises the default.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_parses() {
        let cli = Cli::try_parse_from(["renredact", "in.pdf", "-p", "[0-9]+", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["renredact", "in.pdf", "-p", "[0-9]+"]).unwrap();
        assert!(!cli.verbose);
    }
}

