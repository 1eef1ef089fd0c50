use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use corekind::interpreter::report;
use corekind::{Config, Interpreter};
use tracing::info;

/// Evaluate corekind scripts, or start a REPL when given nothing to run
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script to run
    file: Option<PathBuf>,

    /// Evaluate an expression and print its value
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// REPL prompt
    #[arg(long, default_value = ">> ")]
    prompt: String,

    /// REPL history file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let config = Config {
        prompt: cli.prompt,
        history_file: cli.history,
    };
    let mut interp = Interpreter::new();

    if let Some(source) = cli.eval {
        info!("evaluating expression");
        match interp.run(&source) {
            Ok(Some(val)) => println!("{}", interp.inspect(&val)),
            Ok(None) => {}
            Err(err) => bail!("{}", report(&err, &source)),
        }
    } else if let Some(path) = cli.file {
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        info!(path = %path.display(), "running file");
        if let Err(err) = interp.run(&source) {
            bail!("{}: {}", path.display(), report(&err, &source));
        }
    } else {
        corekind::repl::run(&mut interp, &config).context("repl failed")?;
    }
    Ok(())
}
