use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kira_gsea_norms::{NormMode, NormParams, logging};

#[derive(Debug, Parser)]
#[command(name = "kira-gsea-norms", version, about = "GSEA score normalization modes")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered normalization modes.
    Strategies {
        #[arg(long)]
        json: bool,
    },
    /// Validate a parameter file and print the resolved parameters.
    Config { path: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli.command) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String, String> {
    match command {
        Command::Strategies { json } => Ok(render_strategies(json)),
        Command::Config { path } => {
            let params = NormParams::from_path(&path).map_err(|e| e.to_string())?;
            tracing::info!(mode = %params.mode, "loaded parameters from {}", path.display());
            serde_json::to_string_pretty(&params).map_err(|e| e.to_string())
        }
    }
}

fn render_strategies(json: bool) -> String {
    let names = NormMode::names();
    if json {
        serde_json::Value::from(names).to_string()
    } else {
        names.join("\n")
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
