// Command-line front end - argument parsing, logging setup and dispatch
// Command logic lives in commands/ where it is tested; this file only wires it up.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::filter::LevelFilter;

use crate::commands::{
    add_dictionary_entry, list_dictionary_entries, open_dictionary_store,
    remove_dictionary_entry, translate_input,
};
use crate::config::{ConfigOverrides, TranslatorConfig};
use crate::translator::{SubstitutionMode, Translator};

/// Offline dictionary-based text translator
#[derive(Debug, Parser)]
#[command(name = "offline-translator", version, about)]
pub struct Cli {
    /// Dictionary JSON file (flat object of term -> translation)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Substitution mode: sequential or single-pass
    #[arg(long, global = true)]
    mode: Option<SubstitutionMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate TEXT, or standard input when TEXT is omitted
    Translate {
        text: Option<String>,
    },
    /// Maintain the dictionary file
    Dict {
        #[command(subcommand)]
        action: DictCommand,
    },
}

#[derive(Debug, Subcommand)]
enum DictCommand {
    /// List all terms
    List,
    /// Add a term or replace its translation
    Add { term: String, translation: String },
    /// Remove a term
    Remove { term: String },
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the fmt subscriber; it also captures records from the `log` macros
fn init_logging(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Binary entry point: parse arguments, resolve config, run the command.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app_root = std::env::current_dir().context("Could not determine application root")?;
    let config = TranslatorConfig::resolve(
        &app_root,
        ConfigOverrides {
            dictionary_path: cli.dictionary,
            mode: cli.mode,
        },
    )?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(execute(cli.command, &config))
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn execute(command: Command, config: &TranslatorConfig) -> anyhow::Result<()> {
    match command {
        Command::Translate { text } => {
            let from_argument = text.is_some();
            let translator = Translator::from_config(config);
            let mut output = translate_input(&translator, text, tokio::io::stdin())
                .await
                .map_err(anyhow::Error::msg)?;
            if from_argument {
                output.push('\n');
            }

            let mut stdout = tokio::io::stdout();
            stdout.write_all(output.as_bytes()).await?;
            stdout.flush().await?;
        }
        Command::Dict { action } => {
            let mut store =
                open_dictionary_store(&config.dictionary_path).map_err(anyhow::Error::msg)?;
            match action {
                DictCommand::List => {
                    for entry in list_dictionary_entries(&store) {
                        println!("{}", entry);
                    }
                }
                DictCommand::Add { term, translation } => {
                    match add_dictionary_entry(&mut store, &term, translation)
                        .map_err(anyhow::Error::msg)?
                    {
                        Some(previous) => println!("Replaced '{}' (was '{}')", term.trim(), previous),
                        None => println!("Added '{}'", term.trim()),
                    }
                }
                DictCommand::Remove { term } => {
                    let removed =
                        remove_dictionary_entry(&mut store, &term).map_err(anyhow::Error::msg)?;
                    println!("Removed '{}' (was '{}')", term, removed);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
