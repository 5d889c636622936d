//! slovo CLI entry point.
//!
//! Provides command-line tools for working with phrase corpora:
//! - `slovo import` - Build the dictionary and vocabulary from phrase modules
//! - `slovo render` - Render a template against a stored dictionary
//! - `slovo check` - Compile templates and report errors
//! - `slovo words` - List dictionary entries

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_import, run_render, run_words, CheckArgs, ImportArgs, RenderArgs, WordsArgs,
};
use env_logger::Env;

/// Inflected phrase corpus tools.
#[derive(Debug, Parser)]
#[command(name = "slovo")]
#[command(about = "Inflected phrase corpus tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import phrase modules into the dictionary and vocabulary stores
    Import(ImportArgs),
    /// Render a template or a random phrase of a type
    Render(RenderArgs),
    /// Compile templates and report errors
    Check(CheckArgs),
    /// List dictionary entries
    Words(WordsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Import(args) => run_import(args),
        Commands::Render(args) => run_render(args),
        Commands::Check(args) => run_check(args),
        Commands::Words(args) => run_words(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
