use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

/// Cinder language interpreter and C translator.
///
/// Runs Cinder programs directly and translates them to equivalent C
/// source. Reads `cinder.toml` from the program's directory or any parent.
///
/// EXAMPLES:
///     cinder run prog.cin                Interpret a program
///     cinder run prog.cin --emit out     Interpret, then write out.c
///     cinder emit prog.cin               Print the C translation
///     cinder ast prog.cin                Dump the syntax tree as JSON
///
/// ENVIRONMENT VARIABLES:
///     CINDER_EMIT         Emit target base path (same as --emit)
///     Code                Legacy spelling of CINDER_EMIT
///     CINDER_DIAGNOSTICS  Set to 'json' for JSON diagnostics by default
///     CINDER_LOG          Log level (error, warn, info, debug, trace)
///     NO_COLOR            Set to disable colored output
#[derive(Parser)]
#[command(name = "cinder")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write log events to stderr as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Cinder program
    ///
    /// Interprets the program, reading `rd` input from stdin and printing
    /// `wr` output to stdout. With an emit target the C translation is
    /// written afterwards to `<BASE>.c`.
    ///
    /// EXAMPLES:
    ///     cinder run prog.cin                  Run a program
    ///     cinder run prog.cin --emit build/p   Also write build/p.c
    ///     cinder run prog.cin --emit p --no-run
    ///     cinder run prog.cin --json           Diagnostics as JSON
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Cinder source file
        file: PathBuf,
        /// Write the C translation to <BASE>.c
        #[arg(long, value_name = "BASE")]
        emit: Option<PathBuf>,
        /// Skip interpretation (requires an emit target)
        #[arg(long)]
        no_run: bool,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Translate a Cinder program to C without running it
    ///
    /// EXAMPLES:
    ///     cinder emit prog.cin             Print C to stdout
    ///     cinder emit prog.cin -o build/p  Write build/p.c
    #[command(visible_alias = "e")]
    Emit {
        /// Path to the Cinder source file
        file: PathBuf,
        /// Write to <BASE>.c instead of stdout
        #[arg(long, short = 'o', value_name = "BASE")]
        output: Option<PathBuf>,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Dump the token stream to JSON
    Tokens {
        /// Path to the Cinder source file
        file: PathBuf,
    },

    /// Dump the syntax tree to JSON
    ///
    /// EXAMPLES:
    ///     cinder ast prog.cin              Print AST
    ///     cinder ast prog.cin > ast.json   Save to file
    Ast {
        /// Path to the Cinder source file
        file: PathBuf,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     cinder completions bash > ~/.local/share/bash-completion/completions/cinder
    ///     cinder completions zsh > ~/.zfunc/_cinder
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    logging::init(cli.verbose, cli.log_json, cli_config.log_level.as_deref());

    match cli.command {
        Commands::Run {
            file,
            emit,
            no_run,
            json,
        } => {
            let args = commands::run::RunArgs { emit, no_run, json };
            commands::run::run(&file, args, &cli_config)?;
        }
        Commands::Emit { file, output, json } => {
            commands::emit::run(&file, output, json, &cli_config)?;
        }
        Commands::Tokens { file } => {
            commands::tokens::run(&file)?;
        }
        Commands::Ast { file } => {
            commands::ast::run(&file)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cinder", &mut io::stdout());
        }
    }

    Ok(())
}
