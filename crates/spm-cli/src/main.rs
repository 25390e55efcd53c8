//! `spm`: decode, encode, inspect and render SPM dialogue scripts

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::RenderSelection;
use config::CliConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "spm", version, about = "SPM dialogue script tool")]
struct Cli {
    /// Settings file (TOML) with `asset_root` and `base_font_size`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat input files as decoded visible text instead of raw game bytes
    #[arg(long, global = true)]
    visible: bool,

    /// Log at debug level (otherwise RUST_LOG, default warn)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert raw game bytes to visible text with [NUL]/[LF]/[CR] markers
    Decode(ConvertArgs),

    /// Convert visible text back to raw game bytes
    Encode(ConvertArgs),

    /// List the bubble blocks of a script
    Parse {
        /// Script file
        input: PathBuf,

        /// Print blocks and parse issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render pages as rich-text markup
    Render {
        /// Script file
        input: PathBuf,

        /// Only this block (0-based)
        #[arg(long)]
        block: Option<usize>,

        /// Only this page of each rendered block (0-based)
        #[arg(long)]
        page: Option<usize>,

        /// Font size in pixels, overriding the config file
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        base_size: Option<u32>,
    },

    /// Report parse issues; exits with status 1 if any is an error
    Check {
        /// Script file
        input: PathBuf,
    },
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Input file
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Decode(args) => commands::decode(&args.input, args.output.as_deref(), &mut out)?,
        Command::Encode(args) => commands::encode(&args.input, args.output.as_deref(), &mut out)?,
        Command::Parse { input, json } => {
            let doc = commands::load_document(&input, cli.visible)?;
            commands::parse(&doc, json, &mut out)?;
        }
        Command::Render {
            input,
            block,
            page,
            base_size,
        } => {
            let config = CliConfig::load(cli.config.as_deref())?.with_base_font_size(base_size);
            let doc = commands::load_document(&input, cli.visible)?;
            commands::render(&doc, &config, RenderSelection { block, page }, &mut out)?;
        }
        Command::Check { input } => {
            let doc = commands::load_document(&input, cli.visible)?;
            if commands::check(&doc, &mut out)? {
                out.flush()?;
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
