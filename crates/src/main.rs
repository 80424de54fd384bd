// Entry point: program main
// Handles --help, --options, --log and runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use picklist::error::{Error, Result};
use picklist::option::{SelectOption, default_options, load_options};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug, Default)]
struct Args {
    help: bool,
    options: Option<PathBuf>,
    log: Option<PathBuf>,
}

fn print_help() {
    println!("picklist - dropdown select demo for the terminal");
    println!();
    println!("Usage:");
    println!("  picklist [--options <file.json>] [--log <file>]");
    println!();
    println!("Options:");
    println!(
        "  --options <file>  JSON array of {{\"value\": .., \"label\": ..}} objects. Defaults to Option 1..Option 5."
    );
    println!("  --log <file>      Write debug logs to <file>.");
    println!("  --help            Show this help message.");
    println!();
    println!("Keys:");
    println!("  tab/shift-tab focus, ↑/↓ move, enter/space open or select, esc close, q quit.");
    println!("  Click a chip to remove it, click × to clear.");
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut out = Args::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => out.help = true,
            "--options" | "--log" => {
                let Some(val) = args.get(i + 1) else {
                    return Err(Error::Usage(format!("{} requires a value", args[i])));
                };
                if args[i] == "--options" {
                    out.options = Some(PathBuf::from(val));
                } else {
                    out.log = Some(PathBuf::from(val));
                }
                i += 1;
            }
            other => return Err(Error::Usage(format!("unknown argument `{other}`"))),
        }
        i += 1;
    }
    Ok(out)
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

async fn try_main(args: Args) -> Result<String> {
    if let Some(path) = &args.log {
        init_logging(path)?;
    }
    let options: Vec<SelectOption> = match &args.options {
        Some(path) => load_options(path)?,
        None => default_options(),
    };
    log::info!("starting with {} options", options.len());
    let app = picklist::ui::run(options).await?;
    Ok(app.summary())
}

#[tokio::main]
async fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("try `picklist --help`");
            process::exit(2);
        }
    };
    if args.help {
        print_help();
        return;
    }
    match try_main(args).await {
        Ok(summary) => {
            println!("{summary}");
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
