mod clipboard;
mod command;
mod config;
mod error;
mod session;

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use pwgen_lib::policy::{handle_request, GenerationResult};

use crate::clipboard::{copy_or_warn, ClipboardSink, SystemClipboard};
use crate::config::{get_config, write_config, Config};
use crate::error::CliError;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(version, about = "Generate strong random passwords")]
struct Args {
    /// Password length (8 to 128)
    #[arg(short, long, value_name = "length")]
    length: Option<usize>,

    /// Exclude lowercase letters (a-z)
    #[arg(long, default_value_t = false)]
    no_lower: bool,

    /// Exclude uppercase letters (A-Z)
    #[arg(long, default_value_t = false)]
    no_upper: bool,

    /// Exclude numbers (0-9)
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude symbols (!@#$)
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Adjust settings and generate passwords interactively
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Save the effective settings as the new defaults
    #[arg(long, default_value_t = false)]
    save_config: bool,
}

impl Args {
    /// Flags override what the config file says
    fn apply(&self, config: &mut Config) {
        if let Some(length) = self.length {
            config.length = length;
        }
        config.lower &= !self.no_lower;
        config.upper &= !self.no_upper;
        config.digits &= !self.no_digits;
        config.symbols &= !self.no_symbols;
        config.copy |= self.copy;
    }
}

fn save_config(config: &Config) -> Result<(), CliError> {
    let file = write_config(config)?;
    println!("Saved settings to \"{}\"", file.display());
    Ok(())
}

/// Runs the interactive form and folds its final settings back into `config`
fn run_session<R, C, W>(
    config: &mut Config,
    input: R,
    clipboard: &mut C,
    out: &mut W,
) -> std::io::Result<()>
where
    R: BufRead,
    C: ClipboardSink + ?Sized,
    W: Write + ?Sized,
{
    let mut session = Session::new(config.request(), config.copy);
    session.run(input, clipboard, out)?;
    config.set_request(session.request());

    Ok(())
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    let mut config = get_config();
    args.apply(&mut config);

    let mut clipboard = SystemClipboard::new();

    if args.interactive {
        let stdin = std::io::stdin();
        run_session(&mut config, stdin.lock(), &mut clipboard, &mut std::io::stdout())?;

        // Persist what the session ended with, not what it started with
        if args.save_config {
            save_config(&config)?;
        }

        return Ok(ExitCode::SUCCESS);
    }

    if args.save_config {
        save_config(&config)?;
    }

    match handle_request(&config.request()) {
        GenerationResult::Password { password } => {
            println!("{}", password.as_str());
            if config.copy {
                copy_or_warn(&mut clipboard, password.as_str(), &mut std::io::stderr())?;
            }
            Ok(ExitCode::SUCCESS)
        }
        GenerationResult::Error { error_message } => {
            eprintln!("{}", error_message);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("starting with {:?}", args);

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            error!("{}", error);
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
