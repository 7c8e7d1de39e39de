use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use mkpasswd::{GenerateError, Generator, Length, Options};

mod options_file;

/// Generate random alphanumeric passwords.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Password length. Fractional lengths count up to the next whole character. [default: 8]
    #[arg(short, long, env = "MKPASSWD_LENGTH", allow_hyphen_values = true)]
    length: Option<String>,
    /// Characters to leave out of the password. Pass an empty string to allow every character.
    /// [default: Il1O0q9covy]
    #[arg(short, long, env = "MKPASSWD_EXCEPT")]
    except: Option<String>,
    /// How many passwords to print, one per line.
    #[arg(short, long, default_value_t = 1)]
    count: usize,
    /// Read `length` and `except` from a YAML or JSON file. Flags given on the command line take
    /// precedence over the file.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
}

impl Args {
    fn options(&self) -> Result<Options, ProgError> {
        let from_file = match self.options.as_deref() {
            Some(path) => options_file::load(path)?,
            None => Options::new(),
        };
        let from_args = Options {
            length: self.length.clone().map(Length::from),
            except: self.except.clone(),
        };
        Ok(from_args.or(from_file).with_defaults())
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    let generator = Generator::new(args.options()?);
    log::debug!("using {:?}", generator);

    let mut stdout = io::stdout().lock();
    for _ in 0..args.count {
        let password = generator.generate()?;
        writeln!(stdout, "{}", password).context("failed to write the password to stdout")?;
    }
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{} {:#}", console::style("error:").red().bold(), err);
        process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
