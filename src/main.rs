use std::fs;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use symcalc::{
    error::Error,
    interpreter::session::{Session, SessionConfig},
};

/// symcalc simplifies symbolic expressions and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells symcalc to read inputs from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Wraps every operator chain of the output in parentheses.
    #[arg(short = 'p', long)]
    force_parentheses: bool,

    /// Prints the parsed expression without evaluating it.
    #[arg(short, long)]
    raw: bool,

    /// Defines a name or function before running, e.g. `f(x) = x ^ 2`.
    #[arg(short, long = "define", value_name = "DEF")]
    define: Vec<String>,

    /// Logging verbosity. Overrides `RUST_LOG` when given.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Raises the log level; may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// The level asked for on the command line, if any. Without one, `RUST_LOG`
/// decides.
fn log_level(args: &Args) -> Option<log::LevelFilter> {
    match args.verbose {
        0 => args.log_level.map(Into::into),
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = log_level(&args) {
        logger.filter_level(level);
    }
    logger.init();

    let inputs: Vec<String> = if args.file {
        let text = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    } else {
        vec![args.contents.clone()]
    };

    let mut session = Session::with_config(SessionConfig { force_parentheses: args.force_parentheses,
                                                           ..SessionConfig::default() });

    let mut failed = false;
    for definition in &args.define {
        if let Err(e) = session.define(definition) {
            eprintln!("error: {e}");
            failed = true;
        }
    }

    info!("running {} input(s) with {} definition(s)", inputs.len(), args.define.len());

    for input in &inputs {
        let output: Result<String, Error> = if args.raw {
            session.parse(input)
                   .map(|tree| session.render(&tree, args.force_parentheses))
                   .map_err(Into::into)
        } else {
            session.run(input)
        };

        match output {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("symcalc").chain(argv.iter().copied()))
    }

    #[test]
    fn environment_decides_without_flags() {
        assert_eq!(log_level(&args(&["1 + 1"])), None);
    }

    #[test]
    fn flags_override_the_environment() {
        assert_eq!(log_level(&args(&["--log-level", "debug", "1"])),
                   Some(log::LevelFilter::Debug));
        assert_eq!(log_level(&args(&["-vv", "1"])), Some(log::LevelFilter::Debug));
        assert_eq!(log_level(&args(&["-v", "--log-level", "error", "1"])),
                   Some(log::LevelFilter::Info));
    }
}
