#![deny(unused_imports)]

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use uuidgen::rand::RandomDevice;
use uuidgen::Uuid;

const ABOUT_UUIDGEN: &str = "Generate a random RFC 4122 version 4 UUID";

#[derive(Parser)]
#[command(author, version, about = ABOUT_UUIDGEN, long_about = None)]
struct Cli {
    /// Enable debugging
    #[arg(short, long)]
    debug: bool,

    /// Silents out debug, info, error logging.
    #[arg(short, long)]
    silent: bool,

    /// Set verbosity level, repeat option for more verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // setting log level according to the verbosity level
    let mut log_level = LevelFilter::Warn;
    match cli.verbose {
        1 => log_level = LevelFilter::Info,
        2 => log_level = LevelFilter::Debug,
        3..=u8::MAX => log_level = LevelFilter::Trace,
        _ => {}
    }

    if cli.debug {
        log_level = LevelFilter::Debug;
    }

    // silent out logging if specified in CLI
    if cli.silent {
        log_level = LevelFilter::Off;
    }

    Builder::new().filter_level(log_level).init();

    let mut dev = RandomDevice::open()?;
    let uuid = Uuid::generate(&mut dev)?;
    println!("{}", uuid);

    Ok(())
}
