#[macro_use]
extern crate tracing;

use clap::{Parser, ValueEnum};
use eyre::Result;
use tempus::{parse_offset, Ladder, Time};
use time::UtcOffset;
use tracing_subscriber::EnvFilter;

/// Print timestamps through a field mask, followed by how long ago they were.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Field mask, e.g. "D/m/Y H:I"; empty for "Y M D".
    #[arg(short, long, env = "TEMPUS_MASK", default_value = "")]
    mask: String,

    /// Units the relative time may use.
    #[arg(long, env = "TEMPUS_LADDER", value_enum, default_value_t = LadderArg::Classic)]
    ladder: LadderArg,

    /// Shorthand for `--ladder hourly`.
    #[arg(long)]
    hourly: bool,

    /// Offset to read fields in, e.g. "+02:00".
    #[arg(short, long, env = "TEMPUS_UTC_OFFSET", value_parser = parse_offset)]
    offset: Option<UtcOffset>,

    /// Milliseconds since the unix epoch; the current time if none are given.
    #[arg(allow_negative_numbers = true)]
    timestamps: Vec<i64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LadderArg {
    Classic,
    Hourly,
}

impl From<LadderArg> for Ladder {
    fn from(arg: LadderArg) -> Self {
        match arg {
            LadderArg::Classic => Ladder::Classic,
            LadderArg::Hourly => Ladder::Hourly,
        }
    }
}

#[derive(Debug)]
struct Config {
    mask: String,
    ladder: Ladder,
    offset: Option<UtcOffset>,
}

impl Config {
    pub fn init(args: &Args) -> Self {
        let ladder = if args.hourly {
            Ladder::Hourly
        } else {
            args.ladder.into()
        };

        Config {
            mask: args.mask.clone(),
            ladder,
            offset: args.offset,
        }
    }
}

fn main() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::init(&args);

    let now = Time::now();
    let times = if args.timestamps.is_empty() {
        vec![now]
    } else {
        args.timestamps
            .iter()
            .map(|&millis| Time::from_unix_millis(millis))
            .collect::<Result<Vec<_>, _>>()?
    };

    debug!(count = times.len(), ladder = ?config.ladder, "Formatting timestamps");

    for time in times {
        let time = match config.offset {
            Some(offset) => time.with_offset(offset)?,
            None => time,
        };

        println!(
            "{formatted} ({relative})",
            formatted = time.format(&config.mask),
            relative = time.when_with(&now.as_offset_date_time(), config.ladder),
        );
    }

    Ok(())
}
