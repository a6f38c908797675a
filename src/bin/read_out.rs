use std::io::{self, BufWriter};

use clap::Parser;
use exportdata::{
    config::{ReadConfig, DEFAULT_DATA_FILE, DEFAULT_RECORD_COUNT},
    env::PosixEnv,
    read_out::{read_file, render},
    record::Layout,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Read a binary data file and print one line per record.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: String,

    /// Number of records the file must hold
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_COUNT, conflicts_with = "all")]
    count: usize,

    /// Read every record up to the end of the file instead of a fixed count
    #[arg(short, long)]
    all: bool,

    /// Record layout: portable or legacy
    #[arg(short, long, default_value_t = Layout::Portable)]
    layout: Layout,
}

impl From<Args> for ReadConfig {
    fn from(args: Args) -> Self {
        Self {
            path: args.file,
            count: if args.all { None } else { Some(args.count) },
            layout: args.layout,
        }
    }
}

fn main() -> Result<(), exportdata::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ReadConfig::from(Args::parse());
    let result = read_file(&PosixEnv::new(), &config)
        .and_then(|records| render(&records, &mut BufWriter::new(io::stdout().lock())));
    if let Err(err) = result {
        error!(file = config.path.as_str(), "{}", err);
        return Err(err);
    }
    Ok(())
}
