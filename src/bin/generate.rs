use clap::Parser;
use exportdata::{
    config::{GenerateConfig, TimestampSource, DEFAULT_DATA_FILE, DEFAULT_RECORD_COUNT},
    env::PosixEnv,
    generator::generate_file,
    record::Layout,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Fabricate random records and write them to a binary data file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: String,

    /// Number of records to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_COUNT)]
    count: usize,

    /// Generator seed, defaults to the current time
    #[arg(short, long)]
    seed: Option<u32>,

    /// Record layout: portable or legacy
    #[arg(short, long, default_value_t = Layout::Portable)]
    layout: Layout,

    /// Timestamp source: random or clock
    #[arg(short, long, default_value_t = TimestampSource::Random)]
    timestamps: TimestampSource,
}

impl From<Args> for GenerateConfig {
    fn from(args: Args) -> Self {
        Self {
            path: args.file,
            count: args.count,
            seed: args.seed,
            layout: args.layout,
            timestamps: args.timestamps,
        }
    }
}

fn main() -> Result<(), exportdata::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GenerateConfig::from(Args::parse());
    if let Err(err) = generate_file(&PosixEnv::new(), &config) {
        error!(file = config.path.as_str(), "{}", err);
        return Err(err);
    }
    Ok(())
}
