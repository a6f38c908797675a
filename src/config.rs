use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{record::Layout, util::Error};

/// Data file used when none is given.
pub const DEFAULT_DATA_FILE: &str = "data.bin";

/// Records per file unless told otherwise. Not stored in the file itself.
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Most records a single generator run will produce (about 1 GiB of legacy
/// records).
pub const MAX_RECORD_COUNT: usize = 1 << 24;

/// Where a generated record's timestamp comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TimestampSource {
    /// A draw from the record generator.
    #[default]
    Random,
    /// Current Unix time in seconds.
    Clock,
}

impl Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            TimestampSource::Random => "random",
            TimestampSource::Clock => "clock",
        };
        f.write_str(str)
    }
}

impl FromStr for TimestampSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(TimestampSource::Random),
            "clock" => Ok(TimestampSource::Clock),
            _ => Err(Error::InvalidArgument(format!(
                "unknown timestamp source {:?}",
                s
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerateConfig {
    pub path: String,
    pub count: usize,
    /// None seeds from the wall clock.
    pub seed: Option<u32>,
    pub layout: Layout,
    pub timestamps: TimestampSource,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_FILE.to_owned(),
            count: DEFAULT_RECORD_COUNT,
            seed: None,
            layout: Layout::default(),
            timestamps: TimestampSource::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReadConfig {
    pub path: String,
    /// None reads every record up to the end of the file.
    pub count: Option<usize>,
    pub layout: Layout,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_FILE.to_owned(),
            count: Some(DEFAULT_RECORD_COUNT),
            layout: Layout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GenerateConfig::default();
        assert_eq!("data.bin", config.path);
        assert_eq!(100, config.count);
        assert_eq!(None, config.seed);
        assert_eq!(Layout::Portable, config.layout);
        assert_eq!(TimestampSource::Random, config.timestamps);

        let config = ReadConfig::default();
        assert_eq!("data.bin", config.path);
        assert_eq!(Some(100), config.count);
        assert_eq!(Layout::Portable, config.layout);
    }

    #[test]
    fn test_timestamp_source_names() {
        for source in [TimestampSource::Random, TimestampSource::Clock] {
            assert_eq!(source, source.to_string().parse().unwrap());
        }
        assert!("now".parse::<TimestampSource>().is_err());
    }
}
