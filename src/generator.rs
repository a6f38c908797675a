use chrono::Utc;
use tracing::{info, warn};

use crate::{
    config::{GenerateConfig, TimestampSource, MAX_RECORD_COUNT},
    data::Writer,
    env::Env,
    record::{Message, Record, MAX_MESSAGE_LEN, MULTI_VALUE_LEN},
    util::{Error, Random, Result},
};

/// Fabricates records with a uniformly chosen kind and random payloads.
pub struct Generator {
    rnd: Random,
    timestamps: TimestampSource,
}

impl Generator {
    pub fn new(seed: u32, timestamps: TimestampSource) -> Self {
        Self {
            rnd: Random::new(seed),
            timestamps,
        }
    }

    pub fn next_record(&mut self) -> Record {
        match self.rnd.uniform(3) + 1 {
            1 => Record::Value {
                value: self.rnd.next_f32(),
                timestamp: self.next_timestamp(),
            },
            2 => {
                let mut values = [0.0; MULTI_VALUE_LEN];
                for value in values.iter_mut() {
                    *value = self.rnd.next_f32();
                }
                Record::MultiValue {
                    values,
                    timestamp: self.next_timestamp(),
                }
            }
            _ => Record::Message(self.next_message()),
        }
    }

    pub fn generate(&mut self, n: usize) -> Vec<Record> {
        let mut records = Vec::with_capacity(n.min(MAX_RECORD_COUNT));
        for _ in 0..n {
            records.push(self.next_record());
        }
        records
    }

    fn next_timestamp(&mut self) -> i64 {
        match self.timestamps {
            TimestampSource::Random => self.rnd.next() as i64,
            TimestampSource::Clock => Utc::now().timestamp(),
        }
    }

    /// Always exactly 20 lowercase letters.
    fn next_message(&mut self) -> Message {
        let text: String = (0..MAX_MESSAGE_LEN)
            .map(|_| (b'a' + self.rnd.uniform(26) as u8) as char)
            .collect();
        Message::from_letters(text)
    }
}

/// Seed used when none is configured: wall-clock seconds.
pub fn default_seed() -> u32 {
    Utc::now().timestamp() as u32
}

/// Generate `config.count` records and write them durably to `config.path`.
/// A file left half-written by a failure is removed before the error is
/// returned.
pub fn generate_file(env: &dyn Env, config: &GenerateConfig) -> Result<Vec<Record>> {
    if config.count == 0 {
        return Err(Error::invalid_argument("record count must be positive"));
    }
    if config.count > MAX_RECORD_COUNT {
        return Err(Error::InvalidArgument(format!(
            "record count {} exceeds {}",
            config.count, MAX_RECORD_COUNT
        )));
    }
    let seed = config.seed.unwrap_or_else(default_seed);
    let records = Generator::new(seed, config.timestamps).generate(config.count);

    let file = env.new_writable_file(&config.path)?;
    let mut writer = Writer::new(file, config.layout);
    let mut result = writer.add_records(&records);
    if result.is_ok() {
        result = writer.sync();
    }
    if result.is_ok() {
        result = writer.close();
    }
    if let Err(error) = result {
        drop(writer);
        warn!(file = config.path.as_str(), %error, "write failed, removing file");
        let _ = env.remove_file(&config.path);
        return Err(error);
    }

    info!(
        file = config.path.as_str(),
        seed,
        layout = %config.layout,
        records = writer.records_written(),
        bytes = writer.bytes_written(),
        "generated records"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Kind;

    fn check_valid(record: &Record) {
        match record {
            Record::Value { value, timestamp } => {
                assert!((0.0..1.0).contains(value));
                assert!(*timestamp >= 0);
            }
            Record::MultiValue { values, timestamp } => {
                assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
                assert!(*timestamp >= 0);
            }
            Record::Message(message) => {
                assert_eq!(MAX_MESSAGE_LEN, message.len());
                assert!(message.as_bytes().iter().all(u8::is_ascii_lowercase));
            }
        }
    }

    #[test]
    fn test_generator_deterministic() {
        let a = Generator::new(2024, TimestampSource::Random).generate(100);
        let b = Generator::new(2024, TimestampSource::Random).generate(100);
        assert_eq!(a, b);
        let c = Generator::new(2025, TimestampSource::Random).generate(100);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generator_records_valid() {
        let records = Generator::new(7, TimestampSource::Random).generate(1000);
        assert_eq!(1000, records.len());
        records.iter().for_each(check_valid);
    }

    #[test]
    fn test_generator_covers_all_kinds() {
        let records = Generator::new(99, TimestampSource::Random).generate(300);
        for kind in [Kind::Value, Kind::MultiValue, Kind::Message] {
            let n = records.iter().filter(|r| r.kind() == kind).count();
            // Expect ~100 each.
            assert!(n > 50, "{:?} drawn only {} times", kind, n);
        }
    }

    #[test]
    fn test_generator_clock_timestamps() {
        let before = Utc::now().timestamp();
        let records = Generator::new(5, TimestampSource::Clock).generate(50);
        let after = Utc::now().timestamp();
        for record in records {
            match record {
                Record::Value { timestamp, .. } | Record::MultiValue { timestamp, .. } => {
                    assert!(before <= timestamp && timestamp <= after);
                }
                Record::Message(_) => {}
            }
        }
    }
}
