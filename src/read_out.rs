use std::io::Write;

use tracing::{info, warn};

use crate::{
    config::ReadConfig,
    data::Reader,
    env::Env,
    record::Record,
    util::{Error, Result},
};

/// Load the records of `config.path`. With a count, exactly that many records
/// must be present; without one, the whole file is read.
pub fn read_file(env: &dyn Env, config: &ReadConfig) -> Result<Vec<Record>> {
    let record_size = config.layout.record_size() as u64;
    let file_size = env.get_file_size(&config.path)?;
    if file_size % record_size != 0 {
        warn!(
            file = config.path.as_str(),
            file_size,
            record_size,
            "file size is not a whole number of records"
        );
    }

    let file = env.new_sequential_file(&config.path)?;
    let mut reader = Reader::new(file, config.layout);
    let records = match config.count {
        Some(count) => reader.read_records(count)?,
        None => reader.read_all()?,
    };

    info!(
        file = config.path.as_str(),
        layout = %config.layout,
        records = reader.records_read(),
        "read records"
    );
    Ok(records)
}

/// One line per record.
pub fn render(records: &[Record], out: &mut dyn Write) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record).map_err(|error| Error::io_error("output", error))?;
    }
    out.flush().map_err(|error| Error::io_error("output", error))
}
