use crate::{
    env::WritableFile,
    record::{encode_record_into, Layout, Record, MAX_RECORD_SIZE},
    util::Result,
};

/// Appends fixed-width records to a file. The file carries no header, so the
/// reader has to be told the layout and, usually, the record count.
pub struct Writer {
    dest: Box<dyn WritableFile>,
    layout: Layout,
    scratch: [u8; MAX_RECORD_SIZE],
    records_written: usize,
}

impl Writer {
    pub fn new(dest: Box<dyn WritableFile>, layout: Layout) -> Self {
        Self {
            dest,
            layout,
            scratch: [0; MAX_RECORD_SIZE],
            records_written: 0,
        }
    }

    pub fn add_record(&mut self, record: &Record) -> Result<()> {
        let size = self.layout.record_size();
        encode_record_into(self.layout, record, &mut self.scratch);
        self.dest.append(&self.scratch[..size])?;
        self.records_written += 1;
        Ok(())
    }

    pub fn add_records<'a>(&mut self, records: impl IntoIterator<Item = &'a Record>) -> Result<()> {
        for record in records {
            self.add_record(record)?;
        }
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn bytes_written(&self) -> usize {
        self.records_written * self.layout.record_size()
    }

    /// Flushes buffered records and forces them to stable storage.
    pub fn sync(&mut self) -> Result<()> {
        self.dest.sync()
    }

    /// Flushes and closes the underlying file.
    pub fn close(&mut self) -> Result<()> {
        self.dest.close()
    }
}
