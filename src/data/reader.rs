use crate::{
    env::{read_fully, SequentialFile},
    record::{decode_record, Layout, Record, MAX_RECORD_SIZE},
    util::{Error, Result},
};

/// Upper bound on up-front allocation; the caller's count is not trusted
/// until the records have actually been read.
const PREALLOCATE_LIMIT: usize = 1024;

pub struct Reader {
    file: Box<dyn SequentialFile>,
    layout: Layout,
    backing_store: [u8; MAX_RECORD_SIZE],
    records_read: usize,
    eof: bool,
}

impl Reader {
    pub fn new(file: Box<dyn SequentialFile>, layout: Layout) -> Self {
        Self {
            file,
            layout,
            backing_store: [0; MAX_RECORD_SIZE],
            records_read: 0,
            eof: false,
        }
    }

    /// Returns Ok(None) on a clean end of file. A record cut short by the end
    /// of file is an UnexpectedEof error.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if self.eof {
            return Ok(None);
        }
        let size = self.layout.record_size();
        let buf = &mut self.backing_store[..size];
        let read_size = read_fully(self.file.as_mut(), buf)?;
        if read_size == 0 {
            self.eof = true;
            return Ok(None);
        }
        if read_size < size {
            self.eof = true;
            return Err(Error::short_bytes(size, read_size));
        }
        let record = decode_record(self.layout, buf)?;
        self.records_read += 1;
        Ok(Some(record))
    }

    /// Reads exactly `count` records.
    pub fn read_records(&mut self, count: usize) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
        while records.len() < count {
            match self.read_record()? {
                Some(record) => records.push(record),
                None => return Err(Error::short_records(count, records.len())),
            }
        }
        Ok(records)
    }

    /// Reads until end of file.
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        let mut records = vec![];
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }
}
