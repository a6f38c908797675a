use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
};

use tracing::debug;

use super::{Env, SequentialFile, WritableFile};
use crate::util::{Error, Result};

#[derive(Default)]
pub struct PosixEnv {}

impl PosixEnv {
    pub fn new() -> Self {
        Self {}
    }
}

impl Env for PosixEnv {
    fn new_sequential_file(&self, fname: &str) -> Result<Box<dyn SequentialFile>> {
        match File::open(fname) {
            Ok(file) => {
                debug!(file = fname, "opened for reading");
                Ok(Box::new(PosixSequentialFile {
                    filename: fname.to_owned(),
                    file: BufReader::new(file),
                }))
            }
            Err(error) => Err(Error::io_error(fname, error)),
        }
    }

    fn new_writable_file(&self, fname: &str) -> Result<Box<dyn WritableFile>> {
        match File::create(fname) {
            Ok(file) => {
                debug!(file = fname, "opened for writing");
                Ok(Box::new(PosixWritableFile {
                    filename: fname.to_owned(),
                    file: Some(BufWriter::new(file)),
                }))
            }
            Err(error) => Err(Error::io_error(fname, error)),
        }
    }

    fn remove_file(&self, fname: &str) -> Result<()> {
        fs::remove_file(fname).map_err(|error| Error::io_error(fname, error))
    }

    fn get_file_size(&self, fname: &str) -> Result<u64> {
        match fs::metadata(fname) {
            Ok(data) => Ok(data.len()),
            Err(error) => Err(Error::io_error(fname, error)),
        }
    }
}

struct PosixSequentialFile {
    filename: String,
    file: BufReader<File>,
}

impl SequentialFile for PosixSequentialFile {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        self.file
            .read(dst)
            .map_err(|error| Error::io_error(&self.filename, error))
    }
}

struct PosixWritableFile {
    filename: String,
    /// None once closed.
    file: Option<BufWriter<File>>,
}

fn closed_error(filename: &str) -> Error {
    Error::InvalidArgument(format!("{}: file already closed", filename))
}

impl WritableFile for PosixWritableFile {
    fn append(&mut self, data: &[u8]) -> Result<()> {
        let Self { filename, file } = self;
        let file = file.as_mut().ok_or_else(|| closed_error(filename))?;
        file.write_all(data)
            .map_err(|error| Error::io_error(filename, error))
    }

    fn close(&mut self) -> Result<()> {
        let result = self.flush();
        if self.file.take().is_some() {
            debug!(file = self.filename.as_str(), "closed");
        }
        result
    }

    fn flush(&mut self) -> Result<()> {
        match self.file.as_mut() {
            Some(file) => file
                .flush()
                .map_err(|error| Error::io_error(&self.filename, error)),
            None => Ok(()),
        }
    }

    fn sync(&mut self) -> Result<()> {
        let Self { filename, file } = self;
        let file = file.as_mut().ok_or_else(|| closed_error(filename))?;
        file.flush()
            .and_then(|_| file.get_ref().sync_all())
            .map_err(|error| Error::io_error(filename, error))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;
    use crate::env::read_fully;

    fn temp_name(name: &str) -> String {
        env::temp_dir()
            .join(format!("exportdata-posix-{}-{}", process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_posix_write_then_read() {
        let env = PosixEnv::new();
        let fname = temp_name("write_then_read");
        let mut file = env.new_writable_file(&fname).unwrap();
        file.append(b"hello ").unwrap();
        file.append(b"world").unwrap();
        file.sync().unwrap();
        file.close().unwrap();
        assert!(file.append(b"late").unwrap_err().is_invalid_argument());
        // Closing twice is harmless.
        file.close().unwrap();

        assert_eq!(11, env.get_file_size(&fname).unwrap());
        let mut source = env.new_sequential_file(&fname).unwrap();
        let mut buf = [0u8; 32];
        assert_eq!(11, read_fully(source.as_mut(), &mut buf).unwrap());
        assert_eq!(b"hello world", &buf[..11]);

        env.remove_file(&fname).unwrap();
        assert!(env.get_file_size(&fname).unwrap_err().is_not_found());
    }

    #[test]
    fn test_posix_sync_after_close() {
        let env = PosixEnv::new();
        let fname = temp_name("sync_after_close");
        let mut file = env.new_writable_file(&fname).unwrap();
        file.append(b"abc").unwrap();
        file.sync().unwrap();
        // Synced data is on disk before close.
        assert_eq!(3, env.get_file_size(&fname).unwrap());
        file.close().unwrap();
        assert!(file.sync().unwrap_err().is_invalid_argument());
        env.remove_file(&fname).unwrap();
    }

    #[test]
    fn test_posix_missing_file() {
        let env = PosixEnv::new();
        let fname = temp_name("missing");
        assert!(env.new_sequential_file(&fname).err().unwrap().is_not_found());
        assert!(env.get_file_size(&fname).unwrap_err().is_not_found());
        assert!(env.remove_file(&fname).unwrap_err().is_not_found());
    }

    #[test]
    fn test_posix_unwritable_path() {
        let env = PosixEnv::new();
        let fname = temp_name("no-such-dir/data.bin");
        assert!(env.new_writable_file(&fname).is_err());
    }
}
