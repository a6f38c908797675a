use crate::util::Result;

mod posix_env;

pub use posix_env::PosixEnv;

/// An Env is the interface used to reach the filesystem. Callers may supply
/// their own Env (e.g. an in-memory one in tests) instead of `PosixEnv`.
pub trait Env {
    fn new_sequential_file(&self, fname: &str) -> Result<Box<dyn SequentialFile>>;

    /// Creates the file, truncating any existing contents.
    fn new_writable_file(&self, fname: &str) -> Result<Box<dyn WritableFile>>;

    fn remove_file(&self, fname: &str) -> Result<()>;
    fn get_file_size(&self, fname: &str) -> Result<u64>;
}

/// A file abstraction for reading sequentially through a file
pub trait SequentialFile {
    /// Reads up to `dst.len()` bytes. Returns 0 only at end of file.
    fn read(&mut self, dst: &mut [u8]) -> Result<usize>;
}

/// A file abstraction for sequential writing.  The implementation
/// must provide buffering since callers may append small fragments
/// at a time to the file.
pub trait WritableFile {
    fn append(&mut self, data: &[u8]) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn sync(&mut self) -> Result<()>;
}

/// Fill `dst` as far as the file allows. Returns the number of bytes read,
/// which is less than `dst.len()` only at end of file. Interrupted reads are
/// retried.
pub fn read_fully(file: &mut dyn SequentialFile, dst: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < dst.len() {
        match file.read(&mut dst[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(error) if error.is_interrupted() => continue,
            Err(error) => return Err(error),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::util::Error;

    /// Hands out at most `chunk` bytes per read, failing the first
    /// `interruptions` reads with EINTR.
    struct ChunkedSource {
        contents: Vec<u8>,
        chunk: usize,
        interruptions: usize,
    }

    impl ChunkedSource {
        fn new(contents: Vec<u8>, chunk: usize) -> Self {
            Self {
                contents,
                chunk,
                interruptions: 0,
            }
        }
    }

    impl SequentialFile for ChunkedSource {
        fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
            if self.interruptions > 0 {
                self.interruptions -= 1;
                return Err(Error::io_error(
                    "chunked",
                    io::Error::from(io::ErrorKind::Interrupted),
                ));
            }
            let n = dst.len().min(self.chunk).min(self.contents.len());
            dst[..n].copy_from_slice(&self.contents[..n]);
            self.contents.drain(..n);
            Ok(n)
        }
    }

    #[test]
    fn test_read_fully_joins_short_reads() {
        let mut source = ChunkedSource::new((0..100u8).collect(), 7);
        let mut buf = [0u8; 60];
        assert_eq!(60, read_fully(&mut source, &mut buf).unwrap());
        assert_eq!((0..60u8).collect::<Vec<_>>(), buf.to_vec());

        let mut buf = [0u8; 60];
        assert_eq!(40, read_fully(&mut source, &mut buf).unwrap());
        assert_eq!(0, read_fully(&mut source, &mut buf).unwrap());
    }

    #[test]
    fn test_read_fully_retries_interrupted() {
        let mut source = ChunkedSource {
            interruptions: 3,
            ..ChunkedSource::new(vec![9; 20], 8)
        };
        let mut buf = [0u8; 16];
        assert_eq!(16, read_fully(&mut source, &mut buf).unwrap());
        assert_eq!([9u8; 16], buf);
        assert_eq!(0, source.interruptions);
    }

    #[test]
    fn test_read_fully_propagates_other_errors() {
        struct Broken;
        impl SequentialFile for Broken {
            fn read(&mut self, _dst: &mut [u8]) -> Result<usize> {
                Err(Error::io_error(
                    "broken",
                    io::Error::from(io::ErrorKind::PermissionDenied),
                ))
            }
        }
        let mut buf = [0u8; 4];
        let error = read_fully(&mut Broken, &mut buf).unwrap_err();
        assert!(error.is_io_error());
        assert!(!error.is_interrupted());
    }
}
