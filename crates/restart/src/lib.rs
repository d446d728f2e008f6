//! Sequential restart-file I/O.
//!
//! A restart file is a flat stream of bincode-encoded values with no header
//! and no framing. Readers must consume values in exactly the order the writer
//! produced them; the file itself carries no field names, so a reordered read
//! yields garbage rather than an error.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;


/// Errors produced while writing or reading a restart file.
#[derive(Debug, Error)]
pub enum RestartError {
    /// Opening, creating or flushing the underlying file failed.
    #[error("restart file I/O failed")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded. Truncated files surface here
    /// as an unexpected end of input.
    #[error("restart value could not be encoded or decoded")]
    Encode(#[from] bincode::Error),

    /// The stream decoded, but its content is not a valid payload.
    #[error("corrupt restart payload: {0}")]
    Corrupt(String),
}

/// Writes values to a restart stream in call order.
pub struct RestartWriter<W: Write> {
    inner: W,
    count: usize,
}

impl RestartWriter<BufWriter<File>> {
    /// Create (or truncate) a restart file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RestartError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> RestartWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Append one value to the stream.
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RestartError> {
        bincode::serialize_into(&mut self.inner, value)?;
        self.count += 1;
        Ok(())
    }

    /// Number of values written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush buffered output and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W, RestartError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads values from a restart stream in the order they were written.
pub struct RestartReader<R: Read> {
    inner: R,
    count: usize,
}

impl RestartReader<BufReader<File>> {
    /// Open an existing restart file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RestartError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> RestartReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, count: 0 }
    }

    /// Read the next value from the stream.
    pub fn read<T: DeserializeOwned>(&mut self) -> Result<T, RestartError> {
        let value = bincode::deserialize_from(&mut self.inner)?;
        self.count += 1;
        Ok(value)
    }

    /// Number of values read so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Hand back the underlying reader, e.g. to check for trailing data.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
