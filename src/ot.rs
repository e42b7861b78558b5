use std::{
    fs::File,
    io::{self, Cursor, Read},
    path::Path,
};

use binrw::BinReaderExt;
use log::{debug, trace};
use thiserror::Error;

use crate::structs::{OtRecord, RECORD_SIZE, SLICE_CAPACITY};

#[derive(Error, Debug)]
pub enum OtError {
    #[error("could not read file: {0}")]
    Io(#[from] io::Error),
    #[error("not a valid .ot file: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("not a valid .ot file: unexpected header {0:02X?}")]
    InvalidMagic([u8; 16]),
    #[error("slice count {0} is larger than the slice table")]
    SliceCountOutOfRange(u32),
    #[error("error parsing .ot file: {0}")]
    Parse(#[from] binrw::Error),
}

/// How much of a correctly sized file gets checked beyond its length.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Validation {
    /// accept any header, like the device tools do
    #[default]
    Lenient,
    /// reject files whose header isn't [`HEADER_MAGIC`](crate::structs::HEADER_MAGIC)
    Strict,
}

impl OtRecord {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OtError> {
        Self::from_bytes_with(bytes, Validation::Lenient)
    }

    pub fn from_bytes_with(bytes: &[u8], validation: Validation) -> Result<Self, OtError> {
        if bytes.len() != RECORD_SIZE {
            return Err(OtError::SizeMismatch {
                expected: RECORD_SIZE,
                actual: bytes.len(),
            });
        }
        let record: OtRecord = Cursor::new(bytes).read_be()?;
        trace!("{record:?}");
        if !record.header_is_valid() {
            if validation == Validation::Strict {
                return Err(OtError::InvalidMagic(record.header));
            }
            debug!("ignoring unexpected header {:02X?}", record.header);
        }
        if record.slice_count as usize > SLICE_CAPACITY {
            return Err(OtError::SliceCountOutOfRange(record.slice_count));
        }
        debug!(
            "decoded .ot record with {} slices, checksum {:#06x}",
            record.slice_count, record.checksum
        );
        Ok(record)
    }

    /// Reads at most one byte past a record, anything but exactly one record is an error.
    ///
    /// For longer sources the `actual` size in [`OtError::SizeMismatch`] is capped at `RECORD_SIZE + 1`.
    pub fn from_reader<R: Read>(r: &mut R, validation: Validation) -> Result<Self, OtError> {
        let mut bytes = Vec::with_capacity(RECORD_SIZE + 1);
        r.take(RECORD_SIZE as u64 + 1).read_to_end(&mut bytes)?;
        Self::from_bytes_with(&bytes, validation)
    }

    pub fn from_path<P: AsRef<Path>>(p: P, validation: Validation) -> Result<Self, OtError> {
        let mut f = File::open(p.as_ref())?;
        let metadata = f.metadata()?;
        // regular files report their real size, anything else goes through the capped read
        if metadata.is_file() && metadata.len() != RECORD_SIZE as u64 {
            return Err(OtError::SizeMismatch {
                expected: RECORD_SIZE,
                actual: metadata.len() as usize,
            });
        }
        Self::from_reader(&mut f, validation)
    }
}

pub fn decode(bytes: &[u8]) -> Result<OtRecord, OtError> {
    OtRecord::from_bytes(bytes)
}
