use binrw::binread;

// note: the whole file is one packed big endian record, there are no chunks and no padding.

pub const RECORD_SIZE: usize = 0x340;
pub const SLICE_CAPACITY: usize = 64;

pub const HEADER_MAGIC: [u8; 16] = *b"FORM\0\0\0\0DPS1SMPA";

pub const SLICE_TABLE_OFFSET: usize = 0x3A;
pub const SLICE_COUNT_OFFSET: usize = 0x33A;
pub const CHECKSUM_OFFSET: usize = 0x33E;

#[binread]
#[br(big)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start_point: u32,
    pub end_point: u32,
    // 0xFFFFFFFF if the slice doesn't loop
    pub loop_point: u32,
}

impl Slice {
    pub fn byte_len() -> usize {
        12
    }
}

#[binread]
#[br(big)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtRecord {
    pub header: [u8; 16],
    // all zero except for 0x15, which is usually 2
    pub reserved: [u8; 7],
    // BPM * 24
    pub tempo: u32,
    // value * 100
    pub trim_length: u32,
    // value * 100
    pub loop_length: u32,
    pub stretch: u32,
    pub loop_mode: u32,
    pub gain: u16,
    pub quantize: u8,
    pub trim_start: u32,
    pub trim_end: u32,
    pub loop_point: u32,
    pub(crate) slice_table: [Slice; SLICE_CAPACITY],
    pub slice_count: u32,
    pub checksum: u16,
}

impl OtRecord {
    pub fn byte_len() -> usize {
        RECORD_SIZE
    }

    /// The valid part of the slice table, never longer than [`SLICE_CAPACITY`].
    pub fn slices(&self) -> &[Slice] {
        let count = (self.slice_count as usize).min(SLICE_CAPACITY);
        &self.slice_table[..count]
    }

    /// All 64 entries, including the ones past `slice_count` that hold whatever the device left there.
    pub fn slice_table(&self) -> &[Slice; SLICE_CAPACITY] {
        &self.slice_table
    }

    pub fn header_is_valid(&self) -> bool {
        self.header == HEADER_MAGIC
    }
}
