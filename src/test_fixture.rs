use crate::structs::{HEADER_MAGIC, RECORD_SIZE, SLICE_CAPACITY};

/// Builds synthetic .ot files for the tests, every field is written big endian at its offset.
#[derive(Debug, Clone)]
pub struct OtFixture {
    pub header: [u8; 16],
    pub reserved: [u8; 7],
    pub tempo: u32,
    pub trim_length: u32,
    pub loop_length: u32,
    pub stretch: u32,
    pub loop_mode: u32,
    pub gain: u16,
    pub quantize: u8,
    pub trim_start: u32,
    pub trim_end: u32,
    pub loop_point: u32,
    pub slices: [(u32, u32, u32); SLICE_CAPACITY],
    pub slice_count: u32,
    pub checksum: u16,
}

impl Default for OtFixture {
    fn default() -> Self {
        Self {
            header: HEADER_MAGIC,
            reserved: [0, 0, 0, 0, 0, 2, 0],
            // 120 BPM
            tempo: 2880,
            trim_length: 0,
            loop_length: 0,
            stretch: 0,
            loop_mode: 0,
            gain: 0x30,
            quantize: 0xFF,
            trim_start: 0,
            trim_end: 0,
            loop_point: 0,
            slices: [(0, 0, 0); SLICE_CAPACITY],
            slice_count: 0,
            checksum: 0,
        }
    }
}

impl OtFixture {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(RECORD_SIZE);
        buf.extend_from_slice(&self.header);
        buf.extend_from_slice(&self.reserved);
        for value in [
            self.tempo,
            self.trim_length,
            self.loop_length,
            self.stretch,
            self.loop_mode,
        ] {
            buf.extend_from_slice(&value.to_be_bytes());
        }
        buf.extend_from_slice(&self.gain.to_be_bytes());
        buf.push(self.quantize);
        for value in [self.trim_start, self.trim_end, self.loop_point] {
            buf.extend_from_slice(&value.to_be_bytes());
        }
        for (start, end, loop_point) in self.slices.iter() {
            buf.extend_from_slice(&start.to_be_bytes());
            buf.extend_from_slice(&end.to_be_bytes());
            buf.extend_from_slice(&loop_point.to_be_bytes());
        }
        buf.extend_from_slice(&self.slice_count.to_be_bytes());
        buf.extend_from_slice(&self.checksum.to_be_bytes());
        assert_eq!(buf.len(), RECORD_SIZE);
        buf
    }
}
