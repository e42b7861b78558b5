use octaslice::structs::{
    Slice, HEADER_MAGIC, RECORD_SIZE, SLICE_COUNT_OFFSET, SLICE_TABLE_OFFSET,
};

/// a valid .ot file with the given (start, end) slices, everything else zeroed
pub fn ot_bytes(slices: &[(u32, u32)]) -> Vec<u8> {
    let mut buf = vec![0; RECORD_SIZE];
    buf[..16].copy_from_slice(&HEADER_MAGIC);
    for (i, (start, end)) in slices.iter().enumerate() {
        let offset = SLICE_TABLE_OFFSET + i * Slice::byte_len();
        buf[offset..][..4].copy_from_slice(&start.to_be_bytes());
        buf[offset + 4..][..4].copy_from_slice(&end.to_be_bytes());
    }
    buf[SLICE_COUNT_OFFSET..][..4].copy_from_slice(&(slices.len() as u32).to_be_bytes());
    buf
}
