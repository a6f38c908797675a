use std::mem::size_of;

pub fn encode_fixed32(dst: &mut [u8], value: u32) {
    dst[..size_of::<u32>()].copy_from_slice(&value.to_le_bytes());
}

pub fn encode_fixed64(dst: &mut [u8], value: u64) {
    dst[..size_of::<u64>()].copy_from_slice(&value.to_le_bytes());
}

/// IEEE-754 single precision, stored bit-exact
pub fn encode_float32(dst: &mut [u8], value: f32) {
    encode_fixed32(dst, value.to_bits());
}

pub fn encode_signed64(dst: &mut [u8], value: i64) {
    encode_fixed64(dst, value as u64);
}

pub fn decode_fixed32(input: &[u8]) -> u32 {
    let mut bytes = [0u8; size_of::<u32>()];
    bytes.copy_from_slice(&input[..size_of::<u32>()]);
    u32::from_le_bytes(bytes)
}

pub fn decode_fixed64(input: &[u8]) -> u64 {
    let mut bytes = [0u8; size_of::<u64>()];
    bytes.copy_from_slice(&input[..size_of::<u64>()]);
    u64::from_le_bytes(bytes)
}

pub fn decode_float32(input: &[u8]) -> f32 {
    f32::from_bits(decode_fixed32(input))
}

pub fn decode_signed64(input: &[u8]) -> i64 {
    decode_fixed64(input) as i64
}
