use super::{
    layout::{Layout, MAX_RECORD_SIZE},
    Kind, Message, Record, MAX_MESSAGE_LEN, MESSAGE_SLOT_SIZE, MULTI_VALUE_LEN,
};
use crate::util::{
    decode_fixed32, decode_float32, decode_signed64, encode_fixed32, encode_float32,
    encode_signed64, Error, Result,
};

/// Encode `record` into the first `layout.record_size()` bytes of `dst`.
/// Every byte not owned by the active variant is zeroed.
pub fn encode_record_into(layout: Layout, record: &Record, dst: &mut [u8]) {
    let offsets = layout.offsets();
    let dst = &mut dst[..offsets.record_size];
    dst.fill(0);

    let kind = record.kind() as u32;
    encode_fixed32(dst, kind);
    encode_fixed32(&mut dst[offsets.payload_kind..], kind);
    match record {
        Record::Value { value, timestamp } => {
            encode_float32(&mut dst[offsets.value..], *value);
            encode_signed64(&mut dst[offsets.value_timestamp..], *timestamp);
        }
        Record::MultiValue { values, timestamp } => {
            for (i, value) in values.iter().enumerate() {
                encode_float32(&mut dst[offsets.values + 4 * i..], *value);
            }
            encode_signed64(&mut dst[offsets.values_timestamp..], *timestamp);
        }
        Record::Message(message) => {
            // The terminator and the tail of the slot are already zero.
            let text = message.as_bytes();
            dst[offsets.message..offsets.message + text.len()].copy_from_slice(text);
        }
    }
}

pub fn encode_record(layout: Layout, record: &Record) -> Vec<u8> {
    let mut buf = vec![0; layout.record_size()];
    encode_record_into(layout, record, &mut buf);
    buf
}

/// Decode one record from the front of `input`. Extra trailing bytes are ignored.
/// Unused bytes inside the record are checked only where the layout is
/// zero-filled.
pub fn decode_record(layout: Layout, input: &[u8]) -> Result<Record> {
    let offsets = layout.offsets();
    if input.len() < offsets.record_size {
        return Err(Error::short_bytes(offsets.record_size, input.len()));
    }
    let input = &input[..offsets.record_size];

    let kind = Kind::try_from(decode_fixed32(input))?;
    let payload_kind = decode_fixed32(&input[offsets.payload_kind..]);
    if payload_kind != kind as u32 {
        return Err(Error::Corruption(format!(
            "payload kind {} does not match record kind {}",
            payload_kind, kind as u32
        )));
    }

    let record = match kind {
        Kind::Value => Record::Value {
            value: decode_float32(&input[offsets.value..]),
            timestamp: decode_signed64(&input[offsets.value_timestamp..]),
        },
        Kind::MultiValue => {
            let mut values = [0.0; MULTI_VALUE_LEN];
            for (i, value) in values.iter_mut().enumerate() {
                *value = decode_float32(&input[offsets.values + 4 * i..]);
            }
            Record::MultiValue {
                values,
                timestamp: decode_signed64(&input[offsets.values_timestamp..]),
            }
        }
        Kind::Message => {
            let slot = &input[offsets.message..offsets.message + MESSAGE_SLOT_SIZE];
            Record::Message(decode_message(slot)?)
        }
    };

    if offsets.zero_filled {
        let mut canonical = [0u8; MAX_RECORD_SIZE];
        encode_record_into(layout, &record, &mut canonical);
        if canonical[..offsets.record_size] != *input {
            return Err(Error::corruption("non-zero bytes outside the record payload"));
        }
    }
    Ok(record)
}

fn decode_message(slot: &[u8]) -> Result<Message> {
    let len = slot
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| Error::corruption("message is not NUL-terminated"))?;
    debug_assert!(len <= MAX_MESSAGE_LEN);
    let text = &slot[..len];
    if !text.iter().all(u8::is_ascii_alphabetic) {
        return Err(Error::corruption("message contains non-letter bytes"));
    }
    // All bytes are ASCII letters at this point.
    let text = std::str::from_utf8(text).map_err(|e| Error::Corruption(e.to_string()))?;
    Message::new(text)
}
