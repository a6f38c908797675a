mod codec;
mod layout;

use std::fmt::{self, Display};

pub use codec::{decode_record, encode_record, encode_record_into};
pub use layout::{Layout, MAX_RECORD_SIZE};

use crate::util::{Error, Result};

/// Number of floats carried by a MultiValue record.
pub const MULTI_VALUE_LEN: usize = 10;

/// Longest message text, excluding the NUL terminator.
pub const MAX_MESSAGE_LEN: usize = 20;

/// Size of the message slot on disk: text plus NUL terminator.
pub const MESSAGE_SLOT_SIZE: usize = MAX_MESSAGE_LEN + 1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum Kind {
    Value = 1,
    MultiValue = 2,
    Message = 3,
}

impl TryFrom<u32> for Kind {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Self::Value),
            2 => Ok(Self::MultiValue),
            3 => Ok(Self::Message),
            _ => Err(Error::UnknownVariant(value)),
        }
    }
}

/// Text payload: at most 20 ASCII letters.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    text: String,
}

impl Message {
    /// Longer texts are rejected, never truncated.
    pub fn new(text: &str) -> Result<Self> {
        if text.len() > MAX_MESSAGE_LEN {
            return Err(Error::InvalidArgument(format!(
                "message of {} bytes exceeds {} characters",
                text.len(),
                MAX_MESSAGE_LEN
            )));
        }
        if let Some(c) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument(format!(
                "message contains non-letter {:?}",
                c
            )));
        }
        Ok(Self {
            text: text.to_owned(),
        })
    }

    /// For callers that only ever produce valid text.
    pub(crate) fn from_letters(text: String) -> Self {
        debug_assert!(text.len() <= MAX_MESSAGE_LEN);
        debug_assert!(text.bytes().all(|b| b.is_ascii_alphabetic()));
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Record {
    Value {
        value: f32,
        timestamp: i64,
    },
    MultiValue {
        values: [f32; MULTI_VALUE_LEN],
        timestamp: i64,
    },
    Message(Message),
}

impl Record {
    pub fn kind(&self) -> Kind {
        match self {
            Record::Value { .. } => Kind::Value,
            Record::MultiValue { .. } => Kind::MultiValue,
            Record::Message(_) => Kind::Message,
        }
    }
}

/// Floats print with six decimals, like C's `%f`.
impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Value { value, timestamp } => {
                write!(f, "Value: {:.6}, timestamp: {}", value, timestamp)
            }
            Record::MultiValue { values, timestamp } => {
                f.write_str("MValue: ")?;
                for value in values {
                    write!(f, "{:.6} ", value)?;
                }
                write!(f, ", timestamp: {}", timestamp)
            }
            Record::Message(message) => write!(f, "Message: {}", message),
        }
    }
}
