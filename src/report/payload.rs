//! Image chunk payloads.
//!
//! The transport layer carries binary image chunks as standard base64 text.
//! A payload that fails to decode is kept as its original text rather than
//! failing the surrounding report.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize, Serializer};

/// The wire shape of an image chunk payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum WirePayload {
    Text(String),
    Bytes(Vec<u8>),
}

/// The outcome of reading an image chunk payload.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "WirePayload")]
pub enum ImageData {

    /// Decoded chunk bytes.
    Bytes(Vec<u8>),

    /// Text that could not be decoded as base64, kept unchanged.
    Text(String)
}
impl ImageData {

    /// Decode base64 text, falling back to the original text if it is malformed.
    pub fn from_base64(text: String) -> Self {
        match STANDARD.decode(text.as_bytes()) {
            Ok(bytes) => Self::Bytes(bytes),
            Err(e) => {
                log::trace!("Image payload is not valid base64, keeping raw text: {}", e);
                Self::Text(text)
            }
        }
    }

    /// Payload length. Decoded payloads count bytes, raw text counts characters.
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.chars().count()
        }
    }

    /// Is the payload empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Was the payload successfully decoded.
    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// The decoded bytes, if decoding succeeded.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Text(_) => None
        }
    }
}
impl From<WirePayload> for ImageData {
    fn from(payload: WirePayload) -> Self {
        match payload {
            WirePayload::Text(text) => Self::from_base64(text),
            WirePayload::Bytes(bytes) => Self::Bytes(bytes)
        }
    }
}
impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bytes(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            Self::Text(text) => serializer.serialize_str(text)
        }
    }
}
