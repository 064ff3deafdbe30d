//! `data:` URL envelope codec.
//!
//! Images cross the host boundary as `data:image/<subtype>;base64,<payload>`
//! strings. This module splits such a string into its header and decoded
//! payload bytes, and builds the same kind of string from a format tag and
//! encoded bytes.

use base64::{engine::general_purpose, Engine as _};

use crate::decode::ImageFormat;
use crate::Error;

/// A parsed data URL: the header as received plus the decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// Everything before the comma, e.g. `data:image/png;base64`.
    pub header: &'a str,
    /// Base64-decoded payload bytes.
    pub bytes: Vec<u8>,
}

impl<'a> DataUrl<'a> {
    /// Parse a data URL.
    ///
    /// The string must contain exactly one comma. The payload is decoded as
    /// standard, padded base64; `\r` and `\n` are skipped so line-wrapped
    /// payloads decode.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedEnvelope` for zero or several commas.
    /// Returns `Error::Base64Decode` if the payload is not valid base64.
    pub fn parse(s: &'a str) -> Result<Self, Error> {
        let mut parts = s.split(',');
        let (header, payload) = match (parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), None) => (header, payload),
            _ => return Err(Error::MalformedEnvelope),
        };

        let payload: Vec<u8> = payload
            .bytes()
            .filter(|b| !matches!(b, b'\r' | b'\n'))
            .collect();
        let bytes = general_purpose::STANDARD.decode(&payload)?;
        Ok(Self { header, bytes })
    }

    /// Build `data:image/<format>;base64,<payload>` from encoded image bytes.
    pub fn encode(format: ImageFormat, bytes: &[u8]) -> String {
        format!(
            "data:image/{};base64,{}",
            format.subtype(),
            general_purpose::STANDARD.encode(bytes)
        )
    }
}
