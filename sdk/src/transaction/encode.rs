//! Canonical field encoding.
//!
//! Turns one JSON field value into its exact wire bytes. The layout is
//! position-dependent with no field separators, so a node can only decode a
//! message by walking the schema with these same rules. JSON/serde is
//! intentionally not involved in the byte format; key order and number
//! formatting must never influence what gets signed.
//!
//! Everything here is pure: same inputs, same bytes, no clock, no RNG, no
//! I/O. Anything malformed is an [`EncodeError`]; nothing is coerced,
//! defaulted, or truncated.

use serde_json::Value;
use thiserror::Error;

use super::types::FieldType;
use crate::config::{
    Network, ADDRESS_LENGTH, ALIAS_VERSION, ASSET_ID_LENGTH, MAX_ALIAS_LENGTH,
    MAX_PREFIXED_FIELD_LENGTH, NATIVE_TOKEN,
};

// ---------------------------------------------------------------------------
// EncodeError
// ---------------------------------------------------------------------------

/// A field value that cannot be encoded. The field name rides along so the
/// failure is attributable without replaying the whole transaction.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("field \"{field}\": expected {expected}")]
    TypeMismatch { field: String, expected: &'static str },

    #[error("field \"{field}\": value {value} is not an integer in [0, 255]")]
    ByteOutOfRange { field: String, value: String },

    #[error("field \"{field}\": value {value} is not a signed 64-bit integer")]
    LongOutOfRange { field: String, value: String },

    #[error("field \"{field}\": not valid base-58 text")]
    InvalidBase58 { field: String },

    #[error("field \"{field}\": decoded to {actual} bytes, expected exactly {expected}")]
    WrongLength { field: String, expected: usize, actual: usize },

    #[error("field \"{field}\": {actual} bytes exceeds the {max}-byte limit")]
    TooLong { field: String, max: usize, actual: usize },
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encodes a single field value according to its schema type.
///
/// `network` only matters for [`FieldType::Recipient`]: the alias layout
/// embeds the chain id so an alias signed for one network is meaningless on
/// another.
pub fn encode_value(
    field: &str,
    field_type: FieldType,
    value: &Value,
    network: Network,
) -> Result<Vec<u8>, EncodeError> {
    match field_type {
        FieldType::Byte => encode_byte(field, value),
        FieldType::Long => encode_long(field, value),
        FieldType::Utf8 => Ok(as_str(field, value)?.as_bytes().to_vec()),
        FieldType::Utf8WithLength => with_length_prefix(field, as_str(field, value)?.as_bytes()),
        FieldType::Bool => encode_bool(field, value),
        FieldType::Base58(width) => decode_base58(field, as_str(field, value)?, width),
        FieldType::OptionalAssetId => encode_optional_asset_id(field, value),
        FieldType::Recipient => encode_recipient(field, value, network),
        FieldType::Attachment => with_length_prefix(field, as_str(field, value)?.as_bytes()),
    }
}

/// Whether a recipient string names an alias rather than an address.
///
/// Classification is by byte length alone: aliases are capped at
/// [`MAX_ALIAS_LENGTH`] by network rule, while base-58 text for a 26-byte
/// address is always 35 characters or more. The encoded forms stay
/// self-describing regardless (alias tag byte vs address version byte).
pub fn is_alias(recipient: &str) -> bool {
    recipient.len() <= MAX_ALIAS_LENGTH
}

fn encode_byte(field: &str, value: &Value) -> Result<Vec<u8>, EncodeError> {
    if !value.is_number() {
        return Err(EncodeError::TypeMismatch {
            field: field.into(),
            expected: "an integer",
        });
    }
    match value.as_i64() {
        Some(n) if (0..=255).contains(&n) => Ok(vec![n as u8]),
        _ => Err(EncodeError::ByteOutOfRange {
            field: field.into(),
            value: value.to_string(),
        }),
    }
}

fn encode_long(field: &str, value: &Value) -> Result<Vec<u8>, EncodeError> {
    if !value.is_number() {
        return Err(EncodeError::TypeMismatch {
            field: field.into(),
            expected: "an integer",
        });
    }
    // Two's-complement big-endian, the full i64 domain. Floats and numbers
    // past i64::MAX are rejected rather than rounded.
    let n = value.as_i64().ok_or_else(|| EncodeError::LongOutOfRange {
        field: field.into(),
        value: value.to_string(),
    })?;
    Ok(n.to_be_bytes().to_vec())
}

fn encode_bool(field: &str, value: &Value) -> Result<Vec<u8>, EncodeError> {
    let b = value.as_bool().ok_or_else(|| EncodeError::TypeMismatch {
        field: field.into(),
        expected: "a boolean",
    })?;
    Ok(vec![u8::from(b)])
}

fn encode_optional_asset_id(field: &str, value: &Value) -> Result<Vec<u8>, EncodeError> {
    let text = as_str(field, value)?;

    // The native token has no asset id: a single absent-flag byte.
    if text == NATIVE_TOKEN {
        return Ok(vec![0]);
    }

    let id = decode_base58(field, text, ASSET_ID_LENGTH)?;
    let mut buf = Vec::with_capacity(1 + ASSET_ID_LENGTH);
    buf.push(1);
    buf.extend_from_slice(&id);
    Ok(buf)
}

fn encode_recipient(field: &str, value: &Value, network: Network) -> Result<Vec<u8>, EncodeError> {
    let text = as_str(field, value)?;

    if is_alias(text) {
        // Alias layout: tag byte, chain id, then the length-prefixed name.
        let mut buf = Vec::with_capacity(4 + text.len());
        buf.push(ALIAS_VERSION);
        buf.push(network.chain_id);
        buf.extend_from_slice(&with_length_prefix(field, text.as_bytes())?);
        return Ok(buf);
    }

    // Address layout: the decoded 26 bytes verbatim. The first of them is
    // the address version byte, which is what keeps the two layouts from
    // ever colliding on the wire.
    decode_base58(field, text, ADDRESS_LENGTH)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn as_str<'a>(field: &str, value: &'a Value) -> Result<&'a str, EncodeError> {
    value.as_str().ok_or_else(|| EncodeError::TypeMismatch {
        field: field.into(),
        expected: "a string",
    })
}

/// Two-byte big-endian length prefix, then the bytes. The length counts
/// bytes after UTF-8 encoding, never characters.
fn with_length_prefix(field: &str, bytes: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if bytes.len() > MAX_PREFIXED_FIELD_LENGTH {
        return Err(EncodeError::TooLong {
            field: field.into(),
            max: MAX_PREFIXED_FIELD_LENGTH,
            actual: bytes.len(),
        });
    }
    let mut buf = Vec::with_capacity(2 + bytes.len());
    buf.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
    buf.extend_from_slice(bytes);
    Ok(buf)
}

fn decode_base58(field: &str, text: &str, expected: usize) -> Result<Vec<u8>, EncodeError> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|_| EncodeError::InvalidBase58 {
            field: field.into(),
        })?;
    if bytes.len() != expected {
        return Err(EncodeError::WrongLength {
            field: field.into(),
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
