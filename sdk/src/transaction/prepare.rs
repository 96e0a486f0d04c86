//! API payload assembly.
//!
//! The last stop before the network: combine the caller's original field
//! values with the type name and a fresh signature into the JSON object the
//! node's HTTP API expects. Submission itself is out of scope; the output
//! here is the exact body a caller posts.

use serde_json::{Map, Value};
use tracing::debug;

use super::data::TransactionData;
use super::encode::{is_alias, EncodeError};
use super::signing::sign_transaction;
use super::types::{FieldDef, FieldType, SchemaError};
use super::TxError;
use crate::config::Network;
use crate::crypto::Signer;

/// A submission-ready payload.
///
/// Key order is meaningful and preserved: `transactionType` first, then the
/// schema's fields in schema order, then `signature`. Serializing the map
/// emits keys in exactly that order.
pub type Payload = Map<String, Value>;

/// Signs the transaction and assembles the API payload.
///
/// The signature is produced first; if anything about the data cannot be
/// encoded, the caller gets that error and no payload at all. There is no
/// such thing as a partially filled payload.
///
/// Most fields pass through exactly as the caller supplied them. Two get an
/// API-facing rendering:
///
/// - recipients become `address:<text>` or `alias:<chain char>:<text>`, so
///   the node never re-runs the classification this SDK already did;
/// - attachments become base-58 text of their length-prefixed bytes, the
///   submission format's one genuine quirk.
pub async fn prepare_for_api(
    tx: &TransactionData,
    signer: &dyn Signer,
    private_key: &str,
) -> Result<Payload, TxError> {
    let signature = sign_transaction(tx, signer, private_key).await?;

    let schema = tx.schema();
    let mut payload = Payload::new();
    payload.insert(
        "transactionType".to_string(),
        Value::String(schema.type_name.to_string()),
    );
    for def in schema.fields {
        payload.insert(def.name.to_string(), render_field(tx, def)?);
    }
    payload.insert("signature".to_string(), Value::String(signature));

    debug!(kind = %tx.kind(), keys = payload.len(), "payload assembled");
    Ok(payload)
}

fn render_field(tx: &TransactionData, def: &FieldDef) -> Result<Value, TxError> {
    let raw = tx
        .fields()
        .get(def.name)
        .ok_or_else(|| SchemaError::MissingField {
            kind: tx.kind(),
            field: def.name.to_string(),
        })?;

    match def.field_type {
        FieldType::Recipient => {
            let text = raw.as_str().ok_or_else(|| EncodeError::TypeMismatch {
                field: def.name.into(),
                expected: "a string",
            })?;
            Ok(Value::String(render_recipient(text, tx.network())))
        }
        FieldType::Attachment => {
            let bytes = tx.exact_bytes(def.name)?;
            Ok(Value::String(bs58::encode(bytes).into_string()))
        }
        _ => Ok(raw.clone()),
    }
}

/// Tags a recipient string with what it is, in the form the API expects.
fn render_recipient(text: &str, network: Network) -> String {
    if is_alias(text) {
        format!("alias:{}:{}", network.chain_char(), text)
    } else {
        format!("address:{text}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
