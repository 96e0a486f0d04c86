//! Transaction kinds and their field schemas.
//!
//! A schema is the single source of truth for one transaction kind: its
//! wire-format type tag, its API type name, and the ordered list of fields
//! with their encoding rules. Field order matters twice over. It is the
//! byte order of the canonical signing message and the key order of the
//! submission payload, so the tables below are consensus data, not
//! documentation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{ASSET_ID_LENGTH, PUBLIC_KEY_LENGTH, TRANSACTION_ID_LENGTH};

// ---------------------------------------------------------------------------
// TransactionKind
// ---------------------------------------------------------------------------

/// Discriminant for the operation a transaction represents.
///
/// The enum is closed on purpose: every kind the SDK can encode has a
/// schema, so "schema for an unsupported kind" is not a runtime condition,
/// it is a compile error at the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    /// Mint a brand-new asset into existence.
    Issue,
    /// Move an amount of the native token or an issued asset.
    Transfer,
    /// Mint additional supply of an existing reissuable asset.
    Reissue,
    /// Lock funds into a lease toward another account.
    Lease,
    /// Release a previously created lease.
    CancelLeasing,
    /// Register a short human-readable name for the sender's account.
    CreateAlias,
}

impl TransactionKind {
    /// The schema for this kind. Total by construction; there is no error
    /// path here and there never will be.
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Issue => &ISSUE_SCHEMA,
            Self::Transfer => &TRANSFER_SCHEMA,
            Self::Reissue => &REISSUE_SCHEMA,
            Self::Lease => &LEASE_SCHEMA,
            Self::CancelLeasing => &CANCEL_LEASING_SCHEMA,
            Self::CreateAlias => &CREATE_ALIAS_SCHEMA,
        }
    }
}

impl fmt::Display for TransactionKind {
    /// Renders the API type name (`transfer`, `createAlias`, ...), the same
    /// string that lands in the `transactionType` payload key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.schema().type_name)
    }
}

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// The encoding rule for a single schema field.
///
/// Each variant names a byte layout, not a Rust type: the caller supplies
/// JSON values and the encoder in [`crate::transaction::encode`] turns them
/// into exactly these shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// One byte, integer in [0, 255].
    Byte,
    /// Eight bytes, big-endian two's-complement integer.
    Long,
    /// Raw UTF-8 bytes of the string, no length prefix.
    Utf8,
    /// Two-byte big-endian byte-length prefix, then UTF-8 bytes.
    Utf8WithLength,
    /// One byte, 1 for true and 0 for false.
    Bool,
    /// Base-58 text decoding to exactly this many bytes, emitted raw.
    Base58(usize),
    /// Either the native-token sentinel (one zero byte) or a presence byte
    /// followed by a 32-byte asset id.
    OptionalAssetId,
    /// An address or an alias, distinguished by their leading version byte.
    Recipient,
    /// Length-prefixed raw bytes; empty input is a zero-length prefix.
    Attachment,
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// One named field inside a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// The field's API name, shared by input maps and output payloads.
    pub name: &'static str,
    /// How the field's value becomes wire bytes.
    pub field_type: FieldType,
}

/// The complete wire description of one transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// First byte of the canonical signing message.
    pub type_tag: u8,
    /// The API name carried in the `transactionType` payload key.
    pub type_name: &'static str,
    /// Fields in wire order. Also the payload key order.
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Looks up a single field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|def| def.name == name)
    }

    /// Whether `name` is one of this schema's fields.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

// ---------------------------------------------------------------------------
// Schema tables
// ---------------------------------------------------------------------------

// Tags 1, 2, 6 and 7 belong to network-internal operations (genesis,
// payment, burn votes) that clients never construct, so they have no
// schema here.

static ISSUE_SCHEMA: Schema = Schema {
    type_tag: 3,
    type_name: "issue",
    fields: &[
        FieldDef { name: "publicKey", field_type: FieldType::Base58(PUBLIC_KEY_LENGTH) },
        FieldDef { name: "name", field_type: FieldType::Utf8WithLength },
        FieldDef { name: "description", field_type: FieldType::Utf8WithLength },
        FieldDef { name: "quantity", field_type: FieldType::Long },
        FieldDef { name: "precision", field_type: FieldType::Byte },
        FieldDef { name: "reissuable", field_type: FieldType::Bool },
        FieldDef { name: "fee", field_type: FieldType::Long },
        FieldDef { name: "timestamp", field_type: FieldType::Long },
    ],
};

static TRANSFER_SCHEMA: Schema = Schema {
    type_tag: 4,
    type_name: "transfer",
    fields: &[
        FieldDef { name: "publicKey", field_type: FieldType::Base58(PUBLIC_KEY_LENGTH) },
        FieldDef { name: "assetId", field_type: FieldType::OptionalAssetId },
        FieldDef { name: "feeAssetId", field_type: FieldType::OptionalAssetId },
        FieldDef { name: "timestamp", field_type: FieldType::Long },
        FieldDef { name: "amount", field_type: FieldType::Long },
        FieldDef { name: "fee", field_type: FieldType::Long },
        FieldDef { name: "recipient", field_type: FieldType::Recipient },
        FieldDef { name: "attachment", field_type: FieldType::Attachment },
    ],
};

static REISSUE_SCHEMA: Schema = Schema {
    type_tag: 5,
    type_name: "reissue",
    fields: &[
        FieldDef { name: "publicKey", field_type: FieldType::Base58(PUBLIC_KEY_LENGTH) },
        FieldDef { name: "assetId", field_type: FieldType::Base58(ASSET_ID_LENGTH) },
        FieldDef { name: "quantity", field_type: FieldType::Long },
        FieldDef { name: "reissuable", field_type: FieldType::Bool },
        FieldDef { name: "fee", field_type: FieldType::Long },
        FieldDef { name: "timestamp", field_type: FieldType::Long },
    ],
};

static LEASE_SCHEMA: Schema = Schema {
    type_tag: 8,
    type_name: "lease",
    fields: &[
        FieldDef { name: "publicKey", field_type: FieldType::Base58(PUBLIC_KEY_LENGTH) },
        FieldDef { name: "recipient", field_type: FieldType::Recipient },
        FieldDef { name: "amount", field_type: FieldType::Long },
        FieldDef { name: "fee", field_type: FieldType::Long },
        FieldDef { name: "timestamp", field_type: FieldType::Long },
    ],
};

static CANCEL_LEASING_SCHEMA: Schema = Schema {
    type_tag: 9,
    type_name: "cancelLeasing",
    fields: &[
        FieldDef { name: "publicKey", field_type: FieldType::Base58(PUBLIC_KEY_LENGTH) },
        FieldDef { name: "fee", field_type: FieldType::Long },
        FieldDef { name: "timestamp", field_type: FieldType::Long },
        FieldDef { name: "transactionId", field_type: FieldType::Base58(TRANSACTION_ID_LENGTH) },
    ],
};

static CREATE_ALIAS_SCHEMA: Schema = Schema {
    type_tag: 10,
    type_name: "createAlias",
    fields: &[
        FieldDef { name: "publicKey", field_type: FieldType::Base58(PUBLIC_KEY_LENGTH) },
        FieldDef { name: "alias", field_type: FieldType::Utf8WithLength },
        FieldDef { name: "fee", field_type: FieldType::Long },
        FieldDef { name: "timestamp", field_type: FieldType::Long },
    ],
};

// ---------------------------------------------------------------------------
// SchemaError
// ---------------------------------------------------------------------------

/// Schema violations: the caller's field names don't match the kind's
/// schema. These are programmer errors in the caller and are reported
/// immediately and synchronously, never from inside the signing pipeline.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{kind} transaction is missing required field \"{field}\"")]
    MissingField { kind: TransactionKind, field: String },

    #[error("{kind} transaction has no field named \"{field}\"")]
    UnknownField { kind: TransactionKind, field: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [TransactionKind; 6] = [
        TransactionKind::Issue,
        TransactionKind::Transfer,
        TransactionKind::Reissue,
        TransactionKind::Lease,
        TransactionKind::CancelLeasing,
        TransactionKind::CreateAlias,
    ];

    #[test]
    fn schema_tags_and_names() {
        let expected = [
            (TransactionKind::Issue, 3, "issue", 8),
            (TransactionKind::Transfer, 4, "transfer", 8),
            (TransactionKind::Reissue, 5, "reissue", 6),
            (TransactionKind::Lease, 8, "lease", 5),
            (TransactionKind::CancelLeasing, 9, "cancelLeasing", 4),
            (TransactionKind::CreateAlias, 10, "createAlias", 4),
        ];
        for (kind, tag, name, field_count) in expected {
            let schema = kind.schema();
            assert_eq!(schema.type_tag, tag, "{name} tag");
            assert_eq!(schema.type_name, name);
            assert_eq!(schema.fields.len(), field_count, "{name} field count");
        }
    }

    #[test]
    fn tags_and_names_are_unique() {
        for (i, a) in ALL_KINDS.iter().enumerate() {
            for b in &ALL_KINDS[i + 1..] {
                assert_ne!(a.schema().type_tag, b.schema().type_tag);
                assert_ne!(a.schema().type_name, b.schema().type_name);
            }
        }
    }

    #[test]
    fn every_schema_leads_with_the_public_key() {
        // The node identifies the sender from the first 32 bytes after the
        // tag, so this holds for every kind we will ever ship.
        for kind in ALL_KINDS {
            let first = &kind.schema().fields[0];
            assert_eq!(first.name, "publicKey");
            assert_eq!(first.field_type, FieldType::Base58(PUBLIC_KEY_LENGTH));
        }
    }

    #[test]
    fn field_names_are_unique_within_each_schema() {
        for kind in ALL_KINDS {
            let fields = kind.schema().fields;
            for (i, a) in fields.iter().enumerate() {
                for b in &fields[i + 1..] {
                    assert_ne!(a.name, b.name, "duplicate field in {kind}");
                }
            }
        }
    }

    #[test]
    fn field_lookup() {
        let schema = TransactionKind::Transfer.schema();
        assert_eq!(
            schema.field("recipient").map(|d| d.field_type),
            Some(FieldType::Recipient)
        );
        assert!(schema.has_field("attachment"));
        assert!(schema.field("precision").is_none());
    }

    #[test]
    fn display_matches_api_type_name() {
        assert_eq!(TransactionKind::Transfer.to_string(), "transfer");
        assert_eq!(TransactionKind::CancelLeasing.to_string(), "cancelLeasing");
        assert_eq!(TransactionKind::CreateAlias.to_string(), "createAlias");
    }

    #[test]
    fn kind_serde_uses_api_type_names() {
        for kind in ALL_KINDS {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.schema().type_name));
            let recovered: TransactionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, recovered);
        }
    }

    #[test]
    fn schema_error_messages_name_the_kind_and_field() {
        let err = SchemaError::UnknownField {
            kind: TransactionKind::CreateAlias,
            field: "test".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("createAlias"));
        assert!(msg.contains("\"test\""));
    }
}
