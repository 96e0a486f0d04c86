//! Transaction instances.
//!
//! A [`TransactionData`] is an immutable snapshot of caller-supplied field
//! values bound to a kind and a network. Construction checks the field
//! *names* against the schema and fails fast; value problems (a fee that is
//! a string, a public key that isn't base-58) surface later as encoding
//! errors, because that is the first moment the value actually matters.

use serde_json::{Map, Value};

use super::encode::encode_value;
use super::types::{Schema, SchemaError, TransactionKind};
use super::TxError;
use crate::config::Network;

/// Caller-supplied field values, keyed by schema field name.
///
/// Insertion order is irrelevant here: byte order and payload order both
/// come from the schema, never from the map.
pub type Fields = Map<String, Value>;

/// One transaction's worth of data, ready to encode and sign.
///
/// The field map is cloned at construction, so mutating the caller's map
/// afterwards cannot change what gets signed. The network is captured at
/// the same moment for the same reason: encoding is a pure function of the
/// instance and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionData {
    kind: TransactionKind,
    network: Network,
    fields: Fields,
}

impl TransactionData {
    /// Builds an instance after validating the field names against the
    /// kind's schema: every declared field must be present and nothing
    /// undeclared may tag along. Both violations are caller bugs and fail
    /// here, synchronously, before any encoding or signing work.
    pub fn new(kind: TransactionKind, fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        let schema = kind.schema();

        for def in schema.fields {
            if !fields.contains_key(def.name) {
                return Err(SchemaError::MissingField {
                    kind,
                    field: def.name.to_string(),
                });
            }
        }
        for name in fields.keys() {
            if !schema.has_field(name) {
                return Err(SchemaError::UnknownField {
                    kind,
                    field: name.clone(),
                });
            }
        }

        Ok(Self {
            kind,
            network,
            fields: fields.clone(),
        })
    }

    /// Transfer of the native token or an issued asset.
    pub fn transfer(fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        Self::new(TransactionKind::Transfer, fields, network)
    }

    /// Issue of a brand-new asset.
    pub fn issue(fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        Self::new(TransactionKind::Issue, fields, network)
    }

    /// Reissue of additional supply for an existing asset.
    pub fn reissue(fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        Self::new(TransactionKind::Reissue, fields, network)
    }

    /// Lease of funds toward another account.
    pub fn lease(fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        Self::new(TransactionKind::Lease, fields, network)
    }

    /// Cancellation of an active lease.
    pub fn cancel_leasing(fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        Self::new(TransactionKind::CancelLeasing, fields, network)
    }

    /// Registration of an account alias.
    pub fn create_alias(fields: &Fields, network: Network) -> Result<Self, SchemaError> {
        Self::new(TransactionKind::CreateAlias, fields, network)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn schema(&self) -> &'static Schema {
        self.kind.schema()
    }

    /// The snapshotted field values.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The canonical signing message: the schema's type tag, then every
    /// field's encoding in schema order, concatenated with no separators.
    ///
    /// Deterministic by construction. Two equal instances produce
    /// byte-identical output on every call, which is what makes signatures
    /// over this message meaningful.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, TxError> {
        let schema = self.schema();
        let mut buf = Vec::with_capacity(64);
        buf.push(schema.type_tag);
        for def in schema.fields {
            let value = self.value_of(def.name)?;
            let encoded = encode_value(def.name, def.field_type, value, self.network)?;
            buf.extend_from_slice(&encoded);
        }
        Ok(buf)
    }

    /// The encoded bytes of a single field, exactly as they appear inside
    /// [`canonical_bytes`](Self::canonical_bytes).
    ///
    /// Entirely synchronous: an unknown field name fails right here, before
    /// any encoding work happens.
    pub fn exact_bytes(&self, field: &str) -> Result<Vec<u8>, TxError> {
        let def = self
            .schema()
            .field(field)
            .ok_or_else(|| SchemaError::UnknownField {
                kind: self.kind,
                field: field.to_string(),
            })?;
        let value = self.value_of(def.name)?;
        Ok(encode_value(def.name, def.field_type, value, self.network)?)
    }

    // Construction guarantees presence; the lookup stays fallible anyway so
    // no code path in this crate can panic on a field name.
    fn value_of(&self, name: &str) -> Result<&Value, SchemaError> {
        self.fields.get(name).ok_or_else(|| SchemaError::MissingField {
            kind: self.kind,
            field: name.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAINNET, TESTNET};
    use serde_json::json;

    fn fields_of(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    fn alias_fields(public_key: &str) -> Fields {
        fields_of(json!({
            "publicKey": public_key,
            "alias": "sasha",
            "fee": 1_000_000,
            "timestamp": 1_526_910_778_245_i64,
        }))
    }

    fn test_public_key() -> String {
        bs58::encode([7u8; 32]).into_string()
    }

    #[test]
    fn construction_requires_every_schema_field() {
        let mut fields = alias_fields(&test_public_key());
        fields.remove("fee");

        let err = TransactionData::create_alias(&fields, TESTNET).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingField { ref field, .. } if field == "fee"
        ));
    }

    #[test]
    fn construction_rejects_undeclared_fields() {
        let mut fields = alias_fields(&test_public_key());
        fields.insert("memo".into(), json!("not in any schema"));

        let err = TransactionData::create_alias(&fields, TESTNET).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownField { ref field, .. } if field == "memo"
        ));
    }

    #[test]
    fn construction_accepts_malformed_values() {
        // Field names are checked here; the value itself is an encoding
        // concern and must not fail until the bytes are actually needed.
        let mut fields = alias_fields(&test_public_key());
        fields.insert("fee".into(), json!("a lot"));

        let tx = TransactionData::create_alias(&fields, TESTNET).unwrap();
        assert!(matches!(
            tx.canonical_bytes(),
            Err(TxError::Encode(_))
        ));
    }

    #[test]
    fn instance_is_a_defensive_snapshot() {
        let mut fields = alias_fields(&test_public_key());
        let tx = TransactionData::create_alias(&fields, TESTNET).unwrap();
        let before = tx.canonical_bytes().unwrap();

        // Caller keeps mutating their map after construction.
        fields.insert("alias".into(), json!("evil"));
        fields.insert("fee".into(), json!(9_999_999));

        assert_eq!(tx.canonical_bytes().unwrap(), before);
    }

    #[test]
    fn canonical_bytes_start_with_the_type_tag() {
        let tx = TransactionData::create_alias(&alias_fields(&test_public_key()), TESTNET).unwrap();
        assert_eq!(tx.canonical_bytes().unwrap()[0], 10);
    }

    #[test]
    fn canonical_bytes_follow_schema_order() {
        let tx = TransactionData::create_alias(&alias_fields(&test_public_key()), TESTNET).unwrap();

        let mut expected = vec![10u8];
        expected.extend_from_slice(&[7u8; 32]);
        expected.extend_from_slice(&[0, 5]);
        expected.extend_from_slice(b"sasha");
        expected.extend_from_slice(&1_000_000_i64.to_be_bytes());
        expected.extend_from_slice(&1_526_910_778_245_i64.to_be_bytes());

        assert_eq!(tx.canonical_bytes().unwrap(), expected);
    }

    #[test]
    fn canonical_bytes_are_deterministic() {
        let fields = alias_fields(&test_public_key());
        let tx1 = TransactionData::create_alias(&fields, TESTNET).unwrap();
        let tx2 = TransactionData::create_alias(&fields, TESTNET).unwrap();

        assert_eq!(tx1, tx2);
        assert_eq!(tx1.canonical_bytes().unwrap(), tx1.canonical_bytes().unwrap());
        assert_eq!(tx1.canonical_bytes().unwrap(), tx2.canonical_bytes().unwrap());
    }

    #[test]
    fn exact_bytes_match_their_canonical_slice() {
        let tx = TransactionData::create_alias(&alias_fields(&test_public_key()), TESTNET).unwrap();

        let pk = tx.exact_bytes("publicKey").unwrap();
        assert_eq!(pk, [7u8; 32]);
        assert_eq!(pk, &tx.canonical_bytes().unwrap()[1..33]);

        assert_eq!(tx.exact_bytes("alias").unwrap(), b"\x00\x05sasha");
    }

    #[test]
    fn exact_bytes_reject_unknown_fields_before_encoding() {
        let tx = TransactionData::create_alias(&alias_fields(&test_public_key()), TESTNET).unwrap();
        let err = tx.exact_bytes("test").unwrap_err();
        assert!(matches!(
            err,
            TxError::Schema(SchemaError::UnknownField { ref field, .. }) if field == "test"
        ));
    }

    #[test]
    fn network_is_captured_at_construction() {
        let fields = fields_of(json!({
            "publicKey": test_public_key(),
            "recipient": "treasury",
            "amount": 200_000_000_i64,
            "fee": 100_000,
            "timestamp": 1_526_910_778_245_i64,
        }));

        let testnet = TransactionData::lease(&fields, TESTNET).unwrap();
        let mainnet = TransactionData::lease(&fields, MAINNET).unwrap();

        // The alias recipient embeds the chain id, so the two messages must
        // differ even though the caller's fields are identical.
        assert_ne!(testnet.canonical_bytes().unwrap(), mainnet.canonical_bytes().unwrap());
        assert_eq!(testnet.network(), TESTNET);
        assert_eq!(mainnet.network(), MAINNET);
    }

    #[test]
    fn all_six_conveniences_reach_the_right_schema() {
        let cases = [
            (TransactionData::transfer as fn(&Fields, Network) -> Result<TransactionData, SchemaError>, TransactionKind::Transfer),
            (TransactionData::issue, TransactionKind::Issue),
            (TransactionData::reissue, TransactionKind::Reissue),
            (TransactionData::lease, TransactionKind::Lease),
            (TransactionData::cancel_leasing, TransactionKind::CancelLeasing),
            (TransactionData::create_alias, TransactionKind::CreateAlias),
        ];
        for (constructor, kind) in cases {
            // An empty map always violates the schema, and the error names
            // the kind the convenience was supposed to target.
            let err = constructor(&Fields::new(), TESTNET).unwrap_err();
            assert!(matches!(
                err,
                SchemaError::MissingField { kind: k, .. } if k == kind
            ));
        }
    }
}
