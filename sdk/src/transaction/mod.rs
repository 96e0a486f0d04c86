//! # Transaction Module
//!
//! Construction, canonical encoding, signing, and API payload assembly for
//! LYRA transactions. Everything between "here are my field values" and
//! "here is the JSON body to post" lives in this module.
//!
//! ## Architecture
//!
//! ```text
//! types.rs   — TransactionKind, FieldType, and the per-kind field schemas
//! encode.rs  — Pure field-value-to-bytes encoding rules
//! data.rs    — TransactionData snapshots and the byte accessors
//! signing.rs — The async signing pipeline over an injected Signer
//! prepare.rs — Submission payload assembly (type name, fields, signature)
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Construct** — [`TransactionData::new`] (or a per-kind convenience)
//!    validates field names against the kind's schema.
//! 2. **Encode** — [`TransactionData::canonical_bytes`] produces the exact
//!    message the network verifies signatures over.
//! 3. **Sign** — [`sign_transaction`] hands the message to an injected
//!    [`Signer`](crate::crypto::Signer).
//! 4. **Prepare** — [`prepare_for_api`] assembles the submission payload:
//!    type name, original fields, signature, in that order.
//!
//! ## Design Decisions
//!
//! - One generic [`TransactionData`] driven by schema tables instead of a
//!   struct per kind. Adding a transaction kind is one table entry, not a
//!   new type with its own serializer.
//! - The byte format is hand-rolled, not serde. Field order and widths are
//!   consensus data and must not depend on a serializer's behavior.
//! - The signer is injected, never constructed internally, so key custody
//!   stays out of this crate and tests can pin exact signatures.
//! - Errors stay per-concern ([`SchemaError`], [`EncodeError`],
//!   [`SignError`](crate::crypto::SignError)); [`TxError`] only aggregates
//!   them at the operations that can hit more than one concern.

use thiserror::Error;

pub mod data;
pub mod encode;
pub mod prepare;
pub mod signing;
pub mod types;

pub use data::{Fields, TransactionData};
pub use encode::EncodeError;
pub use prepare::{prepare_for_api, Payload};
pub use signing::sign_transaction;
pub use types::{FieldDef, FieldType, Schema, SchemaError, TransactionKind};

/// Anything that can go wrong between field values and a signed payload.
///
/// Transparent on purpose: the underlying error's message passes through
/// unchanged, so matching on the variant is for control flow, not for
/// reconstructing what happened.
#[derive(Debug, Error)]
pub enum TxError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Sign(#[from] crate::crypto::SignError),
}
