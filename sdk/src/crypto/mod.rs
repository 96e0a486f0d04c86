//! # Cryptographic Primitives
//!
//! Everything security-related in the SDK flows through here. The surface
//! is intentionally small: Ed25519 keypairs with base-58 text forms, and
//! the [`Signer`] capability that the transaction pipeline signs through.
//!
//! We deliberately chose boring, well-audited cryptography. Ed25519 is
//! fast, deterministic, and nobody has broken it; everything here is a
//! thin, type-safe wrapper around ed25519-dalek. If you're tempted to
//! optimize these functions, please reconsider. Then reconsider again.

pub mod keys;
pub mod signer;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy. Life's too short for five levels of `use` statements.
pub use keys::{public_key_from_base58, verify_base58, KeyError, LyraKeypair};
pub use signer::{Ed25519Signer, SignError, Signer};
