// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # LYRA SDK: Client-Side Transaction Construction & Signing
//!
//! Everything a client needs to turn "send 100 LYRA to alice" into the
//! exact bytes the network will verify and the exact JSON body the node
//! API will accept. Nothing here talks to a node; this crate's whole job
//! is getting the bytes right, deterministically, every time.
//!
//! The stance is pragmatic: Ed25519 for signatures (because we're not
//! barbarians), base-58 for every piece of key material and every id
//! (because that is what humans paste into support tickets), and a
//! hand-rolled canonical byte format (because "the serializer probably
//! keeps field order" is not a consensus rule).
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! signing client:
//!
//! - **config**: Chain parameters, byte widths, and explicit network
//!   selection. No process-global "current network" to trip over.
//! - **crypto**: Ed25519 keypairs with base-58 text forms, and the
//!   [`Signer`](crypto::Signer) capability the pipeline signs through.
//! - **transaction**: Field schemas, the canonical encoder, the signing
//!   pipeline, and API payload assembly.
//!
//! ## Design Philosophy
//!
//! 1. The bytes are the contract. Same fields in, same bytes out, forever.
//! 2. Fail loudly and early. Nothing is coerced, defaulted, or truncated.
//! 3. Key custody is the caller's business. We take a capability, not a
//!    key store.
//! 4. If it touches money, it has tests. Plural.

pub mod config;
pub mod crypto;
pub mod transaction;
