//! # Chain Parameters & Constants
//!
//! Every magic number in the LYRA wire format lives here. If you're
//! hardcoding a byte width somewhere else, you're doing it wrong and you owe
//! the team coffee.
//!
//! The binary layout is position-dependent: a node decodes a signed message
//! by walking fields in schema order with these widths. Changing any of them
//! is a network fork, so don't.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Mainnet chain id. ASCII 'L' for LYRA, because a one-byte namespace may as
/// well be readable in a hex dump.
pub const CHAIN_ID_MAINNET: u8 = b'L'; // 0x4C

/// Testnet chain id. 'T' for testnet, where mistakes are free and encouraged.
pub const CHAIN_ID_TESTNET: u8 = b'T'; // 0x54

/// The ticker of the native token. Doubles as the "no asset id" sentinel in
/// optional asset fields: spending LYRA means there is no asset to reference.
pub const NATIVE_TOKEN: &str = "LYRA";

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 everywhere. Deterministic signatures, 128-bit security, and no
/// nonce-reuse footguns for SDK users to step on.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Ed25519 secret keys are 32 bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Public (verifying) keys are 32 bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signatures are 64 bytes. If yours isn't, something has gone
/// terribly wrong.
pub const SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Entity Widths
// ---------------------------------------------------------------------------

/// Asset ids are 32-byte hashes, carried around as base-58 text.
pub const ASSET_ID_LENGTH: usize = 32;

/// Transaction ids are 32-byte hashes, same text convention.
pub const TRANSACTION_ID_LENGTH: usize = 32;

/// Binary address width: version byte, chain id byte, 20-byte public key
/// hash, 4-byte checksum. 26 bytes, base-58 encoding to 35 or 36 characters.
pub const ADDRESS_LENGTH: usize = 26;

/// First byte of every binary address.
pub const ADDRESS_VERSION: u8 = 1;

/// First byte of an encoded alias reference. Distinct from
/// [`ADDRESS_VERSION`] so the two recipient layouts can never be confused.
pub const ALIAS_VERSION: u8 = 2;

/// Aliases are 4 to 30 characters by network rule. The upper bound is what
/// lets a recipient string be classified by length alone: base-58 text for a
/// 26-byte address is always 35+ characters.
pub const MIN_ALIAS_LENGTH: usize = 4;
pub const MAX_ALIAS_LENGTH: usize = 30;

/// Hard ceiling for any length-prefixed field. The wire format spends two
/// bytes on the prefix, so 65535 it is.
pub const MAX_PREFIXED_FIELD_LENGTH: usize = u16::MAX as usize;

// ---------------------------------------------------------------------------
// Network Selection
// ---------------------------------------------------------------------------

/// Which deployment of the chain a transaction targets. Passed explicitly
/// into transaction construction; there is no process-global "current
/// network" to mutate, and no way for two networks to cross-contaminate in
/// one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Network {
    /// Single byte that namespaces addresses and aliases per deployment.
    pub chain_id: u8,
}

/// The real deal. Mistakes here cost real money.
pub const MAINNET: Network = Network {
    chain_id: CHAIN_ID_MAINNET,
};

/// Where we break things on purpose and call it "testing."
pub const TESTNET: Network = Network {
    chain_id: CHAIN_ID_TESTNET,
};

impl Network {
    /// The chain id as an ASCII character, the form that appears inside
    /// rendered alias strings like `alias:T:treasury`.
    pub fn chain_char(&self) -> char {
        self.chain_id as char
    }

    /// Friendly name for logging. Unknown chain ids get a hex dump because
    /// we're helpful like that.
    pub fn name(&self) -> String {
        match self.chain_id {
            CHAIN_ID_MAINNET => "mainnet".to_string(),
            CHAIN_ID_TESTNET => "testnet".to_string(),
            other => format!("custom(0x{:02X})", other),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
