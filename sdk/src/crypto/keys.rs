//! # Key Material
//!
//! Ed25519 keypairs with base-58 text forms, the way every key travels
//! through the LYRA API surface.
//!
//! ## Why Ed25519?
//!
//! - Deterministic signatures (no k-value footguns like ECDSA).
//! - 128-bit security level in 32+32 bytes. Compact and sufficient.
//! - Signing the same canonical bytes twice yields the same signature,
//!   which makes client-side signing reproducible and testable.
//!
//! ## Security considerations
//!
//! - Secret keys are zeroized on drop (thanks, ed25519-dalek).
//! - Key generation uses the OS RNG (`OsRng`). If your OS RNG is broken,
//!   you have bigger problems than this SDK.
//! - Secret bytes are never logged. If you add logging to this module,
//!   you will be asked to leave.

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors from key parsing and reconstruction.
///
/// Intentionally vague about *why* something failed. Leaking details about
/// key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key: not base-58 text of a 32-byte key")]
    InvalidSecretKey,

    #[error("invalid public key: not base-58 text of a valid Ed25519 point")]
    InvalidPublicKey,
}

/// An account keypair wrapping an Ed25519 signing key.
///
/// Every LYRA transaction ultimately traces back to one of these: the
/// public half rides along in the `publicKey` field, the secret half signs
/// the canonical bytes.
///
/// ## Serialization
///
/// `LyraKeypair` intentionally does NOT implement `Serialize`/`Deserialize`.
/// Serializing secret keys should be a deliberate, conscious act, not
/// something that happens because someone shoved a keypair into a JSON
/// response. Use the explicit base-58 accessors.
///
/// # Examples
///
/// ```
/// use lyra_sdk::crypto::LyraKeypair;
///
/// let kp = LyraKeypair::generate();
/// let sig = kp.sign(b"send 100 LYRA to alice");
/// assert!(kp.verify(b"send 100 LYRA to alice", &sig));
/// ```
pub struct LyraKeypair {
    /// The Ed25519 signing (secret) key. 32 bytes of pure responsibility.
    signing_key: SigningKey,
}

impl LyraKeypair {
    /// Generates a fresh keypair from the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the 32-byte secret key *is* the seed, so this is also the
    /// "from raw secret bytes" constructor. A weak seed makes a weak key;
    /// feed it CSPRNG or KDF output only.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstructs a keypair from a base-58 secret key string, the form
    /// keys take everywhere in the LYRA API.
    pub fn from_base58(secret_key: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(secret_key)
            .into_vec()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SECRET_KEY_LENGTH] =
            bytes.as_slice().try_into().map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// Raw public key bytes. Safe to share, log, tattoo on your arm, etc.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Base-58 public key text, the on-chain identity string.
    pub fn public_key_base58(&self) -> String {
        bs58::encode(self.public_key_bytes()).into_string()
    }

    /// Base-58 secret key text.
    ///
    /// **Handle with extreme care.** This is the only secret between an
    /// attacker and full control of the account. Don't log it, don't send it
    /// anywhere in plaintext, don't store it in a file called `my_keys.txt`.
    pub fn secret_key_base58(&self) -> String {
        bs58::encode(self.signing_key.to_bytes()).into_string()
    }

    /// Signs a message, returning the raw 64-byte signature.
    ///
    /// Ed25519 is deterministic: the same (key, message) pair always yields
    /// the same signature. No nonce games, no randomness at signing time.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Signs a message and returns the signature as base-58 text, the form
    /// submitted to the network.
    pub fn sign_base58(&self, message: &[u8]) -> String {
        bs58::encode(self.sign(message)).into_string()
    }

    /// Verifies a signature made by this keypair.
    ///
    /// Anything malformed (wrong length included) is simply `false`. The
    /// vast majority of callers want a yes/no answer, not a failure taxonomy.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        let sig = Signature::from_bytes(&sig_bytes);
        self.signing_key.verifying_key().verify(message, &sig).is_ok()
    }
}

impl Clone for LyraKeypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    /// Every copy of a secret key is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for LyraKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material in debug output. Not even
        // "partially": a partial leak is still a leak.
        write!(f, "LyraKeypair(pub={})", self.public_key_base58())
    }
}

impl PartialEq for LyraKeypair {
    /// Two keypairs are equal if their public keys match. Comparing secret
    /// material in non-constant time is a habit we refuse to pick up.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for LyraKeypair {}

// ---------------------------------------------------------------------------
// Free verification helpers
// ---------------------------------------------------------------------------

/// Parses a base-58 public key string into a verifying key, rejecting
/// anything that does not decompress to a curve point.
pub fn public_key_from_base58(public_key: &str) -> Result<VerifyingKey, KeyError> {
    let bytes = bs58::decode(public_key)
        .into_vec()
        .map_err(|_| KeyError::InvalidPublicKey)?;
    let arr: [u8; PUBLIC_KEY_LENGTH] =
        bytes.as_slice().try_into().map_err(|_| KeyError::InvalidPublicKey)?;
    VerifyingKey::from_bytes(&arr).map_err(|_| KeyError::InvalidPublicKey)
}

/// Verifies a base-58 signature against a base-58 public key.
///
/// This is the receiving side of the SDK's whole job: a payload produced by
/// the signing pipeline must verify against its own `publicKey` field.
/// Malformed inputs of any kind verify as `false`.
pub fn verify_base58(public_key: &str, message: &[u8], signature: &str) -> bool {
    let Ok(verifying_key) = public_key_from_base58(public_key) else {
        return false;
    };
    let Ok(sig_vec) = bs58::decode(signature).into_vec() else {
        return false;
    };
    let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(sig_vec.as_slice()) else {
        return false;
    };
    let sig = Signature::from_bytes(&sig_bytes);
    verifying_key.verify(message, &sig).is_ok()
}
