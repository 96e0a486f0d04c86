//! # Signing Capability
//!
//! The seam between transaction assembly and key custody.
//!
//! Everything upstream of this trait (schemas, encoding, payload assembly)
//! is pure and synchronous. Everything behind it can be as exotic as it
//! likes: an in-process Ed25519 key, a remote signing service, a hardware
//! token, or a deterministic stub in a test. Callers hand the capability in
//! explicitly, so swapping implementations never touches the pipeline.

use async_trait::async_trait;
use thiserror::Error;

use crate::crypto::keys::{KeyError, LyraKeypair};

/// Errors surfaced by signing backends.
#[derive(Debug, Error)]
pub enum SignError {
    #[error("invalid signing key: not base-58 text of a 32-byte key")]
    InvalidKey,

    #[error("signing backend rejected the request: {reason}")]
    Backend { reason: String },
}

impl From<KeyError> for SignError {
    fn from(_: KeyError) -> Self {
        SignError::InvalidKey
    }
}

/// A capability that turns canonical transaction bytes into a base-58
/// signature string.
///
/// `private_key` is base-58 text, the form keys take throughout the LYRA
/// API. Implementations that hold their own key material (hardware tokens,
/// remote custody) are free to ignore it.
#[async_trait]
pub trait Signer: Send + Sync {
    async fn sign(&self, message: &[u8], private_key: &str) -> Result<String, SignError>;
}

/// The stock in-process signer: reconstructs the Ed25519 keypair from the
/// supplied key and signs locally. Deterministic, so the same key and bytes
/// always produce the same signature text.
pub struct Ed25519Signer;

#[async_trait]
impl Signer for Ed25519Signer {
    async fn sign(&self, message: &[u8], private_key: &str) -> Result<String, SignError> {
        let keypair = LyraKeypair::from_base58(private_key)?;
        Ok(keypair.sign_base58(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::verify_base58;

    #[tokio::test]
    async fn ed25519_signer_output_verifies() {
        let kp = LyraKeypair::generate();
        let msg = b"canonical transaction bytes";

        let sig = Ed25519Signer
            .sign(msg, &kp.secret_key_base58())
            .await
            .unwrap();
        assert!(verify_base58(&kp.public_key_base58(), msg, &sig));
    }

    #[tokio::test]
    async fn ed25519_signer_is_deterministic() {
        let kp = LyraKeypair::generate();
        let key = kp.secret_key_base58();
        let msg = b"same bytes, same signature";

        let first = Ed25519Signer.sign(msg, &key).await.unwrap();
        let second = Ed25519Signer.sign(msg, &key).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, kp.sign_base58(msg));
    }

    #[tokio::test]
    async fn ed25519_signer_rejects_bad_keys() {
        let err = Ed25519Signer.sign(b"msg", "0OIl").await.unwrap_err();
        assert!(matches!(err, SignError::InvalidKey));

        // Valid base-58, wrong decoded length.
        let err = Ed25519Signer.sign(b"msg", "abc").await.unwrap_err();
        assert!(matches!(err, SignError::InvalidKey));
    }

    #[tokio::test]
    async fn signer_works_through_a_trait_object() {
        struct RefusingSigner;

        #[async_trait]
        impl Signer for RefusingSigner {
            async fn sign(&self, _message: &[u8], _key: &str) -> Result<String, SignError> {
                Err(SignError::Backend {
                    reason: "operator declined".into(),
                })
            }
        }

        let signers: Vec<Box<dyn Signer>> = vec![Box::new(Ed25519Signer), Box::new(RefusingSigner)];
        let kp = LyraKeypair::generate();

        assert!(signers[0]
            .sign(b"m", &kp.secret_key_base58())
            .await
            .is_ok());
        assert!(matches!(
            signers[1].sign(b"m", &kp.secret_key_base58()).await,
            Err(SignError::Backend { .. })
        ));
    }
}
