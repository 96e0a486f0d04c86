//! The signing pipeline.
//!
//! Signing is a separate step from construction because the key material
//! may not live in this process at all: hardware wallet, remote custody
//! service, or a deterministic stub in a test. The pipeline is therefore
//! thin on purpose. Build the canonical message, hand it to the injected
//! [`Signer`], pass its answer (or its error) through untouched.

use tracing::{debug, trace};

use super::data::TransactionData;
use super::TxError;
use crate::crypto::Signer;

/// Signs a transaction's canonical bytes, returning base-58 signature text.
///
/// The signing procedure:
/// 1. Compute [`TransactionData::canonical_bytes`], the type tag followed
///    by every field's encoding in schema order. Any malformed value fails
///    here, before the signer is ever consulted.
/// 2. Hand the message and the caller's base-58 private key to the signer.
/// 3. Return the signer's base-58 signature text verbatim.
///
/// Nothing is retried, defaulted, or rewrapped: an encoding failure and a
/// signer failure both surface exactly once, as themselves.
///
/// # Example
///
/// ```rust,no_run
/// use lyra_sdk::config::TESTNET;
/// use lyra_sdk::crypto::{Ed25519Signer, LyraKeypair};
/// use lyra_sdk::transaction::{sign_transaction, TransactionData};
/// use serde_json::json;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let kp = LyraKeypair::generate();
/// let fields = json!({
///     "publicKey": kp.public_key_base58(),
///     "alias": "treasury",
///     "fee": 1_000_000,
///     "timestamp": 1_526_910_778_245_i64,
/// });
/// let tx = TransactionData::create_alias(fields.as_object().unwrap(), TESTNET)?;
/// let signature = sign_transaction(&tx, &Ed25519Signer, &kp.secret_key_base58()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn sign_transaction(
    tx: &TransactionData,
    signer: &dyn Signer,
    private_key: &str,
) -> Result<String, TxError> {
    let message = tx.canonical_bytes()?;
    trace!(
        kind = %tx.kind(),
        message = %hex::encode(&message),
        "canonical signing message"
    );

    let signature = signer.sign(&message, private_key).await?;
    debug!(
        kind = %tx.kind(),
        network = %tx.network(),
        message_len = message.len(),
        "transaction signed"
    );
    Ok(signature)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TESTNET;
    use crate::crypto::{verify_base58, Ed25519Signer, LyraKeypair, SignError};
    use crate::transaction::data::Fields;
    use async_trait::async_trait;
    use serde_json::json;

    /// Stub whose "signature" is the base-58 of whatever it was asked to
    /// sign, which makes the exact message visible in the output.
    struct EchoSigner;

    #[async_trait]
    impl Signer for EchoSigner {
        async fn sign(&self, message: &[u8], _key: &str) -> Result<String, SignError> {
            Ok(bs58::encode(message).into_string())
        }
    }

    struct RefusingSigner;

    #[async_trait]
    impl Signer for RefusingSigner {
        async fn sign(&self, _message: &[u8], _key: &str) -> Result<String, SignError> {
            Err(SignError::Backend {
                reason: "key ceremony in progress".into(),
            })
        }
    }

    /// Panics if consulted. Used to prove encoding failures never reach
    /// the signer.
    struct UnreachableSigner;

    #[async_trait]
    impl Signer for UnreachableSigner {
        async fn sign(&self, _message: &[u8], _key: &str) -> Result<String, SignError> {
            unreachable!("signer must not be called for unencodable data");
        }
    }

    fn alias_tx(public_key: &str) -> TransactionData {
        let fields: Fields = json!({
            "publicKey": public_key,
            "alias": "sasha",
            "fee": 1_000_000,
            "timestamp": 1_526_910_778_245_i64,
        })
        .as_object()
        .cloned()
        .unwrap();
        TransactionData::create_alias(&fields, TESTNET).unwrap()
    }

    #[tokio::test]
    async fn signer_receives_the_canonical_bytes() {
        let tx = alias_tx(&bs58::encode([7u8; 32]).into_string());
        let signature = sign_transaction(&tx, &EchoSigner, "ignored").await.unwrap();

        let expected = bs58::encode(tx.canonical_bytes().unwrap()).into_string();
        assert_eq!(signature, expected);
    }

    #[tokio::test]
    async fn production_signature_verifies_against_the_public_key() {
        let kp = LyraKeypair::generate();
        let tx = alias_tx(&kp.public_key_base58());

        let signature = sign_transaction(&tx, &Ed25519Signer, &kp.secret_key_base58())
            .await
            .unwrap();
        let message = tx.canonical_bytes().unwrap();
        assert!(verify_base58(&kp.public_key_base58(), &message, &signature));
    }

    #[tokio::test]
    async fn production_signing_is_deterministic() {
        let kp = LyraKeypair::generate();
        let tx = alias_tx(&kp.public_key_base58());
        let key = kp.secret_key_base58();

        let first = sign_transaction(&tx, &Ed25519Signer, &key).await.unwrap();
        let second = sign_transaction(&tx, &Ed25519Signer, &key).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn different_keys_produce_different_signatures() {
        let kp1 = LyraKeypair::generate();
        let kp2 = LyraKeypair::generate();
        let tx = alias_tx(&kp1.public_key_base58());

        let sig1 = sign_transaction(&tx, &Ed25519Signer, &kp1.secret_key_base58())
            .await
            .unwrap();
        let sig2 = sign_transaction(&tx, &Ed25519Signer, &kp2.secret_key_base58())
            .await
            .unwrap();
        assert_ne!(sig1, sig2);
    }

    #[tokio::test]
    async fn encoding_failures_never_reach_the_signer() {
        let fields: Fields = json!({
            "publicKey": bs58::encode([7u8; 32]).into_string(),
            "alias": "sasha",
            "fee": "a string where a long belongs",
            "timestamp": 1_526_910_778_245_i64,
        })
        .as_object()
        .cloned()
        .unwrap();
        let tx = TransactionData::create_alias(&fields, TESTNET).unwrap();

        let err = sign_transaction(&tx, &UnreachableSigner, "ignored")
            .await
            .unwrap_err();
        assert!(matches!(err, TxError::Encode(_)));
    }

    #[tokio::test]
    async fn signer_errors_propagate_unchanged() {
        let tx = alias_tx(&bs58::encode([7u8; 32]).into_string());
        let err = sign_transaction(&tx, &RefusingSigner, "ignored")
            .await
            .unwrap_err();

        match err {
            TxError::Sign(SignError::Backend { reason }) => {
                assert_eq!(reason, "key ceremony in progress");
            }
            other => panic!("expected the backend error, got {other:?}"),
        }
    }
}
