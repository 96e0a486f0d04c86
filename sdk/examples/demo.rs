//! Interactive CLI demo of the full LYRA SDK lifecycle.
//!
//! Walks through keypair custody, network selection, canonical byte
//! encoding, Ed25519 signing, and API payload assembly for every
//! transaction kind. The output uses ANSI escape codes for colored,
//! storytelling-style terminal rendering.
//!
//! Run with:
//!   cargo run --example demo --release

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lyra_sdk::config::TESTNET;
use lyra_sdk::crypto::{verify_base58, Ed25519Signer, LyraKeypair};
use lyra_sdk::transaction::{
    prepare_for_api, sign_transaction, Fields, TransactionData, TransactionKind,
};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

const BG_BLUE: &str = "\x1b[44m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn banner() {
    println!();
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    LYRA SDK  --  Transaction Encoding & Signing Demo               {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    Version 0.1.0  |  Ed25519 + base-58 + canonical bytes           {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!();
}

fn section(num: u32, title: &str) {
    println!();
    println!(
        "{BOLD}{CYAN}===[{YELLOW} Step {num} {CYAN}]=============================================================={RESET}"
    );
    println!("{BOLD}{WHITE}  {title}{RESET}");
    println!(
        "{CYAN}------------------------------------------------------------------------{RESET}"
    );
}

fn subsection(text: &str) {
    println!("{DIM}{CYAN}  >> {text}{RESET}");
}

fn success(text: &str) {
    println!("{GREEN}  [OK] {text}{RESET}");
}

fn info(label: &str, value: &str) {
    println!("{WHITE}  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

fn timing(label: &str, elapsed: std::time::Duration) {
    let ms = elapsed.as_secs_f64() * 1000.0;
    println!("{DIM}{MAGENTA}  [{label}: {ms:.2} ms]{RESET}");
}

fn separator() {
    println!(
        "{DIM}{CYAN}  . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . {RESET}"
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Wire up a pretty tracing subscriber so the SDK's debug events show up
/// interleaved with the demo output. `RUST_LOG` overrides the default.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lyra_sdk=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_line_number(false))
        .init();
}

/// Unwraps the object inside a `json!` fixture.
fn obj(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other:?}"),
    }
}

/// A plausible field map for each transaction kind, timestamped `now`.
fn sample_fields(kind: TransactionKind, public_key: &str, asset: &str, now: i64) -> Fields {
    match kind {
        TransactionKind::Transfer => obj(json!({
            "publicKey": public_key,
            "assetId": "LYRA",
            "feeAssetId": "LYRA",
            "timestamp": now,
            "amount": 250_000,
            "fee": 100_000,
            "recipient": "treasury",
            "attachment": "paid in full",
        })),
        TransactionKind::Issue => obj(json!({
            "publicKey": public_key,
            "name": "ЗОЛОТО",
            "description": "Gold-backed settlement token",
            "quantity": 10_000_000_000_i64,
            "precision": 8,
            "reissuable": true,
            "fee": 100_000_000,
            "timestamp": now,
        })),
        TransactionKind::Reissue => obj(json!({
            "publicKey": public_key,
            "assetId": asset,
            "quantity": 500_000,
            "reissuable": false,
            "fee": 100_000_000,
            "timestamp": now,
        })),
        TransactionKind::Lease => obj(json!({
            "publicKey": public_key,
            "recipient": "treasury",
            "amount": 42_000_000,
            "fee": 100_000,
            "timestamp": now,
        })),
        TransactionKind::CancelLeasing => obj(json!({
            "publicKey": public_key,
            "fee": 100_000,
            "timestamp": now,
            "transactionId": asset,
        })),
        TransactionKind::CreateAlias => obj(json!({
            "publicKey": public_key,
            "alias": "treasury",
            "fee": 1_000_000,
            "timestamp": now,
        })),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let demo_start = Instant::now();

    init_logging();
    banner();

    // -----------------------------------------------------------------------
    // Step 1: Keypair Custody
    // -----------------------------------------------------------------------

    section(1, "Ed25519 Keypair Generation & Custody");
    subsection("Generating a signing keypair and checking its log hygiene...");

    let t = Instant::now();
    let keypair = LyraKeypair::generate();
    timing("keygen", t.elapsed());

    let public_key = keypair.public_key_base58();
    let secret_key = keypair.secret_key_base58();

    info("Public key", &public_key);
    info("Secret key length", &format!("{} base-58 chars", secret_key.len()));
    info("Debug form", &format!("{keypair:?}"));
    success("Debug output names the public key only; the secret stays out of logs");

    // -----------------------------------------------------------------------
    // Step 2: Network Selection
    // -----------------------------------------------------------------------

    section(2, "Network Selection");
    subsection("Pinning the testnet chain id into every alias this demo encodes...");

    info("Network", &TESTNET.name());
    info("Chain id", &format!("{} ({:?})", TESTNET.chain_id, TESTNET.chain_char()));
    success("Transactions built below cannot be replayed on mainnet");

    // -----------------------------------------------------------------------
    // Step 3: Transfer Construction & Canonical Encoding
    // -----------------------------------------------------------------------

    section(3, "Transfer Construction & Canonical Encoding");
    subsection("Validating fields against the transfer schema and encoding them...");

    let now = Utc::now().timestamp_millis();
    let asset = bs58::encode([7u8; 32]).into_string();

    let t = Instant::now();
    let transfer = TransactionData::transfer(
        &sample_fields(TransactionKind::Transfer, &public_key, &asset, now),
        TESTNET,
    )?;
    let canonical = transfer.canonical_bytes()?;
    timing("validate + encode", t.elapsed());

    info("Type tag", &canonical[0].to_string());
    info("Canonical length", &format!("{} bytes", canonical.len()));
    info("First bytes", &format!("{}...", &hex::encode(&canonical)[..32]));
    success("Byte stream is deterministic: same fields, same bytes, every time");

    // -----------------------------------------------------------------------
    // Step 4: Signing & Verification
    // -----------------------------------------------------------------------

    section(4, "Signing & Verification");
    subsection("Signing the canonical bytes through the async signer seam...");

    let signer = Ed25519Signer;

    let t = Instant::now();
    let signature = sign_transaction(&transfer, &signer, &secret_key).await?;
    timing("Ed25519 sign", t.elapsed());

    info("Signature", &format!("{}...", &signature[..32]));
    info("Signature length", &format!("{} base-58 chars", signature.len()));

    subsection("Verifying the signature against the embedded public key...");
    let t = Instant::now();
    let valid = verify_base58(&public_key, &canonical, &signature);
    timing("Ed25519 verify", t.elapsed());

    assert!(valid, "signature must verify against its own canonical bytes");
    success("Signature verified against the canonical byte stream");

    // -----------------------------------------------------------------------
    // Step 5: API Payload Assembly
    // -----------------------------------------------------------------------

    section(5, "API Payload Assembly");
    subsection("Signing and rendering the submission payload in one call...");

    let t = Instant::now();
    let payload = prepare_for_api(&transfer, &signer, &secret_key).await?;
    timing("prepare_for_api", t.elapsed());

    println!();
    let pretty = serde_json::to_string_pretty(&payload)?;
    for line in pretty.lines() {
        println!("  {DIM}{line}{RESET}");
    }
    println!();

    success("Keys ride in submission order: type first, schema order, signature last");
    success("Recipient and attachment carry their API renderings");

    // -----------------------------------------------------------------------
    // Step 6: Byte Counting on Multibyte Metadata
    // -----------------------------------------------------------------------

    section(6, "Byte Counting on Multibyte Metadata");
    subsection("Issuing an asset whose Cyrillic name is longer in bytes than chars...");

    let issue = TransactionData::issue(
        &sample_fields(TransactionKind::Issue, &public_key, &asset, now),
        TESTNET,
    )?;
    let name_bytes = issue.exact_bytes("name")?;

    info("Asset name", "ЗОЛОТО");
    info("Characters", &"ЗОЛОТО".chars().count().to_string());
    info(
        "Encoded",
        &format!(
            "{} bytes (2-byte prefix + {} UTF-8 bytes)",
            name_bytes.len(),
            name_bytes.len() - 2
        ),
    );
    success("Length prefixes count UTF-8 bytes, never characters");

    // -----------------------------------------------------------------------
    // Step 7: The Full Registry
    // -----------------------------------------------------------------------

    section(7, "The Full Registry: Six Kinds, Six Tags");
    subsection("Encoding one transaction of every kind against the same keypair...");

    println!();
    for kind in [
        TransactionKind::Issue,
        TransactionKind::Transfer,
        TransactionKind::Reissue,
        TransactionKind::Lease,
        TransactionKind::CancelLeasing,
        TransactionKind::CreateAlias,
    ] {
        let tx = TransactionData::new(kind, &sample_fields(kind, &public_key, &asset, now), TESTNET)?;
        let bytes = tx.canonical_bytes()?;
        let name = kind.to_string();
        println!(
            "  {CYAN}{BOLD}{name:<14}{RESET} tag={YELLOW}{:>2}{RESET}  bytes={WHITE}{:>3}{RESET}  {DIM}{}...{RESET}",
            bytes[0],
            bytes.len(),
            &hex::encode(&bytes)[..16]
        );
    }
    println!();

    separator();
    success("Every kind encoded through the same table-driven path");

    // -----------------------------------------------------------------------
    // Final Summary
    // -----------------------------------------------------------------------

    let total_elapsed = demo_start.elapsed();

    println!();
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    DEMO COMPLETE -- Final Summary                                  {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!();

    println!("  {BOLD}{WHITE}SDK Statistics:{RESET}");
    println!("  {DIM}----------------------------------------------{RESET}");
    info("Transaction kinds", "6 (issue, transfer, reissue, lease, cancelLeasing, createAlias)");
    info("Signing algorithm", "Ed25519 (ed25519-dalek 2.1)");
    info("Encoding", "type tag + schema-ordered big-endian fields");
    info("Text format", "base-58 (Bitcoin alphabet) for keys, ids, signatures");
    info("Signer seam", "async trait object, production + stub impls");
    println!();

    println!(
        "  {BOLD}{GREEN}Total demo time: {:.2}s{RESET}",
        total_elapsed.as_secs_f64()
    );
    println!();

    Ok(())
}
