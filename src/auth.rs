//! Admin password verification and session token minting.

use crate::config::AdminConfig;
use base64::Engine as _;
use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hex-encoded SHA-256 digest, suitable for `admin.password_sha256`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compares a submitted password against the configured credential in
/// constant time. The digest form takes precedence; with neither configured
/// every attempt fails.
pub fn verify_password(cfg: &AdminConfig, submitted: &str) -> bool {
    let expected_digest = cfg.password_sha256.trim();
    if !expected_digest.is_empty() {
        let Ok(expected) = hex::decode(expected_digest) else {
            return false;
        };
        let actual = Sha256::digest(submitted.as_bytes());
        return actual.as_slice().ct_eq(expected.as_slice()).into();
    }

    let plain = cfg.password.trim();
    if plain.is_empty() {
        return false;
    }
    submitted.as_bytes().ct_eq(plain.as_bytes()).into()
}

/// Mints the opaque session token carried inside the private cookie:
/// base64url of the current epoch-millis plus a 128-bit random nonce. The
/// cookie's signature, not the token body, is what gets verified later.
pub fn mint_session_token() -> String {
    let mut nonce = [0u8; 16];
    rand::rng().fill_bytes(&mut nonce);
    let raw = format!("{}-{}", Utc::now().timestamp_millis(), hex::encode(nonce));
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}
