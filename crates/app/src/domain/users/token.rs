//! API token generation and hashing.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Prefix identifying kart API tokens.
pub const API_TOKEN_PREFIX: &str = "kt";

const API_TOKEN_SECRET_BYTES: usize = 32;

/// Generate a fresh raw API token. Shown to the operator once; only its hash is stored.
#[must_use]
pub fn generate_token() -> String {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    format!("{API_TOKEN_PREFIX}_{}", encode_hex(&secret))
}

/// Hex-encoded SHA-256 digest of a raw API token.
#[must_use]
pub fn hash_token(token: &str) -> String {
    encode_hex(&Sha256::digest(token.as_bytes()))
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }

    encoded
}
