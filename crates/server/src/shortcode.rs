use sha2::{Digest, Sha256};

/// Characters a short code is drawn from.
pub const CODE_ALPHABET: &[u8; 62] =
    b"QWERTYUIOPASDFGHJKLZXCVBNMqwertyuiopasdfghjklzxcvbnm1234567890";

/// Length of every generated short code.
pub const CODE_LEN: usize = 12;

/// Derive the short code for a source URL.
///
/// The code is a base-62 rendering of the first 128 bits of the URL's
/// SHA-256 digest, so the same URL always maps to the same code.
pub fn short_code(full_url: &str) -> String {
    let digest = Sha256::digest(full_url.as_bytes());
    let mut head = [0u8; 16];
    head.copy_from_slice(&digest[..16]);
    let mut n = u128::from_be_bytes(head);

    let base = CODE_ALPHABET.len() as u128;
    let mut code = String::with_capacity(CODE_LEN);
    for _ in 0..CODE_LEN {
        code.push(CODE_ALPHABET[(n % base) as usize] as char);
        n /= base;
    }
    code
}
