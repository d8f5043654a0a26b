//! Verification code hashing.
//!
//! Codes are stored as salted SHA-256 hex digests; the security code gets a
//! `security:` prefix so the two hashes never collide for equal inputs.

use hex::encode;
use sha2::{Digest, Sha256};

const SECURITY_PREFIX: &str = "security:";

/// Trims and upper-cases a raw code before hashing or storage.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Hashes a normalized verification code.
pub fn hash_code(code: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hasher.update(salt.as_bytes());
    encode(hasher.finalize())
}

/// Hashes a normalized security code.
pub fn hash_security_code(security_code: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(SECURITY_PREFIX.as_bytes());
    hasher.update(security_code.as_bytes());
    hasher.update(salt.as_bytes());
    encode(hasher.finalize())
}

/// Returns the last four characters of `value`, or all of it if shorter.
pub fn last4(value: &str) -> String {
    let len = value.chars().count();
    value.chars().skip(len.saturating_sub(4)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SALT;
    use crate::generators::{ADMIN_CODE_HASH, ADMIN_SECURITY_HASH};

    #[test]
    fn test_admin_hashes_match_default_salt() {
        assert_eq!(hash_code("012345678", DEFAULT_SALT), ADMIN_CODE_HASH);
        assert_eq!(hash_security_code("1234", DEFAULT_SALT), ADMIN_SECURITY_HASH);
    }

    #[test]
    fn test_salt_changes_hash() {
        assert_ne!(
            hash_code("012345678", "other-salt"),
            hash_code("012345678", DEFAULT_SALT)
        );
    }

    #[test]
    fn test_security_prefix_separates_hashes() {
        assert_ne!(hash_code("1234", DEFAULT_SALT), hash_security_code("1234", DEFAULT_SALT));
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let hash = hash_code("ABC", "salt");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  ab-12cd \n"), "AB-12CD");
        assert_eq!(normalize("012345678"), "012345678");
    }

    #[test]
    fn test_last4() {
        assert_eq!(last4("012345678"), "5678");
        assert_eq!(last4("1234"), "1234");
        assert_eq!(last4("12"), "12");
        assert_eq!(last4(""), "");
    }
}
