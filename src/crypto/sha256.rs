//! SHA-256 hashing

use sha2::{Digest, Sha256};

/// Calculate SHA-256 of input string and return as lowercase hex string (64 chars)
///
/// # Example
///
/// ```
/// use gymdesk::crypto::sha256_hex;
///
/// assert_eq!(
///     sha256_hex("admin"),
///     "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
/// );
/// ```
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    result.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Hash a password for storage
pub fn hash_password(password: &str) -> String {
    sha256_hex(password)
}

/// Check a typed password against a stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_ascii() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_is_deterministic_and_hex() {
        let h = hash_password("Senha@123");
        assert_eq!(h, hash_password("Senha@123"));
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_password() {
        let stored = hash_password("admin");
        assert!(verify_password("admin", &stored));
        assert!(verify_password("admin", &stored.to_uppercase()));
        assert!(!verify_password("Admin", &stored));
        assert!(!verify_password("", &stored));
    }
}
