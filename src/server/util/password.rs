use sha2::{Digest, Sha256};

/// Digests a plaintext password into the form stored on user rows.
///
/// # Arguments
/// - `password` - Plaintext password as supplied by the client
///
/// # Returns
/// - `String` - Lowercase hex SHA-256 of the UTF-8 password
pub fn digest_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
