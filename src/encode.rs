use sha2::{Digest, Sha256};

/// Converts a cleartext password into the form compared against a backend's
/// stored representation.
///
/// Implementations must be deterministic and side-effect-free; the handler
/// relies on one invocation producing the value the strategy will see.
pub trait PasswordEncoder: Send + Sync {
    fn encode(&self, password: &str) -> String;
}

/// Passes the cleartext through unchanged. The default.
#[derive(Debug, Clone, Copy)]
pub struct NoOp;

impl PasswordEncoder for NoOp {
    fn encode(&self, password: &str) -> String {
        password.to_owned()
    }
}

/// Hex-encoded SHA-256 digest of the cleartext.
///
/// ```
/// use userpass::encode::{PasswordEncoder, Sha256Hex};
///
/// let encoded = Sha256Hex.encode("hunter2");
/// assert_eq!(encoded.len(), 64);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sha256Hex;

impl PasswordEncoder for Sha256Hex {
    fn encode(&self, password: &str) -> String {
        Sha256::digest(password.as_bytes())
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}
