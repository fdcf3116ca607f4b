use secrecy::SecretString;

pub mod accept;
pub mod encode;
pub mod handler;
pub mod policy;
pub mod transform;

pub use accept::AcceptUsers;
pub use handler::{UsernamePasswordHandler, VerificationStrategy};
pub use policy::PasswordPolicy;

/// A username/password pair submitted for authentication.
///
/// Created once per attempt and consumed by
/// [`UsernamePasswordHandler::authenticate`]; the cleartext password never
/// survives the call.
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }
}

/// Any credential a caller may submit. Callers route to a handler by checking
/// [`UsernamePasswordHandler::supports`] before authenticating.
#[non_exhaustive]
pub enum Credential {
    UsernamePassword(Credentials),
    Token(SecretString),
}

/// The resolved identity of a successfully authenticated credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal(pub String);

/// Returned by a [`VerificationStrategy`] on success and passed up unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    principal: Principal,
    warnings: Vec<String>,
}

impl HandlerResult {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: Principal(principal.into()),
            warnings: Vec::new(),
        }
    }

    /// Attaches a warning for the caller to surface (e.g. a password
    /// expiration hint).
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Why an authentication attempt was rejected.
///
/// Exactly one kind is produced per attempt, and which one is a fixed
/// contract: callers decide lockout and audit behavior on it.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// No identity could be established for the credential.
    #[error("account not found: {0}")]
    AccountNotFound(String),
    /// The identity exists but the credential is incomplete or wrong.
    #[error("failed login: {0}")]
    FailedLogin(String),
    /// The backend completed a verification attempt and rejected it.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    /// The outcome is indeterminate (backend unreachable, internal error).
    /// Must not be counted as a definitive failure, e.g. towards lockout.
    #[error("authentication prevented: {0}")]
    Prevented(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuthenticationError {
    pub fn prevented(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Prevented(source.into())
    }
}
