use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::{
    encode::{self, PasswordEncoder},
    policy::PasswordPolicy,
    transform::{self, PrincipalNameTransformer},
    AuthenticationError, Credential, Credentials, HandlerResult,
};

/// Backend-specific credential verification, e.g. an LDAP bind or a database
/// lookup.
///
/// The credential handed to [`verify`](Self::verify) is already normalized:
/// both fields are non-blank and the password holds whatever the handler's
/// encoder produced. Implementations must not re-check blankness and must not
/// assume a particular encoding scheme.
///
/// `Ok(None)` means no principal could be resolved without it being an error;
/// the handler passes it through untouched. A definitive mismatch is
/// [`AuthenticationError::AuthenticationFailed`] (or
/// [`FailedLogin`](AuthenticationError::FailedLogin) where the backend can
/// tell the password itself was wrong); an indeterminate outcome is
/// [`AuthenticationError::Prevented`].
#[async_trait::async_trait]
pub trait VerificationStrategy: Send + Sync {
    async fn verify(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<HandlerResult>, AuthenticationError>;
}

/// Validates and normalizes a username/password credential, then delegates
/// verification to a [`VerificationStrategy`].
///
/// The transformer, encoder and policy are fixed at construction; a handler
/// can be shared freely across concurrent callers.
pub struct UsernamePasswordHandler<S> {
    strategy: S,
    transformer: Box<dyn PrincipalNameTransformer>,
    encoder: Box<dyn PasswordEncoder>,
    policy: Option<PasswordPolicy>,
}

impl<S> UsernamePasswordHandler<S> {
    /// Creates a handler with the no-op transformer and encoder and no
    /// password policy.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            transformer: Box::new(transform::NoOp),
            encoder: Box::new(encode::NoOp),
            policy: None,
        }
    }

    pub fn with_transformer(mut self, transformer: impl PrincipalNameTransformer + 'static) -> Self {
        self.transformer = Box::new(transformer);
        self
    }

    pub fn with_encoder(mut self, encoder: impl PasswordEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// The password policy handle, if one was configured. Read-only; this
    /// layer does not interpret it.
    pub fn password_policy(&self) -> Option<&PasswordPolicy> {
        self.policy.as_ref()
    }

    /// Whether this handler can authenticate the given credential. Callers
    /// must route on this before calling
    /// [`authenticate`](Self::authenticate).
    pub fn supports(&self, credential: &Credential) -> bool {
        matches!(credential, Credential::UsernamePassword(_))
    }
}

impl<S: VerificationStrategy> UsernamePasswordHandler<S> {
    /// Authenticates a username/password credential.
    ///
    /// Checks run in a fixed order, each short-circuiting: blank username,
    /// then username transformation, then blank password, then password
    /// encoding. Username problems are always reported ahead of password
    /// problems, so the raised error kind is predictable from the input alone.
    ///
    /// The credential is consumed; the strategy receives a fresh normalized
    /// credential carrying the transformed username and the encoded password,
    /// and the original cleartext is dropped before delegation.
    pub async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<Option<HandlerResult>, AuthenticationError> {
        let Credentials { username, password } = credentials;

        if is_blank(&username) {
            return Err(AuthenticationError::AccountNotFound(
                "username is blank".to_owned(),
            ));
        }

        let transformed = self.transformer.transform(&username);
        if is_blank(&transformed) {
            return Err(AuthenticationError::AccountNotFound(
                "transformed username is blank".to_owned(),
            ));
        }
        if transformed != username {
            debug!("transformed username {username:?} into {transformed:?}");
        }

        if is_blank(password.expose_secret()) {
            return Err(AuthenticationError::FailedLogin(
                "password is blank".to_owned(),
            ));
        }

        // Encoded exactly once; the blank check and the strategy both see
        // this value.
        let encoded = self.encoder.encode(password.expose_secret());
        if is_blank(&encoded) {
            warn!("password encoder produced blank output for {transformed:?}");
            return Err(AuthenticationError::AccountNotFound(
                "encoded password is blank".to_owned(),
            ));
        }

        let normalized = Credentials {
            username: transformed,
            password: SecretString::new(encoded),
        };

        self.strategy.verify(&normalized).await
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
