use std::collections::HashMap;

use secrecy::ExposeSecret;

use crate::{AuthenticationError, Credentials, HandlerResult, VerificationStrategy};

/// Verifies credentials against a fixed in-memory user table.
///
/// Stored passwords must already be in whatever form the handler's encoder
/// produces; verification is a plain equality check against that form. Meant
/// for small deployments and tests, not as a real backend.
#[derive(Debug, Clone, Default)]
pub struct AcceptUsers {
    users: HashMap<String, String>,
}

impl AcceptUsers {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }
}

impl<K, V> FromIterator<(K, V)> for AcceptUsers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            users: iter
                .into_iter()
                .map(|(username, password)| (username.into(), password.into()))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl VerificationStrategy for AcceptUsers {
    async fn verify(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<HandlerResult>, AuthenticationError> {
        match self.users.get(&credentials.username) {
            Some(stored) if stored == credentials.password.expose_secret() => {
                Ok(Some(HandlerResult::new(credentials.username.clone())))
            }
            Some(_) => Err(AuthenticationError::FailedLogin(format!(
                "wrong password for {:?}",
                credentials.username
            ))),
            None => Err(AuthenticationError::AccountNotFound(format!(
                "unknown user {:?}",
                credentials.username
            ))),
        }
    }
}
