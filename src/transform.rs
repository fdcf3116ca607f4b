/// Normalizes a username before lookup.
///
/// Implementations must be pure: same input, same output, no side effects.
pub trait PrincipalNameTransformer: Send + Sync {
    fn transform(&self, username: &str) -> String;
}

/// Leaves the username untouched. The default.
#[derive(Debug, Clone, Copy)]
pub struct NoOp;

impl PrincipalNameTransformer for NoOp {
    fn transform(&self, username: &str) -> String {
        username.to_owned()
    }
}

/// Folds the username to a single case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertCase {
    Lower,
    Upper,
}

impl PrincipalNameTransformer for ConvertCase {
    fn transform(&self, username: &str) -> String {
        match self {
            Self::Lower => username.to_lowercase(),
            Self::Upper => username.to_uppercase(),
        }
    }
}

/// Wraps the username with a fixed prefix and/or suffix.
///
/// ```
/// use userpass::transform::{PrefixSuffix, PrincipalNameTransformer};
///
/// let transformer = PrefixSuffix::new().suffix("@example.com");
/// assert_eq!(transformer.transform("bob"), "bob@example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixSuffix {
    prefix: Option<String>,
    suffix: Option<String>,
}

impl PrefixSuffix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

impl PrincipalNameTransformer for PrefixSuffix {
    fn transform(&self, username: &str) -> String {
        let mut out = String::new();
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
        }
        out.push_str(username);
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        out
    }
}
