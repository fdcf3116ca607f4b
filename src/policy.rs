/// Password policy configuration owned by a handler and exposed read-only to
/// verification strategies. The handler itself does not interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Days before expiration at which strategies should start attaching
    /// warnings to their results.
    pub warning_days: u32,
    /// Attach the expiration warning on every successful login, not only
    /// inside the warning window.
    pub always_display_warning: bool,
    /// Failed attempts after which the account locks out.
    pub lockout_failures: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            warning_days: 30,
            always_display_warning: false,
            lockout_failures: 5,
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn warning_days(mut self, days: u32) -> Self {
        self.warning_days = days;
        self
    }

    pub const fn always_display_warning(mut self, always: bool) -> Self {
        self.always_display_warning = always;
        self
    }

    pub const fn lockout_failures(mut self, failures: u32) -> Self {
        self.lockout_failures = failures;
        self
    }
}
