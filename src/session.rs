//! Local login/signup session state
//!
//! There is no credential store: login and signup are the same transition and
//! succeed whenever both fields are non-empty. Nothing is persisted.

use std::fmt;

use tracing::debug;

/// Which form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// "Log In" tab
    Login,
    /// "Sign Up" tab
    Signup,
}

/// Session state tracking the header's login dialog
///
/// LoggedOut → LoggedIn through [`submit`](Self::submit) when both fields are
/// filled in; LoggedIn → LoggedOut through [`logout`](Self::logout), which also
/// clears the fields.
///
/// # Example
///
/// ```
/// use tazza_khabar::session::{AuthMode, SessionState};
///
/// let session = SessionState::default()
///     .with_username("asha")
///     .with_password("hunter2")
///     .submit(AuthMode::Login);
/// assert!(session.is_logged_in());
/// assert_eq!(session.avatar_initial(), Some('A'));
///
/// let session = session.logout();
/// assert!(!session.is_logged_in());
/// assert!(session.username().is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    logged_in: bool,
    username: String,
    #[cfg_attr(feature = "serialize", serde(skip))]
    password: String,
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("logged_in", &self.logged_in)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SessionState {
    /// Update the username field
    #[must_use]
    pub fn with_username(self, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..self
        }
    }

    /// Update the password field
    #[must_use]
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..self
        }
    }

    /// Submit the login or signup form
    ///
    /// Logs in when both fields are non-empty; otherwise the state is returned
    /// unchanged. Both modes behave identically.
    #[must_use]
    pub fn submit(self, mode: AuthMode) -> Self {
        if self.username.is_empty() || self.password.is_empty() {
            debug!("{:?} ignored: username or password empty", mode);
            return self;
        }
        debug!("{:?} as {}", mode, self.username);
        Self {
            logged_in: true,
            ..self
        }
    }

    /// Submit the login form
    #[must_use]
    pub fn login(self) -> Self {
        self.submit(AuthMode::Login)
    }

    /// Submit the signup form
    #[must_use]
    pub fn signup(self) -> Self {
        self.submit(AuthMode::Signup)
    }

    /// Log out, clearing both fields
    #[must_use]
    pub fn logout(self) -> Self {
        debug!("Logging out {}", self.username);
        Self::default()
    }

    /// Whether a user is logged in
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Current username field
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current password field
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Uppercased first character of the username, for the avatar fallback
    pub fn avatar_initial(&self) -> Option<char> {
        self.username.chars().next().and_then(|c| c.to_uppercase().next())
    }
}
