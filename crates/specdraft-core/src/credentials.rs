//! Login credentials type.

use std::fmt;

use crate::Result;
use crate::error::ValidationError;

/// Email and password submitted to the signup and login endpoints.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use specdraft_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "hunter22").unwrap();
/// assert_eq!(creds.email(), "alice@example.com");
/// ```
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either field is empty.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let email = email.into();
        let password = password.into();

        if email.is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        Ok(Self { email, password })
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
