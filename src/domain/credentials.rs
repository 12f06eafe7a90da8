//! Login credentials parsed from inbound payloads.
//!
//! Keep payload parsing outside the authentication code by exposing a
//! constructor that validates string inputs before a handler talks to the
//! credential store.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    MissingEmail,
    /// Password was missing or blank.
    MissingPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEmail => write!(f, "email must not be empty"),
            Self::MissingPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` is non-empty but retains caller-provided whitespace to avoid
///   surprising credential comparisons.
///
/// The password is zeroised when the credentials are dropped.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from optional payload fields.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, CredentialsValidationError> {
        let email = email
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(CredentialsValidationError::MissingEmail)?;
        let password = password
            .filter(|value| !value.is_empty())
            .ok_or(CredentialsValidationError::MissingPassword)?;
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// The login email, trimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The raw password.
    pub fn password(&self) -> &str {
        &self.password
    }
}
