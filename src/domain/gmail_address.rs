//! src/domain/gmail_address.rs
use serde::{Deserialize, Serialize};
use validator::validate_email;

pub const GMAIL_SUFFIX: &str = "@gmail.com";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidSyntax,
    #[error("Only @gmail.com addresses are allowed.")]
    DisallowedDomain,
}

/// An email address that is syntactically valid and ends with `@gmail.com`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct GmailAddress(String);

impl GmailAddress {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if !validate_email(&s) || !has_dot_atom_local_part(&s) {
            return Err(ValidationError::InvalidSyntax);
        }

        // Literal, case-sensitive match on the suffix.
        if !s.ends_with(GMAIL_SUFFIX) {
            return Err(ValidationError::DisallowedDomain);
        }

        Ok(Self(s))
    }
}

/// The local part must be a dot-atom: no leading, trailing or doubled dots.
fn has_dot_atom_local_part(s: &str) -> bool {
    let local = match s.rsplit_once('@') {
        Some((local, _)) => local,
        None => return false,
    };

    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

impl TryFrom<String> for GmailAddress {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<GmailAddress> for String {
    fn from(address: GmailAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for GmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
