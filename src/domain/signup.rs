//! src/domain/signup.rs
use super::{GmailAddress, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw form values, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignupForm {
    pub email: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<Signup, ValidationError> {
        Signup::try_from(self.clone())
    }
}

/// A validated sign-up. Serializes to the webhook payload `{"email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signup {
    pub email: GmailAddress,
}

impl TryFrom<SignupForm> for Signup {
    type Error = ValidationError;

    fn try_from(form: SignupForm) -> Result<Self, Self::Error> {
        Ok(Self {
            email: GmailAddress::parse(form.email)?,
        })
    }
}
