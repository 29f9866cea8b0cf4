//! src/domain/mod.rs
mod gmail_address;
pub use gmail_address::{GmailAddress, ValidationError, GMAIL_SUFFIX};

mod signup;
pub use signup::{Signup, SignupForm};
