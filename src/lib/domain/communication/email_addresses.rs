//! Email addresses module.

mod email_address;
mod validator;

pub use email_address::{EmailAddress, EmailAddressError};
pub use validator::{AddressValidator, PatternAddressValidator};

#[cfg(test)]
pub mod tests {
    pub use super::validator::MockAddressValidator;
}
