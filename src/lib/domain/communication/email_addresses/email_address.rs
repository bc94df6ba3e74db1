//! Email Address

use std::fmt;

use thiserror::Error;

use super::AddressValidator;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email is invalid")]
    InvalidEmailAddress,
}

/// An email address that has passed an [`AddressValidator`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address, checked by `validator`
    pub fn new<V>(raw: &str, validator: &V) -> Result<Self, EmailAddressError>
    where
        V: AddressValidator + ?Sized,
    {
        if raw.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !validator.is_correct(raw) {
            return Err(InvalidEmailAddress);
        }

        Ok(Self(raw.to_string()))
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::email_addresses::{
        tests::MockAddressValidator, PatternAddressValidator,
    };

    use super::*;

    #[test]
    fn test_email_address_display() -> TestResult {
        let email = EmailAddress::new("email@example.com", &PatternAddressValidator)?;

        assert_eq!(format!("{}", email), "email@example.com".to_string());

        Ok(())
    }

    #[test]
    fn test_empty_email_address_is_invalid() {
        let result = EmailAddress::new("", &PatternAddressValidator);

        assert_eq!(result, Err(EmptyEmailAddress));
    }

    #[test]
    fn test_email_address_without_at_symbol_is_invalid() {
        let result = EmailAddress::new("email", &PatternAddressValidator);

        assert_eq!(result, Err(InvalidEmailAddress));
    }

    #[test]
    fn test_email_address_is_not_trimmed() -> TestResult {
        let email = EmailAddress::new(" email@example.com ", &PatternAddressValidator)?;

        assert_eq!(email.as_str(), " email@example.com ");

        Ok(())
    }

    #[test]
    fn test_validator_decides_correctness() {
        let mut validator = MockAddressValidator::new();

        validator
            .expect_is_correct()
            .withf(|address| address == "anything")
            .times(1)
            .return_const(false);

        let result = EmailAddress::new("anything", &validator);

        assert_eq!(result, Err(InvalidEmailAddress));
    }

    #[test]
    fn test_valid_email_to_string() -> TestResult {
        let email = EmailAddress::new("email@example.com", &PatternAddressValidator)?;

        assert_eq!(String::from(email), "email@example.com".to_string());

        Ok(())
    }
}
