//! Email address syntax validation

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(test)]
use mockall::mock;

/// Any character except a line terminator (`\n`, `\r`, NEL, LS, PS)
const NOT_LINE_END: &str = r"[^\n\r\x{85}\x{2028}\x{2029}]";

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(&format!(r"^{0}+@{0}+\.{0}+$", NOT_LINE_END)).unwrap();
}

/// Decides whether a string is syntactically an email address.
///
/// Taking `&str` makes a present address the caller's precondition: checking
/// that a recipient was supplied at all is not the validator's job.
pub trait AddressValidator: Send + Sync + 'static {
    /// Returns `true` if `address` looks like an email address.
    fn is_correct(&self, address: &str) -> bool;
}

#[cfg(test)]
mock! {
    pub AddressValidator {}

    impl AddressValidator for AddressValidator {
        fn is_correct(&self, address: &str) -> bool;
    }
}

/// Permissive pattern check: something, an `@`, something, a `.`, something.
///
/// This is not an RFC 5322 parser. Anything the MIME layer later refuses is
/// reported by the mailer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternAddressValidator;

impl PatternAddressValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for PatternAddressValidator {
    fn is_correct(&self, address: &str) -> bool {
        EMAIL_REGEX.is_match(address)
    }
}
