use crate::error::PaymentError;
use rand::Rng;
use std::fmt;

/// A one-time SMS verification code: exactly six decimal digits.
#[derive(Clone, PartialEq, Eq)]
pub struct SmsCode(String);

impl SmsCode {
    pub const LENGTH: usize = 6;

    pub fn new(code: impl Into<String>) -> Result<Self, PaymentError> {
        let code = code.into();
        if code.len() == Self::LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code))
        } else {
            Err(PaymentError::ValidationError(format!(
                "SMS code must be exactly {} decimal digits",
                Self::LENGTH
            )))
        }
    }

    /// Draws a fresh code from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..Self::LENGTH)
            .map(|_| char::from(rng.gen_range(b'0'..=b'9')))
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against what the customer entered.
    pub fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }
}

impl TryFrom<&str> for SmsCode {
    type Error = PaymentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Codes are secrets; keep them out of debug output and logs.
impl fmt::Debug for SmsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SmsCode(******)")
    }
}
