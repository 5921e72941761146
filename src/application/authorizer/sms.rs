use crate::domain::code::SmsCode;
use crate::domain::ports::{Authorizer, InputSourceRef};
use crate::error::Result;
use async_trait::async_trait;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

pub const SMS_PROMPT: &str = "Enter SMS code: ";

/// Authorizes a purchase by texting the customer a one-time code and checking
/// that the code they type back is the one that was sent.
///
/// Until a code has been generated (or issued), every answer is rejected.
pub struct SmsAuthorizer {
    input: InputSourceRef,
    code: RwLock<Option<SmsCode>>,
    authorized: AtomicBool,
}

impl SmsAuthorizer {
    pub fn new(input: InputSourceRef) -> Self {
        Self {
            input,
            code: RwLock::new(None),
            authorized: AtomicBool::new(false),
        }
    }

    /// Generates a new code from the thread-local rng and stores it as the
    /// expected answer.
    pub async fn generate_code(&self) -> SmsCode {
        let code = SmsCode::generate(&mut rand::thread_rng());
        self.issue_code(code.clone()).await;
        code
    }

    /// Like [`generate_code`](Self::generate_code) but draws from `rng`.
    pub async fn generate_code_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SmsCode {
        let code = SmsCode::generate(rng);
        self.issue_code(code.clone()).await;
        code
    }

    /// Stores a code produced elsewhere as the expected answer, replacing any
    /// previous one.
    pub async fn issue_code(&self, code: SmsCode) {
        tracing::debug!("issued new SMS code");
        *self.code.write().await = Some(code);
    }

    pub async fn code(&self) -> Option<SmsCode> {
        self.code.read().await.clone()
    }
}

#[async_trait]
impl Authorizer for SmsAuthorizer {
    async fn authorize(&self) -> Result<()> {
        let entered = self.input.read_line(SMS_PROMPT).await?;
        let matched = self
            .code
            .read()
            .await
            .as_ref()
            .is_some_and(|code| code.matches(&entered));
        self.authorized.store(matched, Ordering::SeqCst);
        tracing::debug!(authorized = matched, "SMS code checked");
        Ok(())
    }

    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentError;
    use crate::infrastructure::in_memory::ScriptedInput;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn authorizer_with(responses: &[&str]) -> SmsAuthorizer {
        SmsAuthorizer::new(Arc::new(ScriptedInput::new(responses.iter().copied())))
    }

    #[test]
    fn test_init_not_authorized() {
        let auth = authorizer_with(&[]);
        assert!(!auth.is_authorized());
    }

    #[tokio::test]
    async fn test_no_code_until_generated() {
        let auth = authorizer_with(&[]);
        assert!(auth.code().await.is_none());
    }

    #[tokio::test]
    async fn test_code_decimal() {
        let auth = authorizer_with(&[]);
        let code = auth.generate_code().await;

        assert_eq!(auth.code().await, Some(code.clone()));
        assert_eq!(code.as_str().len(), 6);
        assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_seeded_code_is_reproducible() {
        let a = authorizer_with(&[]);
        let b = authorizer_with(&[]);
        let code_a = a.generate_code_with(&mut StdRng::seed_from_u64(3)).await;
        let code_b = b.generate_code_with(&mut StdRng::seed_from_u64(3)).await;
        assert_eq!(code_a, code_b);
    }

    #[tokio::test]
    async fn test_authorize_success() {
        let input = Arc::new(ScriptedInput::new(["482913"]));
        let auth = SmsAuthorizer::new(input.clone());
        auth.issue_code(SmsCode::new("482913").unwrap()).await;

        auth.authorize().await.unwrap();

        assert!(auth.is_authorized());
        assert_eq!(input.prompts().await, vec![SMS_PROMPT]);
    }

    #[tokio::test]
    async fn test_authorize_fail() {
        let auth = authorizer_with(&["1234567"]);
        auth.generate_code().await;

        auth.authorize().await.unwrap();

        assert!(!auth.is_authorized());
    }

    #[tokio::test]
    async fn test_authorize_without_code_fails_closed() {
        let auth = authorizer_with(&["", "482913"]);

        auth.authorize().await.unwrap();
        assert!(!auth.is_authorized());
        auth.authorize().await.unwrap();
        assert!(!auth.is_authorized());
    }

    #[tokio::test]
    async fn test_authorized_flag_is_overwritten() {
        let auth = authorizer_with(&["482913", "000000"]);
        auth.issue_code(SmsCode::new("482913").unwrap()).await;

        auth.authorize().await.unwrap();
        assert!(auth.is_authorized());
        auth.authorize().await.unwrap();
        assert!(!auth.is_authorized());
    }

    #[tokio::test]
    async fn test_code_is_case_and_whitespace_sensitive() {
        let auth = authorizer_with(&[" 482913"]);
        auth.issue_code(SmsCode::new("482913").unwrap()).await;

        auth.authorize().await.unwrap();
        assert!(!auth.is_authorized());
    }

    #[tokio::test]
    async fn test_input_failure_propagates() {
        let auth = authorizer_with(&[]);
        auth.generate_code().await;

        let result = auth.authorize().await;
        assert!(matches!(result, Err(PaymentError::IoError(_))));
        assert!(!auth.is_authorized());
    }
}
