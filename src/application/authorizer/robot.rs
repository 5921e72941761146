use crate::domain::ports::{Authorizer, InputSourceRef};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

pub const ROBOT_PROMPT: &str = "are you a robot (y/n)? ";

/// Authorizes a purchase by asking the customer whether they are a robot.
///
/// Answering `n` authorizes, answering `y` refuses. Anything else is rejected
/// and the question is asked again, with no limit on the number of attempts:
/// an input source that never produces `y` or `n` keeps `authorize` waiting
/// forever. Only a failing input source ends the loop early.
pub struct RobotCheckAuthorizer {
    input: InputSourceRef,
    authorized: AtomicBool,
}

impl RobotCheckAuthorizer {
    pub fn new(input: InputSourceRef) -> Self {
        Self {
            input,
            authorized: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Authorizer for RobotCheckAuthorizer {
    async fn authorize(&self) -> Result<()> {
        let answer = loop {
            let answer = self.input.read_line(ROBOT_PROMPT).await?.to_lowercase();
            if answer == "y" || answer == "n" {
                break answer;
            }
            tracing::debug!(%answer, "rejected robot-check answer");
        };
        self.authorized.store(answer == "n", Ordering::SeqCst);
        Ok(())
    }

    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::SeqCst)
    }
}
