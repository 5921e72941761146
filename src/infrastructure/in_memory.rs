use crate::domain::ports::{InputSource, Notifier};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use tokio::sync::Mutex;

/// An input source that replays a fixed list of answers.
///
/// Every prompt it is asked is recorded so callers can check how many times
/// an authorizer re-prompted. Once the answers run out, reads fail with
/// `UnexpectedEof` instead of blocking.
#[derive(Default)]
pub struct ScriptedInput {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Loads one answer per line from `source` (e.g. a responses file).
    pub fn from_reader<R: BufRead>(source: R) -> io::Result<Self> {
        let responses = source.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::new(responses))
    }

    /// Prompts shown so far, in order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Number of answers not consumed yet.
    pub async fn remaining(&self) -> usize {
        self.responses.lock().await.len()
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.prompts.lock().await.push(prompt.to_string());
        self.responses.lock().await.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left")
        })
    }
}

/// A notifier that keeps every line in memory.
#[derive(Default)]
pub struct RecordingNotifier {
    lines: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, line: &str) {
        self.lines.lock().await.push(line.to_string());
    }
}
