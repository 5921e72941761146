use crate::domain::ports::{InputSource, Notifier};
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Reads answers from the terminal, the way an interactive checkout would.
///
/// The prompt goes to stdout without a trailing newline, then one line is read
/// from stdin. Only the line terminator is stripped.
pub struct ConsoleInput {
    stdin: Mutex<BufReader<Stdin>>,
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            stdin: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

#[async_trait]
impl InputSource for ConsoleInput {
    async fn read_line(&self, prompt: &str) -> io::Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let mut line = String::new();
        let read = self.stdin.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for input",
            ));
        }
        Ok(strip_line_terminator(line))
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Prints notifications on stdout.
#[derive(Default, Clone, Copy)]
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn notify(&self, line: &str) {
        println!("{line}");
    }
}
