use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes one answer per line to a temporary responses file.
pub fn responses_file(answers: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for answer in answers {
        writeln!(file, "{answer}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Pulls the six-digit code out of the simulated SMS printed by `--show-code`.
pub fn code_from_stderr(stderr: &[u8]) -> Option<String> {
    let stderr = String::from_utf8_lossy(stderr);
    stderr
        .lines()
        .find_map(|line| line.split("verification code is ").nth(1))
        .map(|code| code.trim().to_string())
}
