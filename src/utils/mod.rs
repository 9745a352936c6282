use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Print `question` on its own line and read one trimmed answer from `input`.
/// An empty answer or end of input is an error.
pub fn prompt<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<String> {
    writeln!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        anyhow::bail!("No answer given to \"{}\"", question);
    }

    let answer = line.trim();
    if answer.is_empty() {
        anyhow::bail!("No answer given to \"{}\"", question);
    }
    Ok(answer.to_string())
}

/// Ask the operator for the name or ID recorded in the tenant description
pub fn prompt_owner() -> Result<String> {
    let stdin = std::io::stdin();
    prompt("Enter your name or ID:", &mut stdin.lock(), &mut std::io::stdout())
}
