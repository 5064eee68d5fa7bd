//! Reads one line from standard input and reports its vowel and consonant counts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use twine_advisory::support::text::count_letters;

fn main() -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "Enter a word or sentence: ")?;
    stdout.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    let counts = count_letters(&line);
    writeln!(stdout, "Number of vowels: {}", counts.vowels)?;
    writeln!(stdout, "Number of consonants: {}", counts.consonants)?;
    Ok(())
}
