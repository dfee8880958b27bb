// Complete Interactive Greeting Prompt
// One line in, one greeting out, behind generic reader/writer seams so the
// exchange is testable without a terminal

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

// =============================================================================
// Milestone 1: The prompt behind I/O seams
// =============================================================================

/// Prompts for a name on `output`, reads one line from `input`, and echoes a
/// greeting. The trailing newline is stripped; nothing else about the name is
/// validated — an empty line greets an empty name.
pub fn greet<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    write!(output, "Enter your name: ")?;
    output.flush()?;

    let mut name = String::new();
    input.read_line(&mut name)?;
    let name = name.trim_end_matches(['\n', '\r']);

    writeln!(output, "Hello, {}!", name)?;
    Ok(())
}

// =============================================================================
// Main Function - Runs the prompt against the real terminal
// =============================================================================

fn main() -> io::Result<()> {
    println!("{}", "=== Interactive Greeting Prompt ===".bold());

    let stdin = io::stdin();
    let started = Instant::now();
    greet(&mut stdin.lock(), &mut io::stdout())?;
    println!("Time taken: {} nanoseconds", started.elapsed().as_nanos());

    println!("{}", "=== Done ===".green());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
