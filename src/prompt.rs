//! Interactive prompt handling.
//!
//! Every piece of wizard input flows through [`Prompter`], which is generic
//! over its input and output streams. The binary wires it to stdin/stdout;
//! tests drive the same code with scripted input and a captured output
//! buffer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{WorkflowError, WorkflowResult};

/// Prompt front-end over a reader/writer pair.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin/stdout.
    pub fn console() -> Self {
        Self { input: io::stdin().lock(), output: io::stdout() }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    pub fn say(&mut self, text: &str) -> WorkflowResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Ask a question and return the trimmed answer.
    ///
    /// End of input counts as an abort: a closed stream can never satisfy a
    /// prompt loop.
    pub fn ask(&mut self, question: &str) -> WorkflowResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WorkflowError::Aborted);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question, re-asking until the answer is `y` or `n`.
    pub fn confirm(&mut self, question: &str) -> WorkflowResult<bool> {
        loop {
            let answer = self.ask(question)?;
            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
        }
    }
}
