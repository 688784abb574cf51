use std::io::{BufRead, Write};

use crate::client::error::ClientError;

/// Line based prompts over any reader and writer
///
/// End of input surfaces as [`ClientError::InputClosed`] from every prompt.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning everything written to it
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: &str) -> Result<(), ClientError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self, label: &str) -> Result<String, ClientError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ClientError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Asks until a non-empty answer is given
    pub fn prompt_required(&mut self, label: &str) -> Result<String, ClientError> {
        loop {
            let answer = self.read_line(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }

            self.line("A value is required.")?;
        }
    }

    /// Asks until a whole number is given
    pub fn prompt_integer(&mut self, label: &str) -> Result<i32, ClientError> {
        loop {
            let answer = self.read_line(label)?;
            match answer.parse::<i32>() {
                Ok(number) => return Ok(number),
                Err(_) => self.line("Please enter a whole number.")?,
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool, ClientError> {
        loop {
            let answer = self.read_line(&format!("{} (y/n)", question))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.line("Please answer y or n.")?,
            }
        }
    }

    /// Prints `options` as a numbered list and returns the zero based index picked
    pub fn choose<S: AsRef<str>>(&mut self, title: &str, options: &[S]) -> Result<usize, ClientError> {
        self.line(title)?;
        for (number, option) in options.iter().enumerate() {
            self.line(&format!("  {}) {}", number + 1, option.as_ref()))?;
        }

        loop {
            let answer = self.read_line("Choose a number")?;
            match answer.parse::<usize>() {
                Ok(number) if (1..=options.len()).contains(&number) => return Ok(number - 1),
                _ => self.line(&format!(
                    "Please enter a number between 1 and {}.",
                    options.len()
                ))?,
            }
        }
    }
}
