//! Interactive numeric input over injectable streams
//!
//! The prompter owns an input source and an output sink instead of touching
//! the process console directly, so tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{LottoForgeError, Result};

/// Numeric prompt loop bound to an input/output pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for an integer in `[min, max]`, re-prompting until one is entered.
    ///
    /// Malformed and out-of-range input is reported on the output sink and
    /// never surfaces as an error. The only failure mode is the input stream
    /// itself: running out of lines or failing to read.
    pub fn read_number(&mut self, prompt: &str, min: u64, max: u64) -> Result<u64> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(LottoForgeError::io(
                    "input stream closed before a valid number was entered",
                    None,
                ));
            }

            // Parse signed so that e.g. -3 is reported as out of range,
            // not as a malformed integer.
            match line.trim().parse::<i64>() {
                Ok(value) if value >= min as i64 && value <= max as i64 => {
                    return Ok(value as u64);
                }
                Ok(_) => writeln!(
                    self.output,
                    "Invalid number input. Please enter a number between {} and {}.",
                    min, max
                )?,
                Err(_) => writeln!(
                    self.output,
                    "Invalid number input. Please enter a valid integer."
                )?,
            }
        }
    }

    /// Print a full line to the output sink
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the prompter and hand back its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_accepts_number_in_range() {
        let mut p = prompter("17\n");
        assert_eq!(p.read_number("Pick: ", 1, 49).unwrap(), 17);
        assert_eq!(output_of(p), "Pick: ");
    }

    #[test]
    fn test_reprompts_on_malformed_input() {
        let mut p = prompter("abc\n12\n");
        assert_eq!(p.read_number("Pick: ", 1, 49).unwrap(), 12);
        let out = output_of(p);
        assert!(out.contains("Invalid number input. Please enter a valid integer."));
        assert_eq!(out.matches("Pick: ").count(), 2);
    }

    #[test]
    fn test_reprompts_on_out_of_range_input() {
        let mut p = prompter("50\n49\n");
        assert_eq!(p.read_number("Pick: ", 1, 49).unwrap(), 49);
        let out = output_of(p);
        assert!(out.contains("Invalid number input. Please enter a number between 1 and 49."));
    }

    #[test]
    fn test_negative_input_counts_as_out_of_range() {
        let mut p = prompter("-3\n5\n");
        assert_eq!(p.read_number("Pick: ", 0, 6).unwrap(), 5);
        let out = output_of(p);
        assert!(out.contains("between 0 and 6"));
        assert!(!out.contains("valid integer"));
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let mut p = prompter("nope\n");
        let err = p.read_number("Pick: ", 1, 49).unwrap_err();
        assert!(matches!(err, LottoForgeError::Io { .. }));
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut p = prompter("  42  \n");
        assert_eq!(p.read_number("Pick: ", 1, 49).unwrap(), 42);
    }
}
