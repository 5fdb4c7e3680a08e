// Adapters layer: concrete sources for the values the registry asks for during registration.

use crate::domain::ports::FieldSupplier;
use crate::utils::error::{RegistryError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Prints each prompt and reads the answer from the next input line.
#[derive(Debug)]
pub struct PromptFieldSupplier<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptFieldSupplier<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink shared with whoever drives the prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line, `None` at end of input. Trailing newline is stripped.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> FieldSupplier for PromptFieldSupplier<R, W> {
    fn read_value(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()?
            .map(|line| line.trim().to_string())
            .ok_or_else(|| RegistryError::InputExhausted {
                prompt: prompt.trim_end().to_string(),
            })
    }
}

/// Answers prompts from a fixed queue, for seeding and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFieldSupplier {
    answers: VecDeque<String>,
}

impl ScriptedFieldSupplier {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl FieldSupplier for ScriptedFieldSupplier {
    fn read_value(&mut self, prompt: &str) -> Result<String> {
        tracing::debug!("{}<scripted>", prompt);
        self.answers
            .pop_front()
            .ok_or_else(|| RegistryError::InputExhausted {
                prompt: prompt.trim_end().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AgencyDetails, AgencyType, PrintMedia, RadioStation};
    use std::io::Cursor;

    #[test]
    fn test_prompt_supplier_writes_prompts_and_reads_lines() {
        let input = Cursor::new("Daily\r\n 10000 \n");
        let mut supplier = PromptFieldSupplier::new(input, Vec::new());

        let details = supplier.supply(AgencyType::PrintMedia).unwrap();
        assert_eq!(details, AgencyDetails::PrintMedia(PrintMedia::new("Daily", 10000)));

        let (_, output) = supplier.into_inner();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter periodicity for Print Media: Enter circulation for Print Media: "
        );
    }

    #[test]
    fn test_prompt_supplier_reports_end_of_input() {
        let mut supplier = PromptFieldSupplier::new(Cursor::new("FM\n"), Vec::new());
        let err = supplier.supply(AgencyType::RadioStation).unwrap_err();
        assert!(matches!(err, RegistryError::InputExhausted { .. }));
    }

    #[test]
    fn test_scripted_supplier_answers_in_order() {
        let mut supplier = ScriptedFieldSupplier::new(["AM", "990"]);
        let details = supplier.supply(AgencyType::RadioStation).unwrap();

        assert_eq!(details, AgencyDetails::RadioStation(RadioStation::new("AM", "990")));
        assert_eq!(supplier.remaining(), 0);
    }
}
