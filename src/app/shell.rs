use crate::adapters::PromptFieldSupplier;
use crate::core::export::{export, OutputFormat};
use crate::core::registry::AgencyRegistry;
use crate::domain::ports::FieldSupplier;
use crate::utils::error::{RegistryError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  register  add a new agency (prompts for its fields)
  find      show one agency by name
  remove    delete an agency by name
  revoke    revoke an agency's license (deletes it)
  list      show every agency
  count     count agencies in a region
  type      show agencies of one type
  update    change a Print Media or Radio Station field
  export    print the table as text, json or csv
  help      show this message
  quit      leave the shell";

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented command loop over a registry.
///
/// Regular output and prompts go to `W`; operation failures are reported as a
/// single line on `E` and the loop carries on.
pub struct Shell<R: BufRead, W: Write, E: Write> {
    io: PromptFieldSupplier<R, W>,
    err: E,
    format: OutputFormat,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(input: R, output: W, err: E) -> Self {
        Self {
            io: PromptFieldSupplier::new(input, output),
            err,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn into_writers(self) -> (W, E) {
        let (_, output) = self.io.into_inner();
        (output, self.err)
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, registry: &mut AgencyRegistry) -> Result<()> {
        loop {
            write!(self.io.output(), "> ")?;
            self.io.output().flush()?;

            let Some(line) = self.io.read_line()? else {
                writeln!(self.io.output())?;
                break;
            };
            let command = line.trim();
            if command.is_empty() {
                continue;
            }

            match self.execute(command, registry) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(RegistryError::InputExhausted { prompt }) => {
                    tracing::debug!("Input ended at '{}'", prompt);
                    break;
                }
                Err(RegistryError::IoError(e)) => return Err(e.into()),
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    fn report(&mut self, error: &RegistryError) -> Result<()> {
        tracing::debug!("{}", error);
        writeln!(self.err, "{}", error.user_friendly_message())?;
        Ok(())
    }

    fn execute(&mut self, command: &str, registry: &mut AgencyRegistry) -> Result<Flow> {
        match command {
            "register" => {
                let name = self.io.read_value("Name: ")?;
                let profile = self.io.read_value("Profile: ")?;
                let license_number = self.io.read_value("License Number: ")?;
                let location = self.io.read_value("Location: ")?;
                let agency_type = self.io.read_value("Type (Print Media / Radio Station): ")?;
                registry.register_new_agency(
                    &name,
                    &profile,
                    &license_number,
                    &location,
                    &agency_type,
                    &mut self.io,
                )?;
                writeln!(self.io.output(), "Registered '{}'.", name)?;
            }
            "find" => {
                let name = self.io.read_value("Name: ")?;
                let agency = registry
                    .find(&name)
                    .ok_or(RegistryError::AgencyNotFound { name })?;
                agency.display_info(self.io.output())?;
            }
            "remove" => {
                let name = self.io.read_value("Name: ")?;
                if registry.remove(&name).is_some() {
                    writeln!(self.io.output(), "Removed '{}'.", name)?;
                }
            }
            "revoke" => {
                let name = self.io.read_value("Name: ")?;
                let revoked = registry.revoke_license(&name)?;
                writeln!(
                    self.io.output(),
                    "License {} of '{}' revoked.",
                    revoked.license_number(),
                    revoked.name()
                )?;
            }
            "list" => export(registry, self.format, self.io.output())?,
            "count" => {
                let region = self.io.read_value("Region: ")?;
                let count = registry.count_in_region(&region);
                writeln!(self.io.output(), "{} agencies in {}", count, region)?;
            }
            "type" => {
                let agency_type = self.io.read_value("Type: ")?;
                let agencies = registry.agencies_by_type_name(&agency_type);
                let out = self.io.output();
                for agency in agencies {
                    agency.display_info(out)?;
                    writeln!(out)?;
                }
            }
            "update" => {
                let name = self.io.read_value("Name: ")?;
                let agency_type = self.io.read_value("Type: ")?;
                let field = self.io.read_value("Field: ")?;
                let value = self.io.read_value("Value: ")?;
                registry.update_field(&name, &agency_type, &field, &value)?;
                writeln!(self.io.output(), "Updated {} of '{}'.", field, name)?;
            }
            "export" => {
                let format: OutputFormat = self.io.read_value("Format (text/json/csv): ")?.parse()?;
                export(registry, format, self.io.output())?;
            }
            "help" => writeln!(self.io.output(), "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => {
                writeln!(
                    self.err,
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    other
                )?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, registry: &mut AgencyRegistry) -> (String, String) {
        let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), Vec::new());
        shell.run(registry).unwrap();
        let (out, err) = shell.into_writers();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = AgencyRegistry::new();
        let script = "register\nPrintNews\nNews\n12345\nCityA\nPrint Media\nDaily\n10000\n\
                      find\nPrintNews\nquit\n";
        let (out, err) = run_script(script, &mut registry);

        assert!(err.is_empty());
        assert!(out.contains("Enter circulation for Print Media: "));
        assert!(out.contains("Registered 'PrintNews'."));
        assert!(out.contains("Circulation: 10000"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let mut registry = AgencyRegistry::new();
        let script = "register\nTV\nNews\n1\nCityA\nTelevision\n\
                      update\nGhost\nPrint Media\nCirculation\n5\n\
                      bogus\ncount\nCityA\n";
        let (out, err) = run_script(script, &mut registry);

        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Unsupported agency type.",
                "Agency not found.",
                "Unknown command 'bogus'. Type 'help' for the list of commands.",
            ]
        );
        assert!(out.contains("0 agencies in CityA"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_type_with_unknown_discriminator_prints_nothing() {
        let mut registry = AgencyRegistry::new();
        run_script(
            "register\nRadioWave\nMusic\n67890\nCityB\nRadio Station\nFM\n101.5\n",
            &mut registry,
        );

        let (out, err) = run_script("type\nTelevision\n", &mut registry);
        assert!(err.is_empty());
        assert_eq!(out, "> Type: > \n");
    }

    #[test]
    fn test_end_of_input_mid_command_ends_session() {
        let mut registry = AgencyRegistry::new();
        let (_, err) = run_script("register\nHalf\n", &mut registry);

        assert!(err.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_list_uses_configured_format() {
        let mut registry = AgencyRegistry::new();
        run_script(
            "register\nRadioWave\nMusic\n67890\nCityB\nRadio Station\nFM\n101.5\n",
            &mut registry,
        );

        let mut shell = Shell::new(Cursor::new("list\n"), Vec::new(), Vec::new())
            .with_format(OutputFormat::Csv);
        shell.run(&mut registry).unwrap();
        let (out, _) = shell.into_writers();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Radio Station,RadioWave,Music,67890,CityB,,,FM,101.5"));
    }
}
