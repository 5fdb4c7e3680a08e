use crate::domain::model::{
    parse_circulation, AgencyDetails, AgencyType, PrintMedia, RadioStation,
};
use crate::utils::error::Result;

/// Source of the variant-specific values collected while registering an agency.
///
/// Implementors only answer single prompts; `supply` turns the answers into
/// a typed payload for the requested variant.
pub trait FieldSupplier {
    fn read_value(&mut self, prompt: &str) -> Result<String>;

    fn supply(&mut self, agency_type: AgencyType) -> Result<AgencyDetails> {
        match agency_type {
            AgencyType::PrintMedia => {
                let periodicity = self.read_value("Enter periodicity for Print Media: ")?;
                let raw = self.read_value("Enter circulation for Print Media: ")?;
                Ok(PrintMedia::new(periodicity, parse_circulation(&raw)?).into())
            }
            AgencyType::RadioStation => {
                let frequency_range =
                    self.read_value("Enter frequency range for Radio Station: ")?;
                let frequency = self.read_value("Enter frequency for Radio Station: ")?;
                Ok(RadioStation::new(frequency_range, frequency).into())
            }
        }
    }
}

impl<F: FieldSupplier + ?Sized> FieldSupplier for &mut F {
    fn read_value(&mut self, prompt: &str) -> Result<String> {
        (**self).read_value(prompt)
    }
}
