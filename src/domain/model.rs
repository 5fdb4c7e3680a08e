use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Discriminator naming the kind of agency a record or request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgencyType {
    PrintMedia,
    RadioStation,
}

impl AgencyType {
    pub const ALL: [AgencyType; 2] = [AgencyType::PrintMedia, AgencyType::RadioStation];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgencyType::PrintMedia => "Print Media",
            AgencyType::RadioStation => "Radio Station",
        }
    }

    /// Fields that `AgencyRecord::set_field` accepts for this type.
    pub fn fields(&self) -> &'static [AgencyField] {
        match self {
            AgencyType::PrintMedia => &[AgencyField::Periodicity, AgencyField::Circulation],
            AgencyType::RadioStation => &[AgencyField::FrequencyRange, AgencyField::Frequency],
        }
    }

    /// Resolves a field name against this type, rejecting names the variant doesn't carry.
    pub fn field(&self, name: &str) -> Result<AgencyField> {
        self.fields()
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| RegistryError::UnsupportedField {
                agency_type: self.as_str().to_string(),
                field: name.to_string(),
            })
    }
}

impl fmt::Display for AgencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgencyType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        AgencyType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RegistryError::UnsupportedType {
                discriminator: s.to_string(),
            })
    }
}

/// Variant-specific attributes that can be updated after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgencyField {
    Periodicity,
    Circulation,
    FrequencyRange,
    Frequency,
}

impl AgencyField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgencyField::Periodicity => "Periodicity",
            AgencyField::Circulation => "Circulation",
            AgencyField::FrequencyRange => "Frequency Range",
            AgencyField::Frequency => "Frequency",
        }
    }
}

impl fmt::Display for AgencyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a circulation figure, which must be a non-negative whole number.
pub fn parse_circulation(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| RegistryError::InvalidFieldValue {
            field: AgencyField::Circulation.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintMedia {
    periodicity: String,
    circulation: u32,
}

impl PrintMedia {
    pub fn new(periodicity: impl Into<String>, circulation: u32) -> Self {
        Self {
            periodicity: periodicity.into(),
            circulation,
        }
    }

    pub fn periodicity(&self) -> &str {
        &self.periodicity
    }

    pub fn set_periodicity(&mut self, periodicity: impl Into<String>) {
        self.periodicity = periodicity.into();
    }

    pub fn circulation(&self) -> u32 {
        self.circulation
    }

    pub fn set_circulation(&mut self, circulation: u32) {
        self.circulation = circulation;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStation {
    frequency_range: String,
    frequency: String,
}

impl RadioStation {
    pub fn new(frequency_range: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            frequency_range: frequency_range.into(),
            frequency: frequency.into(),
        }
    }

    pub fn frequency_range(&self) -> &str {
        &self.frequency_range
    }

    pub fn set_frequency_range(&mut self, frequency_range: impl Into<String>) {
        self.frequency_range = frequency_range.into();
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn set_frequency(&mut self, frequency: impl Into<String>) {
        self.frequency = frequency.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgencyDetails {
    #[serde(rename = "Print Media")]
    PrintMedia(PrintMedia),
    #[serde(rename = "Radio Station")]
    RadioStation(RadioStation),
}

impl AgencyDetails {
    pub fn agency_type(&self) -> AgencyType {
        match self {
            AgencyDetails::PrintMedia(_) => AgencyType::PrintMedia,
            AgencyDetails::RadioStation(_) => AgencyType::RadioStation,
        }
    }
}

impl From<PrintMedia> for AgencyDetails {
    fn from(details: PrintMedia) -> Self {
        AgencyDetails::PrintMedia(details)
    }
}

impl From<RadioStation> for AgencyDetails {
    fn from(details: RadioStation) -> Self {
        AgencyDetails::RadioStation(details)
    }
}

/// One licensed media agency: the shared identity fields plus its variant payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyRecord {
    name: String,
    profile: String,
    license_number: String,
    location: String,
    #[serde(flatten)]
    details: AgencyDetails,
}

impl AgencyRecord {
    pub fn new(
        name: impl Into<String>,
        profile: impl Into<String>,
        license_number: impl Into<String>,
        location: impl Into<String>,
        details: impl Into<AgencyDetails>,
    ) -> Self {
        Self {
            name: name.into(),
            profile: profile.into(),
            license_number: license_number.into(),
            location: location.into(),
            details: details.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn agency_type(&self) -> AgencyType {
        self.details.agency_type()
    }

    pub fn details(&self) -> &AgencyDetails {
        &self.details
    }

    pub fn as_print_media(&self) -> Option<&PrintMedia> {
        match &self.details {
            AgencyDetails::PrintMedia(print) => Some(print),
            AgencyDetails::RadioStation(_) => None,
        }
    }

    pub fn as_print_media_mut(&mut self) -> Option<&mut PrintMedia> {
        match &mut self.details {
            AgencyDetails::PrintMedia(print) => Some(print),
            AgencyDetails::RadioStation(_) => None,
        }
    }

    pub fn as_radio_station(&self) -> Option<&RadioStation> {
        match &self.details {
            AgencyDetails::RadioStation(radio) => Some(radio),
            AgencyDetails::PrintMedia(_) => None,
        }
    }

    pub fn as_radio_station_mut(&mut self) -> Option<&mut RadioStation> {
        match &mut self.details {
            AgencyDetails::RadioStation(radio) => Some(radio),
            AgencyDetails::PrintMedia(_) => None,
        }
    }

    /// Sets one variant field from its textual value.
    ///
    /// The record is left untouched when the field belongs to the other
    /// variant or the value does not parse.
    pub fn set_field(&mut self, field: AgencyField, value: &str) -> Result<()> {
        let agency_type = self.agency_type();
        match (&mut self.details, field) {
            (AgencyDetails::PrintMedia(print), AgencyField::Periodicity) => {
                print.set_periodicity(value);
            }
            (AgencyDetails::PrintMedia(print), AgencyField::Circulation) => {
                print.set_circulation(parse_circulation(value)?);
            }
            (AgencyDetails::RadioStation(radio), AgencyField::FrequencyRange) => {
                radio.set_frequency_range(value);
            }
            (AgencyDetails::RadioStation(radio), AgencyField::Frequency) => {
                radio.set_frequency(value);
            }
            (_, field) => {
                return Err(RegistryError::UnsupportedField {
                    agency_type: agency_type.to_string(),
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Writes the labeled, multi-line rendering of every attribute.
    pub fn display_info<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for AgencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Agency Information:", self.agency_type())?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Profile: {}", self.profile)?;
        writeln!(f, "License Number: {}", self.license_number)?;
        writeln!(f, "Location: {}", self.location)?;
        match &self.details {
            AgencyDetails::PrintMedia(print) => {
                writeln!(f, "Periodicity: {}", print.periodicity)?;
                writeln!(f, "Circulation: {}", print.circulation)
            }
            AgencyDetails::RadioStation(radio) => {
                writeln!(f, "Frequency Range: {}", radio.frequency_range)?;
                writeln!(f, "Frequency: {}", radio.frequency)
            }
        }
    }
}
