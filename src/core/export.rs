use crate::core::registry::AgencyRegistry;
use crate::core::{AgencyDetails, AgencyRecord};
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(RegistryError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OutputFormat::NAMES.join(", ")
                ),
            }),
        }
    }
}

/// Flat CSV row; cells a variant doesn't carry stay empty.
#[derive(Debug, Serialize)]
struct AgencyRow<'a> {
    #[serde(rename = "type")]
    agency_type: &'static str,
    name: &'a str,
    profile: &'a str,
    license_number: &'a str,
    location: &'a str,
    periodicity: Option<&'a str>,
    circulation: Option<u32>,
    frequency_range: Option<&'a str>,
    frequency: Option<&'a str>,
}

impl<'a> From<&'a AgencyRecord> for AgencyRow<'a> {
    fn from(agency: &'a AgencyRecord) -> Self {
        let mut row = AgencyRow {
            agency_type: agency.agency_type().as_str(),
            name: agency.name(),
            profile: agency.profile(),
            license_number: agency.license_number(),
            location: agency.location(),
            periodicity: None,
            circulation: None,
            frequency_range: None,
            frequency: None,
        };
        match agency.details() {
            AgencyDetails::PrintMedia(print) => {
                row.periodicity = Some(print.periodicity());
                row.circulation = Some(print.circulation());
            }
            AgencyDetails::RadioStation(radio) => {
                row.frequency_range = Some(radio.frequency_range());
                row.frequency = Some(radio.frequency());
            }
        }
        row
    }
}

pub fn write_csv<W: Write>(registry: &AgencyRegistry, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record([
        "type",
        "name",
        "profile",
        "license_number",
        "location",
        "periodicity",
        "circulation",
        "frequency_range",
        "frequency",
    ])?;
    for agency in registry {
        writer.serialize(AgencyRow::from(agency))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(registry: &AgencyRegistry, mut out: W) -> Result<()> {
    let agencies: Vec<&AgencyRecord> = registry.iter().collect();
    serde_json::to_writer_pretty(&mut out, &agencies)?;
    writeln!(out)?;
    Ok(())
}

/// Renders the whole registry in the requested format.
pub fn export<W: Write>(registry: &AgencyRegistry, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => registry.display_all(&mut out)?,
        OutputFormat::Json => write_json(registry, out)?,
        OutputFormat::Csv => write_csv(registry, out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PrintMedia, RadioStation};

    fn registry() -> AgencyRegistry {
        let mut registry = AgencyRegistry::new();
        registry.add(AgencyRecord::new(
            "PrintNews",
            "News",
            "12345",
            "CityA",
            PrintMedia::new("Daily", 10000),
        ));
        registry.add(AgencyRecord::new(
            "RadioWave",
            "Music",
            "67890",
            "CityB",
            RadioStation::new("FM", "101.5"),
        ));
        registry
    }

    #[test]
    fn test_csv_leaves_foreign_cells_empty() {
        let mut out = Vec::new();
        write_csv(&registry(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "type,name,profile,license_number,location,periodicity,circulation,frequency_range,frequency",
                "Print Media,PrintNews,News,12345,CityA,Daily,10000,,",
                "Radio Station,RadioWave,Music,67890,CityB,,,FM,101.5",
            ]
        );
    }

    #[test]
    fn test_json_is_array_in_insertion_order() {
        let mut out = Vec::new();
        export(&registry(), OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "PrintNews");
        assert_eq!(items[0]["circulation"], 10000);
        assert_eq!(items[1]["type"], "Radio Station");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
