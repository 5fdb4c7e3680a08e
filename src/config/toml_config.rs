use crate::core::export::OutputFormat;
use crate::core::registry::AgencyRegistry;
use crate::domain::model::{AgencyDetails, AgencyRecord, AgencyType, PrintMedia, RadioStation};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_one_of, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed file describing a registry's initial contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub agencies: Vec<SeedAgency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySettings {
    pub title: Option<String>,
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAgency {
    pub name: String,
    pub profile: String,
    pub license_number: String,
    pub location: String,
    pub r#type: String,
    pub periodicity: Option<String>,
    pub circulation: Option<u32>,
    pub frequency_range: Option<String>,
    pub frequency: Option<String>,
}

impl SeedAgency {
    /// Builds the record for this entry; the variant fields its type needs must be present.
    pub fn to_record(&self, index: usize) -> Result<AgencyRecord> {
        let agency_type: AgencyType = self.r#type.parse()?;
        let field = |name: &str| format!("agencies[{}].{}", index, name);

        let details = match agency_type {
            AgencyType::PrintMedia => AgencyDetails::PrintMedia(PrintMedia::new(
                validate_required_field(&field("periodicity"), &self.periodicity)?.clone(),
                *validate_required_field(&field("circulation"), &self.circulation)?,
            )),
            AgencyType::RadioStation => AgencyDetails::RadioStation(RadioStation::new(
                validate_required_field(&field("frequency_range"), &self.frequency_range)?.clone(),
                validate_required_field(&field("frequency"), &self.frequency)?.clone(),
            )),
        };

        Ok(AgencyRecord::new(
            self.name.clone(),
            self.profile.clone(),
            self.license_number.clone(),
            self.location.clone(),
            details,
        ))
    }
}

impl RegistryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn title(&self) -> &str {
        self.registry.title.as_deref().unwrap_or("Media agency registry")
    }

    pub fn default_format(&self) -> Result<OutputFormat> {
        self.registry
            .default_format
            .as_deref()
            .map(str::parse)
            .unwrap_or(Ok(OutputFormat::Text))
    }

    /// Registers every seed entry, in file order.
    pub fn into_registry(&self) -> Result<AgencyRegistry> {
        let mut registry = AgencyRegistry::new();
        for (index, seed) in self.agencies.iter().enumerate() {
            registry.add(seed.to_record(index)?);
        }
        tracing::info!(
            "Seeded '{}' with {} agencies",
            self.title(),
            registry.len()
        );
        Ok(registry)
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.registry.default_format {
            validate_one_of("registry.default_format", format, &OutputFormat::NAMES)?;
        }
        for (index, seed) in self.agencies.iter().enumerate() {
            seed.to_record(index)?;
        }
        Ok(())
    }
}
